//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - The beginner difficulty level
//! - Baseline comparisons (any real engine should easily beat this)

use chess_core::{Engine, Rules, SearchError, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};


/// Picks a legal move uniformly at random, or None if there are none.
///
/// No evaluation is performed.
pub fn pick_random_move<P: Rules, R: Rng + ?Sized>(pos: &P, rng: &mut R) -> Option<P::Move> {
    pos.legal_moves().choose(rng).copied()
}

/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone)]
pub struct RandomEngine<R = StdRng> {
    rng: R,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence of choices, for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }
}

impl<P: Rules, R: Rng> Engine<P> for RandomEngine<R> {
    fn search(&mut self, pos: &P, _depth: u8) -> Result<SearchResult<P::Move>, SearchError> {
        let Some(mv) = pick_random_move(pos, &mut self.rng) else {
            self.nodes = 0;
            return Ok(SearchResult::no_move(0));
        };
        self.nodes = 1;

        Ok(SearchResult {
            best_move: Some(mv),
            score: 0,
            depth: 0,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
