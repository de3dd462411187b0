//! Automated opponent
//!
//! The one entry point the host needs: given a position and a
//! [`Difficulty`], pick a move for the side to move.
//!
//! - Beginner plays a uniformly random legal move.
//! - Every other level runs the classical minimax search to the depth its
//!   entry in the [`DepthTable`] gives.
//!
//! The caller's position is only ever read; all make/unmake work happens on
//! a private copy owned by the search call.

mod config;
mod difficulty;

pub use config::*;
pub use difficulty::*;

use chess_core::{Engine, Rules, SearchError, SearchResult};
use classical_engine::{ClassicalEngine, ClassicalEval};
use rand::rngs::StdRng;
use rand::Rng;
use random_engine::RandomEngine;
use tracing::debug;

/// Move selector holding one engine per strategy.
#[derive(Debug, Clone)]
pub struct Opponent<R = StdRng> {
    config: OpponentConfig,
    classical: ClassicalEngine,
    random: RandomEngine<R>,
}

impl Opponent {
    pub fn new(config: OpponentConfig) -> Self {
        Self::with_random_engine(config, RandomEngine::new())
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new(OpponentConfig::default())
    }
}

impl<R: Rng> Opponent<R> {
    /// Opponent whose beginner moves come from `rng`.
    pub fn with_rng(config: OpponentConfig, rng: R) -> Self {
        Self::with_random_engine(config, RandomEngine::with_rng(rng))
    }

    fn with_random_engine(config: OpponentConfig, random: RandomEngine<R>) -> Self {
        let evaluator = ClassicalEval {
            positional: config.positional,
        };
        Self {
            config,
            classical: ClassicalEngine::with_evaluator(evaluator),
            random,
        }
    }

    /// Runs the strategy for `difficulty` and returns the full search result.
    pub fn search<P: Rules>(
        &mut self,
        pos: &P,
        difficulty: Difficulty,
    ) -> Result<SearchResult<P::Move>, SearchError> {
        let depth = self.config.depth(difficulty);
        let result = match difficulty {
            Difficulty::Beginner => self.random.search(pos, depth)?,
            Difficulty::Easy | Difficulty::Hard | Difficulty::Master => {
                self.classical.search(pos, depth)?
            }
        };

        debug!(
            %difficulty,
            depth,
            nodes = result.nodes,
            score = result.score,
            best_move = ?result.best_move,
            "move selected"
        );
        Ok(result)
    }

    /// Picks a move for the side to move.
    ///
    /// Returns `Ok(None)` when there is no legal move (checkmate or
    /// stalemate). An error means the rules engine contradicted itself and
    /// no move could be trusted.
    pub fn select_move<P: Rules>(
        &mut self,
        pos: &P,
        difficulty: Difficulty,
    ) -> Result<Option<P::Move>, SearchError> {
        Ok(self.search(pos, difficulty)?.best_move)
    }
}

/// Picks a move with the default configuration.
pub fn select_move<P: Rules>(
    pos: &P,
    difficulty: Difficulty,
) -> Result<Option<P::Move>, SearchError> {
    Opponent::default().select_move(pos, difficulty)
}

/// Like [`select_move`], with beginner moves drawn from `rng`.
pub fn select_move_with_rng<P: Rules, R: Rng>(
    pos: &P,
    difficulty: Difficulty,
    rng: R,
) -> Result<Option<P::Move>, SearchError> {
    Opponent::with_rng(OpponentConfig::default(), rng).select_move(pos, difficulty)
}
