//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material and
//! piece-square evaluation. Scores are always White-relative; the side to
//! move at the root decides whether the search maximizes or minimizes.

mod eval;
mod pst;
mod search;

use chess_core::{Engine, Rules, SearchError, SearchResult};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, captures searched first
/// - Material evaluation with optional piece-square tables
/// - Checkmate, stalemate and draw detection from the rules layer
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine<E = ClassicalEval> {
    evaluator: E,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> ClassicalEngine<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<P, E> Engine<P> for ClassicalEngine<E>
where
    P: Rules,
    E: Evaluator<P>,
{
    fn search(&mut self, pos: &P, depth: u8) -> Result<SearchResult<P::Move>, SearchError> {
        let mut searcher = Searcher::new(&self.evaluator);
        let outcome = searcher.pick_best_move(pos, depth);
        self.nodes = searcher.nodes();
        let Some((mv, score)) = outcome? else {
            return Ok(SearchResult::no_move(depth));
        };

        Ok(SearchResult {
            best_move: Some(mv),
            score,
            depth,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value, ClassicalEval, Evaluator};
pub use search::{is_mate_score, Searcher, DRAW_SCORE, INFINITY, MATE_SCORE};
