pub mod board;
pub mod error;
pub mod perft;
pub mod rules;
pub mod types;
pub mod uci;

// Re-export the rules boundary (not engine-specific)
pub use board::*;
pub use error::*;
pub use perft::perft;
pub use rules::*;
pub use types::*;
pub use uci::*;

/// Move type produced by [`Position`].
pub use cozy_chess::Move;

// =============================================================================
// Engine trait: implemented by every move-selection strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// The best move found (None if no legal moves)
    pub best_move: Option<M>,
    /// Evaluation score in centipawns, positive favoring White
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

impl<M> SearchResult<M> {
    /// The "no move available" outcome for checkmated or stalemated positions.
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all move-selection strategies implement.
///
/// Engines receive the caller's position by shared reference and must do any
/// make/unmake work on their own copy.
pub trait Engine<P: Rules> {
    /// Search the position to the given depth in plies.
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics, or an error
    /// if the rules engine contradicted itself during the search.
    fn search(&mut self, pos: &P, depth: u8) -> Result<SearchResult<P::Move>, SearchError>;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
