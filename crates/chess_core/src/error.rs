//! Error types shared by the rules layer and the engines.

use thiserror::Error;

/// Failures raised by the rules layer itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    #[error("unparseable move text '{0}'")]
    InvalidMoveText(String),
}

/// Failures that abort a single search call.
///
/// None of these are expected during normal play: they mean the rules layer
/// contradicted itself between enumerating a move and applying it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("rules engine rejected one of its own moves: {0}")]
    Rules(#[from] RulesError),

    #[error("rules engine reported an ongoing game with no legal moves")]
    InconsistentRules,
}
