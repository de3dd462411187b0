//! The contract between the search and whatever implements chess rules.
//!
//! Search code is written against [`Rules`] only, so it never touches board
//! internals. [`crate::Position`] is the production implementation; tests also
//! drive the search over small synthetic game trees through the same trait.

use std::fmt;

use crate::{error::RulesError, types::*};

/// Outcome of a position as reported by the rules layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Side to move has no legal moves and is in check.
    Checkmate,
    /// Side to move has no legal moves and is not in check.
    Stalemate,
    /// Fifty-move rule, threefold repetition or insufficient material.
    Draw,
}

pub trait Rules: Clone {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;
    /// Whatever `unmake_move` needs to restore the previous state exactly.
    type Undo;

    /// Generate all legal moves into the provided buffer, reusing it across calls.
    fn legal_moves_into(&self, out: &mut Vec<Self::Move>);

    fn legal_moves(&self) -> Vec<Self::Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    fn make_move(&mut self, mv: Self::Move) -> Result<Self::Undo, RulesError>;

    fn unmake_move(&mut self, mv: Self::Move, undo: Self::Undo);

    fn side_to_move(&self) -> Color;

    fn status(&self) -> GameStatus;

    fn is_game_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }

    /// True for stalemate as well as the other drawn outcomes.
    fn is_draw(&self) -> bool {
        matches!(self.status(), GameStatus::Stalemate | GameStatus::Draw)
    }

    /// Piece on `sq` (a1 = 0 .. h8 = 63).
    fn piece_at(&self, sq: u8) -> Option<Piece>;

    /// Used for move ordering only.
    fn is_capture(&self, _mv: Self::Move) -> bool {
        false
    }
}
