//! Static position evaluation.
//!
//! Scores are absolute: positive favors White, negative favors Black, no
//! matter whose turn it is. The search decides which sign it wants.

use chess_core::{Color, PieceKind, Rules};
use serde::{Deserialize, Serialize};

use crate::pst;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
///
/// The king is a sentinel far beyond any possible exchange. Both kings are
/// always on the board, so it cancels out in practice.
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20_000];

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Anything that can put a number on a position.
///
/// Implementations must be deterministic: the same position always gets the
/// same score.
pub trait Evaluator<P> {
    fn evaluate(&self, pos: &P) -> i32;
}

impl<P, F> Evaluator<P> for F
where
    F: Fn(&P) -> i32,
{
    fn evaluate(&self, pos: &P) -> i32 {
        self(pos)
    }
}

/// Material plus (optionally) piece-square bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalEval {
    /// Add the piece-square term on top of material.
    pub positional: bool,
}

impl ClassicalEval {
    pub fn material_only() -> Self {
        Self { positional: false }
    }
}

impl Default for ClassicalEval {
    fn default() -> Self {
        Self { positional: true }
    }
}

impl<P: Rules> Evaluator<P> for ClassicalEval {
    fn evaluate(&self, pos: &P) -> i32 {
        let mut score = 0i32;

        for sq in 0..64u8 {
            if let Some(pc) = pos.piece_at(sq) {
                let mut v = piece_value(pc.kind);
                if self.positional {
                    v += pst::bonus(pc, sq);
                }
                score += if pc.color == Color::White { v } else { -v };
            }
        }

        score
    }
}

/// Evaluates the position with the default evaluator.
///
/// Returns a score in centipawns:
/// - Positive = good for White
/// - Negative = good for Black
/// - 0 = equal position
pub fn evaluate<P: Rules>(pos: &P) -> i32 {
    ClassicalEval::default().evaluate(pos)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
