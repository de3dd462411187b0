//! Piece-square tables.
//!
//! Each table is written from White's point of view with a1 as the first
//! entry, so the rows below read rank 1 at the top. Black pieces look up the
//! vertically mirrored square.

use chess_core::{flip_rank, Color, Piece};

type Pst = [i32; 64];

#[rustfmt::skip]
const PAWN: Pst = [
     0,   0,   0,   0,   0,   0,   0,   0, // rank 1
     5,  10,  10, -20, -20,  10,  10,   5, // rank 2
     5,  -5, -10,   0,   0, -10,  -5,   5, // rank 3
     0,   0,   0,  20,  20,   0,   0,   0, // rank 4
     5,   5,  10,  25,  25,  10,   5,   5, // rank 5
    10,  10,  20,  30,  30,  20,  10,  10, // rank 6
    50,  50,  50,  50,  50,  50,  50,  50, // rank 7
     0,   0,   0,   0,   0,   0,   0,   0, // rank 8
];

#[rustfmt::skip]
const KNIGHT: Pst = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   5,   5,   0, -20, -40,
   -30,   5,  10,  15,  15,  10,   5, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   5,  15,  20,  20,  15,   5, -30,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: Pst = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   5,   0,   0,   0,   0,   5, -10,
   -10,  10,  10,  10,  10,  10,  10, -10,
   -10,   0,  10,  10,  10,  10,   0, -10,
   -10,   5,   5,  10,  10,   5,   5, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: Pst = [
     0,   0,   0,   5,   5,   0,   0,   0,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     5,  10,  10,  10,  10,  10,  10,   5, // seventh rank
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN: Pst = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   5,   0,   0,   0,   0, -10,
   -10,   5,   5,   5,   5,   5,   0, -10,
     0,   0,   5,   5,   5,   5,   0,  -5,
    -5,   0,   5,   5,   5,   5,   0,  -5,
   -10,   0,   5,   5,   5,   5,   0, -10,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

// Middlegame king: stay castled behind the pawns.
#[rustfmt::skip]
const KING: Pst = [
    20,  30,  10,   0,   0,  10,  30,  20,
    20,  20,   0,   0,   0,   0,  20,  20,
   -10, -20, -20, -20, -20, -20, -20, -10,
   -20, -30, -30, -40, -40, -30, -30, -20,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
];

/// Indexed by `PieceKind::idx()`.
const TABLES: [&Pst; 6] = [&PAWN, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING];

/// Positional bonus for `piece` standing on `sq`, from its owner's point of view.
#[inline]
pub fn bonus(piece: Piece, sq: u8) -> i32 {
    let idx = match piece.color {
        Color::White => sq,
        Color::Black => flip_rank(sq),
    };
    TABLES[piece.kind.idx()][idx as usize]
}
