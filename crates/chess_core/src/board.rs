//! Standard-chess [`Rules`] implementation backed by `cozy-chess`.
//!
//! Move generation and FEN handling are delegated; this type adds the
//! make/unmake pair the search expects and the draw bookkeeping
//! (repetition history, fifty-move rule, insufficient material).

use std::fmt;
use std::str::FromStr;

use cozy_chess::{Board, Move};

use crate::{
    error::RulesError,
    rules::{GameStatus, Rules},
    types::*,
};

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    /// Hashes of every position reached so far, current one last.
    history: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        let history = vec![board.hash()];
        Self { board, history }
    }

    /// Parses Forsyth-Edwards Notation. The halfmove and fullmove counters
    /// may be omitted and default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let padded = match fields.len() {
            4 => format!("{} 0 1", fields.join(" ")),
            5 => format!("{} 1", fields.join(" ")),
            _ => fields.join(" "),
        };
        let board = Board::from_fen(&padded, false).map_err(|e| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn to_fen(&self) -> String {
        self.board.to_string()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.board.halfmove_clock() as u32
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.board.hash();
        self.history.iter().filter(|&&k| k == key).count() >= 3
    }

    /// Bare kings, or kings plus a single minor piece.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let mating_material = b.pieces(cozy_chess::Piece::Pawn)
            | b.pieces(cozy_chess::Piece::Rook)
            | b.pieces(cozy_chess::Piece::Queen);
        mating_material.is_empty() && b.occupied().len() <= 3
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Position {
    type Err = RulesError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Rules for Position {
    type Move = Move;
    type Undo = Board;

    fn legal_moves_into(&self, out: &mut Vec<Move>) {
        out.clear();
        self.board.generate_moves(|moves| {
            out.extend(moves);
            false
        });
    }

    fn make_move(&mut self, mv: Move) -> Result<Board, RulesError> {
        let undo = self.board.clone();
        self.board
            .try_play(mv)
            .map_err(|_| RulesError::IllegalMove {
                mv: mv.to_string(),
                fen: undo.to_string(),
            })?;
        self.history.push(self.board.hash());
        Ok(undo)
    }

    fn unmake_move(&mut self, _mv: Move, undo: Board) {
        self.board = undo;
        self.history.pop();
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn status(&self) -> GameStatus {
        let has_moves = self.board.generate_moves(|_| true);
        if !has_moves {
            return if self.in_check() {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_fifty_move_draw()
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
        {
            return GameStatus::Draw;
        }
        GameStatus::Ongoing
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        if sq >= 64 {
            return None;
        }
        let square = cozy_chess::Square::index(sq as usize);
        let kind = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Piece::new(color.into(), kind.into()))
    }

    fn is_capture(&self, mv: Move) -> bool {
        // Castling is encoded as king-takes-own-rook, so only enemy pieces count.
        self.board.colors(!self.board.side_to_move()).has(mv.to)
    }
}

impl From<cozy_chess::Color> for Color {
    fn from(c: cozy_chess::Color) -> Self {
        match c {
            cozy_chess::Color::White => Color::White,
            cozy_chess::Color::Black => Color::Black,
        }
    }
}

impl From<cozy_chess::Piece> for PieceKind {
    fn from(p: cozy_chess::Piece) -> Self {
        match p {
            cozy_chess::Piece::Pawn => PieceKind::Pawn,
            cozy_chess::Piece::Knight => PieceKind::Knight,
            cozy_chess::Piece::Bishop => PieceKind::Bishop,
            cozy_chess::Piece::Rook => PieceKind::Rook,
            cozy_chess::Piece::Queen => PieceKind::Queen,
            cozy_chess::Piece::King => PieceKind::King,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
