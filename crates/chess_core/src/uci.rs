use cozy_chess::{File, Move, Piece as CozyPiece, Square};

use crate::{board::Position, error::RulesError, rules::Rules};

/// Formats a move in UCI long algebraic notation.
///
/// Castling is written as the king's two-square step (`e1g1`), not the
/// king-takes-rook form used internally.
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    let board = pos.board();
    let is_castle = board.piece_on(mv.from) == Some(CozyPiece::King)
        && board.color_on(mv.to) == Some(board.side_to_move());
    if is_castle {
        let file = if mv.to.file() as usize > mv.from.file() as usize {
            File::G
        } else {
            File::C
        };
        let to = Square::new(file, mv.from.rank());
        return format!("{}{}", mv.from, to);
    }
    mv.to_string()
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    // Match against legal moves so castling comes out in its internal form.
    let txt = txt.trim().to_ascii_lowercase();
    pos.legal_moves()
        .into_iter()
        .find(|&mv| move_to_uci(pos, mv) == txt || mv.to_string() == txt)
}

/// Builds a position from the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fen> [moves ...]`.
pub fn set_position_from_uci(args: &[&str]) -> Result<Position, RulesError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &args[args.len()..]),
    };

    let mut pos = match setup.first() {
        None | Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&setup[1..].join(" "))?,
        Some(other) => {
            return Err(RulesError::InvalidFen {
                fen: other.to_string(),
                reason: "expected 'startpos' or 'fen'".to_string(),
            })
        }
    };

    for txt in moves {
        let mv = parse_uci_move(&pos, txt)
            .ok_or_else(|| RulesError::InvalidMoveText(txt.to_string()))?;
        pos.make_move(mv)?;
    }
    Ok(pos)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
