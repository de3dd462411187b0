//! UCI command handling, kept apart from stdin/stdout so it can be tested.

use std::io::{self, Write};

use chess_core::{move_to_uci, set_position_from_uci, Color, Position, Rules};
use classical_engine::{is_mate_score, MATE_SCORE};
use opponent::{Difficulty, Opponent};
use tracing::{debug, error, warn};

/// Whether the command loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    pos: Position,
    difficulty: Difficulty,
    opponent: Opponent,
}

impl Session {
    pub fn new(opponent: Opponent, difficulty: Difficulty) -> Self {
        Self {
            pos: Position::startpos(),
            difficulty,
            opponent,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Handles one line of input, writing any reply to `out`.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(Flow::Continue);
        };

        match command {
            "uci" => {
                writeln!(out, "id name Opponent {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(out, "id author ML-chess")?;
                writeln!(
                    out,
                    "option name Difficulty type combo default {} var beginner var easy var hard var master",
                    self.difficulty
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => self.set_option(&parts[1..]),
            "ucinewgame" => {
                self.pos = Position::startpos();
            }
            "position" => match set_position_from_uci(&parts[1..]) {
                Ok(pos) => self.pos = pos,
                Err(e) => warn!("ignoring position command: {e}"),
            },
            "go" => self.go(out)?,
            "quit" => return Ok(Flow::Quit),
            _ => debug!(command, "ignoring unknown command"),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    // Example: setoption name Difficulty value master
    fn set_option(&mut self, args: &[&str]) {
        let name_at = args.iter().position(|&x| x == "name");
        let value_at = args.iter().position(|&x| x == "value");
        let (Some(name_at), Some(value_at)) = (name_at, value_at) else {
            warn!(?args, "malformed setoption");
            return;
        };
        if value_at <= name_at {
            warn!(?args, "malformed setoption");
            return;
        }

        let name = args[name_at + 1..value_at].join(" ");
        let value = args[value_at + 1..].join(" ");
        if !name.eq_ignore_ascii_case("difficulty") {
            debug!(%name, "ignoring unknown option");
            return;
        }
        match value.parse() {
            Ok(difficulty) => self.difficulty = difficulty,
            Err(e) => warn!("{e}"),
        }
    }

    fn go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        // Clock arguments are ignored: strength comes from the difficulty alone
        match self.opponent.search(&self.pos, self.difficulty) {
            Ok(result) => {
                let side = self.pos.side_to_move();
                writeln!(
                    out,
                    "info depth {} score {} nodes {}",
                    result.depth,
                    uci_score(result.score, result.depth, side),
                    result.nodes
                )?;
                match result.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(&self.pos, mv))?,
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            Err(e) => {
                error!("search failed: {e}");
                writeln!(out, "bestmove 0000")?;
            }
        }
        Ok(())
    }
}

/// Converts a White-relative score to UCI's side-to-move `cp`/`mate` form.
pub fn uci_score(score: i32, depth: u8, side: Color) -> String {
    let relative = match side {
        Color::White => score,
        Color::Black => -score,
    };
    if is_mate_score(relative) {
        // Mate scores carry the depth left when the mate was found
        let plies = (depth as i32 - (relative.abs() - MATE_SCORE)).max(1);
        let moves = (plies + 1) / 2;
        let moves = if relative > 0 { moves } else { -moves };
        format!("mate {moves}")
    } else {
        format!("cp {relative}")
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
