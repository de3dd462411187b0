//! Minimax search with alpha-beta pruning

use chess_core::{Color, GameStatus, Rules, SearchError};
use tracing::debug;

use crate::eval::Evaluator;

/// Larger than any score the search can produce.
pub const INFINITY: i32 = 1_000_000_000;
/// Base score for a checkmate; far above any material count.
pub const MATE_SCORE: i32 = 1_000_000;
pub const DRAW_SCORE: i32 = 0;

/// True if `score` encodes a forced mate for either side.
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE
}

/// Score for a finished game, or None if play continues.
///
/// Mates found with more depth left are nearer the root and score higher,
/// so the search prefers the quickest mate.
fn terminal_score(status: GameStatus, depth: u8, maximizing: bool) -> Option<i32> {
    match status {
        GameStatus::Ongoing => None,
        GameStatus::Checkmate => {
            let mate = MATE_SCORE + depth as i32;
            Some(if maximizing { -mate } else { mate })
        }
        GameStatus::Stalemate | GameStatus::Draw => Some(DRAW_SCORE),
    }
}

/// Captures first. The sort is stable so generation order decides the rest.
fn order_moves<P: Rules>(pos: &P, moves: &mut [P::Move]) {
    moves.sort_by_key(|&mv| !pos.is_capture(mv));
}

/// One search call's worth of state: the evaluator and a node counter.
pub struct Searcher<'a, E> {
    evaluator: &'a E,
    nodes: u64,
}

impl<'a, E> Searcher<'a, E> {
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Nodes visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches the position and returns the best move with its score.
    ///
    /// # Arguments
    /// * `pos` - The position to search; never modified
    /// * `depth` - Search depth in plies, counting the root move
    ///
    /// # Returns
    /// `Ok(None)` if the side to move has no legal moves, otherwise the best
    /// move for the side to move and its White-relative score. Among moves
    /// with equal scores the first one in search order wins.
    pub fn pick_best_move<P>(
        &mut self,
        pos: &P,
        depth: u8,
    ) -> Result<Option<(P::Move, i32)>, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        let mut tmp = pos.clone();
        let mut moves = Vec::with_capacity(64);
        tmp.legal_moves_into(&mut moves);

        if moves.is_empty() {
            return Ok(None);
        }
        order_moves(&tmp, &mut moves);

        let maximizing = tmp.side_to_move() == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(P::Move, i32)> = None;

        for mv in moves {
            let undo = tmp.make_move(mv)?;
            self.nodes += 1;
            let score = self.minimax(&mut tmp, depth.saturating_sub(1), alpha, beta, !maximizing);
            tmp.unmake_move(mv, undo);
            let score = score?;

            debug!(mv = %mv, score, depth, "root move searched");

            let improved = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improved {
                best = Some((mv, score));
                // Later root moves only matter if they beat this one
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        Ok(best)
    }

    /// Recursive minimax search with alpha-beta pruning.
    ///
    /// Returns the White-relative score of `pos` searched `depth` plies deep.
    /// `maximizing` is true when White is to move at this node.
    pub fn minimax<P>(
        &mut self,
        pos: &mut P,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        if let Some(score) = terminal_score(pos.status(), depth, maximizing) {
            return Ok(score);
        }

        if depth == 0 {
            return Ok(self.evaluator.evaluate(pos));
        }

        let mut moves = Vec::with_capacity(64);
        pos.legal_moves_into(&mut moves);
        if moves.is_empty() {
            return Err(SearchError::InconsistentRules);
        }
        order_moves(pos, &mut moves);

        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let undo = pos.make_move(mv)?;
            self.nodes += 1;
            let score = self.minimax(pos, depth - 1, alpha, beta, !maximizing);
            pos.unmake_move(mv, undo);
            let score = score?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break; // Cutoff
            }
        }

        Ok(best)
    }

    /// Plain minimax without pruning. Visits the whole tree, so only useful
    /// for checking [`Searcher::minimax`] on small trees.
    pub fn minimax_full<P>(
        &mut self,
        pos: &mut P,
        depth: u8,
        maximizing: bool,
    ) -> Result<i32, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        if let Some(score) = terminal_score(pos.status(), depth, maximizing) {
            return Ok(score);
        }

        if depth == 0 {
            return Ok(self.evaluator.evaluate(pos));
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::InconsistentRules);
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            let undo = pos.make_move(mv)?;
            self.nodes += 1;
            let score = self.minimax_full(pos, depth - 1, !maximizing);
            pos.unmake_move(mv, undo);
            let score = score?;

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
