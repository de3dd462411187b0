use crate::{error::RulesError, rules::Rules};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
///
/// Exercises nothing but `legal_moves_into`, `make_move` and `unmake_move`,
/// which makes it the quickest way to validate a [`Rules`] implementation.
/// A generated move that fails to apply is reported, not skipped.
pub fn perft<P: Rules>(pos: &mut P, depth: u8) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    fn inner<P: Rules>(
        pos: &mut P,
        depth: u8,
        layers: &mut [Vec<P::Move>],
    ) -> Result<u64, RulesError> {
        if depth == 0 {
            return Ok(1);
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return Ok(0);
        };

        pos.legal_moves_into(buf);
        if depth == 1 {
            return Ok(buf.len() as u64);
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = pos.make_move(mv)?;
            let count = inner(pos, depth - 1, rest);
            pos.unmake_move(mv, undo);
            nodes += count?;
        }
        Ok(nodes)
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}
