use crate::combinatorics::{Compositions, MixedRadix};
use crate::error::ChordResult;
use crate::geometry::{Finger, Hand, KeyPos, Keyboard};
use itertools::Itertools;
use tracing::debug;

/// Keys pressed together, kept in typing order.
pub type Accord = Vec<KeyPos>;
/// Accords in temporal order.
pub type Accords = Vec<Accord>;

/// Every grouping of a single-hand key run into consecutive accords.
///
/// A chord never uses one finger twice, and two neighbouring single-key
/// accords must share a finger.
pub fn decompose_one_hand_accords(keyboard: &Keyboard, run: &[KeyPos]) -> ChordResult<Vec<Accords>> {
    if run.is_empty() {
        return Ok(vec![Accords::new()]);
    }

    let fingers: Vec<Finger> = run
        .iter()
        .map(|&p| keyboard.check_pos(p).map(|k| k.finger))
        .collect::<ChordResult<_>>()?;

    let mut result = Vec::new();
    for parts in Compositions::new(run.len())? {
        let mut groups: Vec<(Accord, Vec<Finger>)> = Vec::with_capacity(parts.len());
        let mut start = 0;
        for len in parts {
            groups.push((
                run[start..start + len].to_vec(),
                fingers[start..start + len].to_vec(),
            ));
            start += len;
        }

        let chords_ok = groups
            .iter()
            .all(|(_, f)| f.len() == 1 || f.iter().all_unique());
        if !chords_ok {
            continue;
        }

        let singles_ok = groups
            .iter()
            .tuple_windows()
            .all(|((_, a), (_, b))| !(a.len() == 1 && b.len() == 1 && a[0] != b[0]));
        if !singles_ok {
            continue;
        }

        result.push(groups.into_iter().map(|(accord, _)| accord).collect());
    }

    Ok(result)
}

/// Every accord sequence for a full key sequence.
///
/// The sequence is split into runs of one hand; runs are grouped on their
/// own and combined as a cross product, run 0 varying fastest.
pub fn decompose_to_accords(keyboard: &Keyboard, positions: &[KeyPos]) -> ChordResult<Vec<Accords>> {
    let hands: Vec<(KeyPos, Hand)> = positions
        .iter()
        .map(|&p| keyboard.check_pos(p).map(|k| (p, k.hand)))
        .collect::<ChordResult<_>>()?;

    let mut per_run: Vec<Vec<Accords>> = Vec::new();
    for run in hands.chunk_by(|a, b| a.1 == b.1) {
        let keys: Vec<KeyPos> = run.iter().map(|(p, _)| *p).collect();
        let variants = decompose_one_hand_accords(keyboard, &keys)?;
        if variants.is_empty() {
            debug!("Run {:?} has no legal grouping", keys);
            return Ok(Vec::new());
        }
        per_run.push(variants);
    }

    let counter = MixedRadix::new(per_run.iter().map(Vec::len).collect())?;
    let result: Vec<Accords> = counter
        .map(|digits| {
            digits
                .iter()
                .zip(&per_run)
                .flat_map(|(&d, variants)| variants[d].iter().cloned())
                .collect()
        })
        .collect();

    debug!(
        "{} keys in {} hand runs: {} accord candidates",
        positions.len(),
        per_run.len(),
        result.len()
    );
    Ok(result)
}
