use crate::config::DecomposeParams;
use crate::decompose::{decompose_to_accords, decompose_to_keys, Accords, KeysDecomposition};
use crate::error::{ChordError, ChordResult};
use crate::geometry::KeyPos;
use crate::layout::{Keys, Layout};
use crate::physical::{PhysicalState, Taps};
use crate::typer::Typer;
use crate::typing::decompose_to_taps;
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// One batch of text and how it gets typed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStep {
    pub text: String,
    pub keys: Keys,
    pub taps: Taps,
    pub accords: Accords,
    pub time_ms: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypingPlan {
    pub steps: Vec<PlanStep>,
}

impl TypingPlan {
    pub fn taps(&self) -> Taps {
        self.steps.iter().flat_map(|s| s.taps.iter().copied()).collect()
    }

    pub fn accords(&self) -> Accords {
        self.steps.iter().flat_map(|s| s.accords.iter().cloned()).collect()
    }

    pub fn keys(&self) -> Keys {
        self.steps.iter().flat_map(|s| s.keys.iter().copied()).collect()
    }

    pub fn total_time(&self) -> f32 {
        self.steps.iter().map(|s| s.time_ms).sum()
    }
}

/// A key candidate carried through taps and accord grouping.
struct Evaluated {
    keys: Keys,
    taps: Taps,
    accords: Vec<Accords>,
    state: PhysicalState,
}

fn evaluate(layout: &Layout, keys: &Keys, state: &PhysicalState) -> ChordResult<Evaluated> {
    let mut state = state.clone();
    let taps = decompose_to_taps(layout, keys, &mut state)?;
    let positions: Vec<KeyPos> = taps.iter().map(|t| t.key).collect();
    let accords = decompose_to_accords(layout.keyboard(), &positions)?;
    Ok(Evaluated {
        keys: keys.clone(),
        taps,
        accords,
        state,
    })
}

/// Splits `text` into batches and lets `typer` choose how each is typed.
///
/// Every key candidate of a batch is expanded to taps and accord groupings
/// in parallel; the typer then picks among all accord variants of all
/// candidates, and the owning candidate's physical state carries on.
///
/// A candidate that leaves a one-shot layer pending is only eligible when
/// some key sequence of the following batch starts on that layer.
pub fn plan_typing<T: Typer + ?Sized>(
    layout: &Layout,
    text: &str,
    typer: &mut T,
    params: &DecomposeParams,
) -> ChordResult<TypingPlan> {
    let chars: Vec<char> = text.chars().collect();
    let mut state = PhysicalState::new(params.default_layer);
    let mut plan = TypingPlan::default();
    let mut offset = 0;
    let mut upcoming: Option<KeysDecomposition> = None;

    while offset < chars.len() {
        let batch = match upcoming.take() {
            Some(batch) => batch,
            None => {
                let rest: String = chars[offset..].iter().collect();
                decompose_to_keys(layout, &rest, params.max_one_hand_size)?
            }
        };
        if batch.consumed == 0 {
            let symbol = chars[offset];
            return Err(if layout.keys_for(symbol).is_empty() {
                ChordError::UnmappedSymbol { symbol, offset }
            } else {
                ChordError::NoDecomposition { offset }
            });
        }

        let pending = state.pending_one_tap();
        let candidates: Vec<&Keys> = batch
            .candidates
            .iter()
            .filter(|keys| match (pending, keys.first()) {
                (Some(layer), Some(first)) => first.layer == layer,
                _ => true,
            })
            .collect();

        let results: Vec<ChordResult<Evaluated>> = candidates
            .par_iter()
            .map(|keys| evaluate(layout, keys, &state))
            .collect();

        let mut first_error = None;
        let mut evaluated = Vec::with_capacity(results.len());
        for res in results {
            match res {
                Ok(e) if e.accords.is_empty() => {
                    debug!("Keys {:?} have no accord grouping", e.keys);
                }
                Ok(e) => evaluated.push(e),
                Err(err) => {
                    warn!("Skipping candidate at offset {}: {}", offset, err);
                    first_error.get_or_insert(err);
                }
            }
        }

        // A pending one-shot must match where the next batch can start.
        let next_offset = offset + batch.consumed;
        if next_offset < chars.len() {
            let rest: String = chars[next_offset..].iter().collect();
            let next = decompose_to_keys(layout, &rest, params.max_one_hand_size)?;
            let starts: BTreeSet<usize> = next
                .candidates
                .iter()
                .filter_map(|keys| keys.first())
                .map(|key| key.layer)
                .collect();
            if next.consumed > 0 {
                evaluated.retain(|e| match e.state.pending_one_tap() {
                    Some(layer) if !starts.contains(&layer) => {
                        debug!(
                            "Keys {:?} strand the next batch on layer {}",
                            e.keys, layer
                        );
                        false
                    }
                    _ => true,
                });
            }
            upcoming = Some(next);
        }

        if evaluated.is_empty() {
            return Err(first_error.unwrap_or(ChordError::NoDecomposition { offset }));
        }

        let owners: Vec<usize> = evaluated
            .iter()
            .enumerate()
            .flat_map(|(i, e)| std::iter::repeat_n(i, e.accords.len()))
            .collect();
        let variants: Vec<Accords> = evaluated
            .iter()
            .flat_map(|e| e.accords.iter().cloned())
            .collect();

        let choice = typer
            .optimal_accords(&variants)
            .ok_or(ChordError::NoDecomposition { offset })?;
        let (accords, owner) = variants
            .get(choice)
            .zip(owners.get(choice))
            .ok_or(ChordError::NoDecomposition { offset })?;
        let time_ms = typer.type_accords(accords);

        let step_text: String = chars[offset..offset + batch.consumed].iter().collect();
        debug!(
            "Batch {:?}: {} key candidates, {} accord variants, {:.1} ms",
            step_text,
            candidates.len(),
            variants.len(),
            time_ms
        );

        let accords = accords.clone();
        let owner = *owner;
        let winner = evaluated
            .into_iter()
            .nth(owner)
            .ok_or(ChordError::NoDecomposition { offset })?;

        plan.steps.push(PlanStep {
            text: step_text,
            keys: winner.keys,
            taps: winner.taps,
            accords,
            time_ms,
        });
        state = winner.state;
        offset += batch.consumed;
    }

    info!(
        "Planned {} chars in {} steps, {:.1} ms",
        chars.len(),
        plan.steps.len(),
        plan.total_time()
    );
    Ok(plan)
}
