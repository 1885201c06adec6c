use crate::combinatorics::MixedRadix;
use crate::error::ChordResult;
use crate::geometry::Hand;
use crate::layout::{Key, Keys, Layout};
use crate::symbols;
use strum::IntoEnumIterator;
use tracing::debug;

/// Every legal key sequence for the leading `consumed` characters of a text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeysDecomposition {
    pub candidates: Vec<Keys>,
    pub consumed: usize,
}

impl KeysDecomposition {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// A key that can start at some text position.
struct KeyChoice {
    key: Key,
    literal: Vec<char>,
    hand: Option<Hand>,
    switch: Option<usize>,
}

impl KeyChoice {
    fn fits(&self, text: &[char], pos: usize) -> bool {
        let end = pos + self.literal.len();
        !self.literal.is_empty() && end <= text.len() && text[pos..end] == self.literal[..]
    }
}

fn choices_for(layout: &Layout, symbol: char) -> Vec<KeyChoice> {
    layout
        .keys_for(symbol)
        .iter()
        .map(|&key| {
            let symbols = layout.symbols(key);
            KeyChoice {
                key,
                literal: symbols::literal(symbols).chars().collect(),
                hand: layout.keyboard().hand(key.key),
                switch: symbols::trailing_layer(symbols),
            }
        })
        .collect()
}

/// Furthest position reachable from 0 by chaining keys of one hand, taking
/// the better hand. Keys may only start before `max_one_hand_size`; a key
/// started inside the bound is kept whole.
fn one_hand_run(text: &[char], choices: &[Vec<KeyChoice>], max_one_hand_size: usize) -> usize {
    let bound = max_one_hand_size.min(text.len());
    let mut best = 0;

    for hand in Hand::iter() {
        let mut reachable = vec![false; text.len() + 1];
        reachable[0] = true;

        for pos in 0..bound {
            if !reachable[pos] {
                continue;
            }
            for choice in &choices[pos] {
                if choice.hand == Some(hand) && choice.fits(text, pos) {
                    let end = pos + choice.literal.len();
                    reachable[end] = true;
                    best = best.max(end);
                }
            }
        }
    }

    best
}

/// Enumerates the key sequences typing a bounded one-hand prefix of `text`.
///
/// One choice index per character drives a [`MixedRadix`] counter. A
/// multi-symbol key subsumes the characters it types and those slots must
/// sit at digit 0, so each sequence appears once. A key ending in a switch
/// glyph forces the next key onto that layer; on the last key of the batch
/// the switch is left for the caller to resolve.
pub fn decompose_to_keys(
    layout: &Layout,
    text: &str,
    max_one_hand_size: usize,
) -> ChordResult<KeysDecomposition> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Ok(KeysDecomposition {
            candidates: vec![Keys::new()],
            consumed: 0,
        });
    }

    let choices: Vec<Vec<KeyChoice>> = chars.iter().map(|&c| choices_for(layout, c)).collect();

    let consumed = one_hand_run(&chars, &choices, max_one_hand_size);
    if consumed == 0 {
        debug!("No key types {:?}", chars[0]);
        return Ok(KeysDecomposition::default());
    }

    let radices: Vec<usize> = choices[..consumed]
        .iter()
        .map(|c| c.len().max(1))
        .collect();
    let counter = MixedRadix::new(radices)?;
    let total = counter.total();

    let batch = &chars[..consumed];
    let candidates: Vec<Keys> = counter
        .filter_map(|digits| walk(batch, &choices, &digits))
        .collect();

    debug!(
        "Decomposed {} chars: {} combinations, {} candidates",
        consumed,
        total,
        candidates.len()
    );

    Ok(KeysDecomposition {
        candidates,
        consumed,
    })
}

/// Resolves one choice vector into keys, or `None` if it is illegal.
fn walk(text: &[char], choices: &[Vec<KeyChoice>], digits: &[usize]) -> Option<Keys> {
    let mut keys = Keys::new();
    let mut pending: Option<usize> = None;
    let mut pos = 0;

    while pos < text.len() {
        let choice = choices[pos].get(digits[pos])?;
        if !choice.fits(text, pos) {
            return None;
        }

        let end = pos + choice.literal.len();
        if digits[pos + 1..end].iter().any(|&d| d != 0) {
            return None;
        }
        if pending.is_some_and(|layer| layer != choice.key.layer) {
            return None;
        }

        pending = choice.switch;
        keys.push(choice.key);
        pos = end;
    }

    Some(keys)
}

/// Key sequences typing the whole of `text`, batch by batch.
///
/// Batches are joined only where a trailing switch glyph agrees with the
/// layer of the next batch's first key. Empty when the text cannot be typed.
pub fn decompose_text(
    layout: &Layout,
    text: &str,
    max_one_hand_size: usize,
) -> ChordResult<Vec<Keys>> {
    let chars: Vec<char> = text.chars().collect();
    let mut sequences: Vec<Keys> = vec![Keys::new()];
    let mut offset = 0;

    while offset < chars.len() {
        let rest: String = chars[offset..].iter().collect();
        let batch = decompose_to_keys(layout, &rest, max_one_hand_size)?;
        if batch.is_empty() {
            debug!("Text stops decomposing at offset {}", offset);
            return Ok(Vec::new());
        }

        let mut joined = Vec::new();
        for prefix in &sequences {
            let forced = prefix.last().and_then(|&k| layout.trailing_switch(k));
            for candidate in &batch.candidates {
                let first = candidate.first().map(|k| k.layer);
                if forced.is_some() && first.is_some() && forced != first {
                    continue;
                }
                let mut keys = prefix.clone();
                keys.extend_from_slice(candidate);
                joined.push(keys);
            }
        }

        if joined.is_empty() {
            return Ok(Vec::new());
        }
        sequences = joined;
        offset += batch.consumed;
    }

    Ok(sequences)
}
