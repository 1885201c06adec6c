//! Layer-switch glyphs.
//!
//! `⓪` switches to layer 0 and `①`..`⑳` to layers 1..20. They may appear in
//! a key's symbol string but are never typed as text.

use crate::consts::{LAYER_ONE_MARKER, LAYER_ZERO_MARKER, MAX_MARKER_LAYER};

/// Layer a glyph switches to, or `None` for ordinary symbols.
pub fn layer_of(symbol: char) -> Option<usize> {
    if symbol == LAYER_ZERO_MARKER {
        return Some(0);
    }
    let offset = (symbol as u32).checked_sub(LAYER_ONE_MARKER as u32)? as usize;
    (offset < MAX_MARKER_LAYER).then_some(offset + 1)
}

pub fn layer_marker(layer: usize) -> Option<char> {
    match layer {
        0 => Some(LAYER_ZERO_MARKER),
        1..=MAX_MARKER_LAYER => char::from_u32(LAYER_ONE_MARKER as u32 + layer as u32 - 1),
        _ => None,
    }
}

pub fn is_marker(symbol: char) -> bool {
    layer_of(symbol).is_some()
}

/// The typed part of a symbol string.
pub fn literal(symbols: &str) -> String {
    symbols.chars().filter(|&c| !is_marker(c)).collect()
}

/// Target layer when the string ends in a switch glyph.
pub fn trailing_layer(symbols: &str) -> Option<usize> {
    symbols.chars().next_back().and_then(layer_of)
}

/// Target layer when the string is nothing but a single switch glyph.
pub fn sole_layer(symbols: &str) -> Option<usize> {
    let mut chars = symbols.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => layer_of(c),
        _ => None,
    }
}
