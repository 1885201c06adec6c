/// Number of reserved layer-switch glyphs (layers 0..=20).
pub const LAYER_MARKER_COUNT: usize = 21;

/// Highest layer reachable through a layer-switch glyph.
pub const MAX_MARKER_LAYER: usize = LAYER_MARKER_COUNT - 1;

/// Glyph that switches to layer 0.
pub const LAYER_ZERO_MARKER: char = '\u{24EA}';

/// Glyph that switches to layer 1; layers 2..=20 follow contiguously.
pub const LAYER_ONE_MARKER: char = '\u{2460}';

/// Default bound on the number of characters enumerated per batch.
pub const DEFAULT_MAX_ONE_HAND_SIZE: usize = 10;

/// Layer active when a typing session starts.
pub const DEFAULT_LAYER: usize = 0;
