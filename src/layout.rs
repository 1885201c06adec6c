use crate::consts::MAX_MARKER_LAYER;
use crate::error::{ChordError, ChordResult};
use crate::geometry::{Keyboard, KeyPos, KeyPoses};
use crate::layer_graph::{LayerEdge, LayerGraph};
use crate::symbols;
use fnv::{FnvHashMap, FnvHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A cell of the layered layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Key {
    pub layer: usize,
    pub key: KeyPos,
}

impl Key {
    pub fn new(layer: usize, key: KeyPos) -> Self {
        Self { layer, key }
    }
}

pub type Keys = Vec<Key>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSymbols {
    pub key: Key,
    pub symbols: String,
}

impl LayoutSymbols {
    pub fn new(layer: usize, key: KeyPos, symbols: impl Into<String>) -> Self {
        Self {
            key: Key::new(layer, key),
            symbols: symbols.into(),
        }
    }
}

/// Keyboard plus the symbols every (layer, key) cell produces.
///
/// Immutable once built; the first-symbol index and the layer graph are
/// derived from the symbol table in [`Layout::new`].
#[derive(Debug, Clone)]
pub struct Layout {
    keyboard: Keyboard,
    symbols: Vec<LayoutSymbols>,
    table: Vec<Vec<String>>,
    first_symbol: FnvHashMap<char, Keys>,
    graph: LayerGraph,
}

impl Layout {
    pub fn new(keyboard: Keyboard, symbols: Vec<LayoutSymbols>) -> ChordResult<Self> {
        let mut seen = FnvHashSet::default();
        for entry in &symbols {
            keyboard.check_pos(entry.key.key)?;
            if entry.key.layer > MAX_MARKER_LAYER {
                return Err(ChordError::Validation(format!(
                    "Layer {} of key {} is past the last switchable layer {}",
                    entry.key.layer, entry.key.key, MAX_MARKER_LAYER
                )));
            }
            if !seen.insert(entry.key) {
                return Err(ChordError::DuplicateSymbol {
                    layer: entry.key.layer,
                    key: entry.key.key,
                });
            }
        }

        // Layers are bounded above, so the increment cannot overflow.
        let layer_count = symbols.iter().map(|s| s.key.layer + 1).max().unwrap_or(0);
        let mut table = vec![vec![String::new(); keyboard.len()]; layer_count];
        let mut first_symbol: FnvHashMap<char, Keys> = FnvHashMap::default();
        let mut edges = Vec::new();

        for entry in &symbols {
            table[entry.key.layer][entry.key.key] = entry.symbols.clone();

            if let Some(first) = entry.symbols.chars().next() {
                first_symbol.entry(first).or_default().push(entry.key);
            }

            if let Some(to) = symbols::sole_layer(&entry.symbols) {
                edges.push(LayerEdge {
                    from: entry.key.layer,
                    to,
                    key: entry.key.key,
                });
            }
        }

        debug!(
            "Layout on '{}': {} layers, {} symbol cells, {} distinct first symbols",
            keyboard.name(),
            layer_count,
            symbols.len(),
            first_symbol.len()
        );

        Ok(Self {
            keyboard,
            symbols,
            table,
            first_symbol,
            graph: LayerGraph::new(edges),
        })
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn layer_count(&self) -> usize {
        self.table.len()
    }

    /// Declarations in the order they were given.
    pub fn layout_symbols(&self) -> &[LayoutSymbols] {
        &self.symbols
    }

    /// Symbol string of a cell; empty for cells nothing was declared on.
    pub fn symbols(&self, key: Key) -> &str {
        self.table
            .get(key.layer)
            .and_then(|row| row.get(key.key))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Keys whose symbol string starts with `symbol`, in declaration order.
    pub fn keys_for(&self, symbol: char) -> &[Key] {
        self.first_symbol
            .get(&symbol)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn layer_paths(&self, from: usize, to: usize) -> &[KeyPoses] {
        self.graph.paths(from, to)
    }

    pub fn shortest_layer_keys(&self, from: usize, to: usize) -> Option<&[KeyPos]> {
        self.graph.shortest(from, to)
    }

    /// Layer the next key is forced onto after `key` is typed.
    pub fn trailing_switch(&self, key: Key) -> Option<usize> {
        symbols::trailing_layer(self.symbols(key))
    }

    pub fn layer_graph(&self) -> &LayerGraph {
        &self.graph
    }
}
