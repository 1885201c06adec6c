use crate::error::{ChordError, ChordResult};
use crate::geometry::{Keyboard, KeyboardKey};
use crate::layout::{Key, Layout, LayoutSymbols};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct KeyboardMeta {
    pub name: String,
    pub author: String,
    pub version: String,
    pub notes: String,
}

/// On-disk form of a keyboard and its layered symbols.
///
/// `layers[layer][key]` holds the symbol string of each cell; an empty
/// string means nothing is declared there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutDefinition {
    #[serde(default)]
    pub meta: KeyboardMeta,
    pub keys: Vec<KeyboardKey>,
    #[serde(default)]
    pub layers: Vec<Vec<String>>,
}

impl LayoutDefinition {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ChordResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let def: LayoutDefinition = serde_json::from_str(&content)?;
        info!(
            "Loaded definition '{}' ({} keys, {} layers) from {}",
            def.meta.name,
            def.keys.len(),
            def.layers.len(),
            path.display()
        );
        Ok(def)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ChordResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        info!("Saved definition '{}' to {}", self.meta.name, path.as_ref().display());
        Ok(())
    }

    pub fn from_layout(layout: &Layout) -> Self {
        let keyboard = layout.keyboard();
        let layers = (0..layout.layer_count())
            .map(|layer| {
                (0..keyboard.len())
                    .map(|key| layout.symbols(Key::new(layer, key)).to_string())
                    .collect()
            })
            .collect();

        Self {
            meta: KeyboardMeta {
                name: keyboard.name().to_string(),
                ..KeyboardMeta::default()
            },
            keys: keyboard.keys().to_vec(),
            layers,
        }
    }

    pub fn into_layout(self) -> ChordResult<Layout> {
        let size = self.keys.len();
        let mut symbols = Vec::new();
        for (layer, row) in self.layers.into_iter().enumerate() {
            if row.len() > size {
                return Err(ChordError::Validation(format!(
                    "layer {} declares {} keys but the keyboard has {}",
                    layer,
                    row.len(),
                    size
                )));
            }
            symbols.extend(
                row.into_iter()
                    .enumerate()
                    .filter(|(_, s)| !s.is_empty())
                    .map(|(key, s)| LayoutSymbols::new(layer, key, s)),
            );
        }

        let keyboard = Keyboard::new(self.meta.name, self.keys);
        Layout::new(keyboard, symbols)
    }
}
