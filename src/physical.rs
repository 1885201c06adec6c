use crate::error::{ChordError, ChordResult};
use crate::geometry::{Finger, Hand, KeyPos};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Press {
    Once,
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tap {
    pub key: KeyPos,
    pub press: Press,
}

impl Tap {
    pub fn new(key: KeyPos, press: Press) -> Self {
        Self { key, press }
    }

    pub fn once(key: KeyPos) -> Self {
        Self::new(key, Press::Once)
    }

    pub fn down(key: KeyPos) -> Self {
        Self::new(key, Press::Down)
    }

    pub fn up(key: KeyPos) -> Self {
        Self::new(key, Press::Up)
    }
}

pub type Taps = Vec<Tap>;

/// Who pushed a layer onto the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayerTag {
    Base,
    Finger(Hand, Finger),
}

/// Fingers currently holding keys, the layer stack they built, and a pending
/// one-shot layer for the next tap.
#[derive(Debug, Clone)]
pub struct PhysicalState {
    held: FnvHashMap<(Hand, Finger), KeyPos>,
    layers: Vec<(LayerTag, usize)>,
    one_tap: Option<usize>,
}

impl PhysicalState {
    pub fn new(default_layer: usize) -> Self {
        Self {
            held: FnvHashMap::default(),
            layers: vec![(LayerTag::Base, default_layer)],
            one_tap: None,
        }
    }

    /// Active layer. Reading it consumes a pending one-shot.
    pub fn current_layer(&mut self) -> usize {
        self.one_tap.take().unwrap_or_else(|| self.stack_top())
    }

    /// Active layer without consuming anything.
    pub fn peek_layer(&self) -> usize {
        self.one_tap.unwrap_or_else(|| self.stack_top())
    }

    pub fn pending_one_tap(&self) -> Option<usize> {
        self.one_tap
    }

    pub fn default_layer(&self) -> usize {
        self.layers[0].1
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    pub fn is_finger_busy(&self, hand: Hand, finger: Finger) -> Option<KeyPos> {
        self.held.get(&(hand, finger)).copied()
    }

    pub fn busy_finger(
        &mut self,
        hand: Hand,
        finger: Finger,
        key: KeyPos,
        layer: usize,
    ) -> ChordResult<()> {
        if let Some(held) = self.is_finger_busy(hand, finger) {
            return Err(ChordError::FingerAlreadyBusy {
                hand,
                finger,
                held,
            });
        }

        self.held.insert((hand, finger), key);
        self.layers.push((LayerTag::Finger(hand, finger), layer));
        Ok(())
    }

    pub fn unbusy_finger(&mut self, hand: Hand, finger: Finger) -> ChordResult<()> {
        if self.held.remove(&(hand, finger)).is_none() {
            return Err(ChordError::FingerNotBusy { hand, finger });
        }

        let tag = LayerTag::Finger(hand, finger);
        // Entry 0 is the base layer and is never tagged with a finger.
        if let Some(idx) = self.layers.iter().position(|(t, _)| *t == tag) {
            self.layers.remove(idx);
        }
        Ok(())
    }

    pub fn add_one_tap(&mut self, layer: usize) {
        self.one_tap = Some(layer);
    }

    fn stack_top(&self) -> usize {
        self.layers.last().map_or(0, |(_, layer)| *layer)
    }
}

impl Default for PhysicalState {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_LAYER)
    }
}
