#![allow(dead_code)]

use chordforge::geometry::{Column, Finger, Hand, Keyboard, KeyboardKey, Row};
use chordforge::layout::{Key, Keys, Layout, LayoutSymbols};
use chordforge::layouts::KnownLayout;

/// Builder for KeyboardKey to keep fixtures short
pub struct KeyBuilder {
    x: f32,
    hand: Hand,
    finger: Finger,
    row: Row,
    column: Column,
}

impl KeyBuilder {
    pub fn new(hand: Hand, finger: Finger) -> Self {
        Self {
            x: 0.0,
            hand,
            finger,
            row: Row::Middle,
            column: Column::Middle,
        }
    }

    pub fn at(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.row = row;
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.column = column;
        self
    }

    pub fn build(self) -> KeyboardKey {
        KeyboardKey::builder()
            .x(self.x)
            .hand(self.hand)
            .finger(self.finger)
            .row(self.row)
            .column(self.column)
            .build()
    }
}

pub fn k(layer: usize, key: usize) -> Key {
    Key::new(layer, key)
}

pub fn keys(pairs: &[(usize, usize)]) -> Keys {
    pairs.iter().map(|&(l, p)| Key::new(l, p)).collect()
}

pub fn tenkey() -> Layout {
    KnownLayout::Tenkey.layout().unwrap()
}

pub fn two_key() -> Layout {
    KnownLayout::TwoKey.layout().unwrap()
}

/// One left-hand key per finger, pinky first.
pub fn left_hand() -> Keyboard {
    let fingers = [
        Finger::Pinky,
        Finger::Ring,
        Finger::Middle,
        Finger::Index,
        Finger::Thumb,
    ];
    let keys = fingers
        .iter()
        .enumerate()
        .map(|(i, &f)| KeyBuilder::new(Hand::Left, f).at(i as f32).build())
        .collect();
    Keyboard::new("left_hand", keys)
}

pub fn layout_from(keyboard: Keyboard, cells: &[(usize, usize, &str)]) -> Layout {
    let symbols = cells
        .iter()
        .map(|&(layer, key, s)| LayoutSymbols::new(layer, key, s))
        .collect();
    Layout::new(keyboard, symbols).unwrap()
}
