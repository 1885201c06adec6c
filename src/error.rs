use crate::geometry::{Column, Finger, Hand, KeyPos, Row};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    // === Data consistency ===
    #[error("Keyboard is malformed: {count} keys match {hand} {finger} {row} {column}")]
    AmbiguousKey {
        hand: Hand,
        finger: Finger,
        row: Row,
        column: Column,
        count: usize,
    },

    #[error("Key position {key} is out of range (keyboard has {size} keys)")]
    KeyOutOfRange { key: KeyPos, size: usize },

    #[error("Symbols for layer {layer}, key {key} are declared more than once")]
    DuplicateSymbol { layer: usize, key: KeyPos },

    // === Physical state violations ===
    #[error("{hand} {finger} is already holding key {held}")]
    FingerAlreadyBusy {
        hand: Hand,
        finger: Finger,
        held: KeyPos,
    },

    #[error("{hand} {finger} is not holding any key")]
    FingerNotBusy { hand: Hand, finger: Finger },

    #[error("Key {key} is released but {hand} {finger} is holding key {held}")]
    KeyNotHeld {
        key: KeyPos,
        hand: Hand,
        finger: Finger,
        held: KeyPos,
    },

    #[error("Key {key} on layer {layer} cannot be held: it does not switch layers")]
    NotAHoldKey { layer: usize, key: KeyPos },

    // === Enumeration input ===
    #[error("Radix at position {position} must be at least 1")]
    InvalidRadix { position: usize },

    #[error("Compositions are only defined for positive integers")]
    InvalidComposition,

    // === Pipeline ===
    #[error("No key sequence switches from layer {from} to layer {to}")]
    UnreachableLayer { from: usize, to: usize },

    #[error("Symbol {symbol:?} at offset {offset} is not produced by any key")]
    UnmappedSymbol { symbol: char, offset: usize },

    #[error("Text cannot be typed from offset {offset}")]
    NoDecomposition { offset: usize },
}

pub type ChordResult<T> = Result<T, ChordError>;
