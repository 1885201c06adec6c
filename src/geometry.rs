use crate::error::{ChordError, ChordResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use typed_builder::TypedBuilder;

/// Index of a physical key inside its [`Keyboard`].
pub type KeyPos = usize;
pub type KeyPoses = Vec<KeyPos>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    Pinky,
    #[serde(alias = "annular")]
    #[strum(to_string = "ring", serialize = "annular")]
    Ring,
    Middle,
    Index,
    Thumb,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Row {
    Lowest,
    Lower,
    Middle,
    Upper,
    Highest,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    TwoLeft,
    Left,
    Middle,
    Right,
    TwoRight,
}

fn unit_size() -> f32 {
    1.0
}

/// One physical key: placement in key units plus its anatomical assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct KeyboardKey {
    #[builder(default)]
    #[serde(default)]
    pub x: f32,
    #[builder(default)]
    #[serde(default)]
    pub y: f32,
    #[builder(default = 1.0)]
    #[serde(default = "unit_size")]
    pub w: f32,
    #[builder(default = 1.0)]
    #[serde(default = "unit_size")]
    pub h: f32,
    #[builder(default)]
    #[serde(default)]
    pub angle: f32,

    pub hand: Hand,
    pub finger: Finger,
    pub row: Row,
    pub column: Column,
}

/// Filter over the four anatomical axes. `None` matches anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyQuery {
    pub hand: Option<Hand>,
    pub finger: Option<Finger>,
    pub row: Option<Row>,
    pub column: Option<Column>,
}

impl KeyQuery {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn exact(hand: Hand, finger: Finger, row: Row, column: Column) -> Self {
        Self {
            hand: Some(hand),
            finger: Some(finger),
            row: Some(row),
            column: Some(column),
        }
    }

    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = Some(hand);
        self
    }

    pub fn with_finger(mut self, finger: Finger) -> Self {
        self.finger = Some(finger);
        self
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.column = Some(column);
        self
    }

    pub fn matches(&self, key: &KeyboardKey) -> bool {
        self.hand.is_none_or(|h| h == key.hand)
            && self.finger.is_none_or(|f| f == key.finger)
            && self.row.is_none_or(|r| r == key.row)
            && self.column.is_none_or(|c| c == key.column)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyboard {
    name: String,
    keys: Vec<KeyboardKey>,
}

impl Keyboard {
    pub fn new(name: impl Into<String>, keys: Vec<KeyboardKey>) -> Self {
        Self {
            name: name.into(),
            keys,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[KeyboardKey] {
        &self.keys
    }

    pub fn key(&self, pos: KeyPos) -> Option<&KeyboardKey> {
        self.keys.get(pos)
    }

    pub fn check_pos(&self, pos: KeyPos) -> ChordResult<&KeyboardKey> {
        self.keys.get(pos).ok_or(ChordError::KeyOutOfRange {
            key: pos,
            size: self.keys.len(),
        })
    }

    pub fn hand(&self, pos: KeyPos) -> Option<Hand> {
        self.key(pos).map(|k| k.hand)
    }

    pub fn finger(&self, pos: KeyPos) -> Option<Finger> {
        self.key(pos).map(|k| k.finger)
    }

    pub fn row(&self, pos: KeyPos) -> Option<Row> {
        self.key(pos).map(|k| k.row)
    }

    pub fn column(&self, pos: KeyPos) -> Option<Column> {
        self.key(pos).map(|k| k.column)
    }

    /// Every key matching the query, in keyboard order.
    ///
    /// A query concrete on all four axes names a single physical key, so
    /// more than one hit means the keyboard itself is malformed.
    pub fn get_keys(&self, query: &KeyQuery) -> ChordResult<KeyPoses> {
        let found: KeyPoses = self
            .keys
            .iter()
            .enumerate()
            .filter(|(_, k)| query.matches(k))
            .map(|(i, _)| i)
            .collect();

        if let (Some(hand), Some(finger), Some(row), Some(column)) =
            (query.hand, query.finger, query.row, query.column)
        {
            if found.len() > 1 {
                return Err(ChordError::AmbiguousKey {
                    hand,
                    finger,
                    row,
                    column,
                    count: found.len(),
                });
            }
        }

        Ok(found)
    }
}
