use crate::error::ChordResult;
use crate::geometry::{Column, Finger, Hand, Keyboard, KeyboardKey, Row};
use crate::layout::{Layout, LayoutSymbols};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    /// Ten keys, one per finger, four layers.
    Tenkey,
    /// Two index-finger keys toggling between two layers.
    TwoKey,
}

fn home_key(x: f32, hand: Hand, finger: Finger) -> KeyboardKey {
    KeyboardKey::builder()
        .x(x)
        .hand(hand)
        .finger(finger)
        .row(Row::Middle)
        .column(Column::Middle)
        .build()
}

impl KnownLayout {
    pub fn keyboard(&self) -> Keyboard {
        match self {
            Self::Tenkey => {
                let keys = vec![
                    home_key(0.0, Hand::Left, Finger::Pinky),
                    home_key(1.0, Hand::Left, Finger::Ring),
                    home_key(2.0, Hand::Left, Finger::Middle),
                    home_key(3.0, Hand::Left, Finger::Index),
                    home_key(4.0, Hand::Left, Finger::Thumb),
                    home_key(6.0, Hand::Right, Finger::Thumb),
                    home_key(7.0, Hand::Right, Finger::Index),
                    home_key(8.0, Hand::Right, Finger::Middle),
                    home_key(9.0, Hand::Right, Finger::Ring),
                    home_key(10.0, Hand::Right, Finger::Pinky),
                ];
                Keyboard::new("tenkey", keys)
            }
            Self::TwoKey => {
                let keys = vec![
                    home_key(0.0, Hand::Left, Finger::Index),
                    home_key(2.0, Hand::Right, Finger::Index),
                ];
                Keyboard::new("two_key", keys)
            }
        }
    }

    pub fn symbols(&self) -> Vec<LayoutSymbols> {
        let cells: &[(usize, usize, &str)] = match self {
            // Layers 0/1 and 2/3 are declared interleaved; the order fixes
            // which switch path is enumerated first.
            Self::Tenkey => &[
                (0, 0, "a"),
                (1, 0, "②"),
                (0, 1, "b"),
                (1, 1, "A"),
                (0, 2, "c"),
                (1, 2, "B"),
                (0, 3, "d"),
                (1, 3, "C"),
                (0, 4, " "),
                (1, 4, "③"),
                (0, 5, "①"),
                (1, 5, " "),
                (0, 6, ", "),
                (1, 6, ","),
                (0, 7, ". ①"),
                (1, 7, "."),
                (0, 8, "the"),
                (1, 8, "The"),
                (0, 9, "②"),
                (1, 9, "D"),
                (2, 0, "e"),
                (3, 0, "E"),
                (2, 1, "f"),
                (3, 1, "Й"),
                (2, 2, "g"),
                (3, 2, "G"),
                (2, 3, "h"),
                (3, 3, "H"),
                (2, 4, "i"),
                (3, 4, "I"),
                (2, 5, "③"),
                (3, 5, "⓪"),
                (2, 6, " - "),
                (3, 6, "-"),
                (2, 7, "; "),
                (3, 7, ";"),
                (2, 8, "THE"),
                (3, 8, "the"),
                (2, 9, "{}"),
                (3, 9, "[]"),
            ],
            Self::TwoKey => &[(0, 0, "a"), (0, 1, "①"), (1, 0, "A"), (1, 1, "⓪")],
        };

        cells
            .iter()
            .map(|&(layer, key, s)| LayoutSymbols::new(layer, key, s))
            .collect()
    }

    pub fn layout(&self) -> ChordResult<Layout> {
        Layout::new(self.keyboard(), self.symbols())
    }
}
