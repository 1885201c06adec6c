pub mod accords;
pub mod keys;

pub use accords::{decompose_one_hand_accords, decompose_to_accords, Accord, Accords};
pub use keys::{decompose_text, decompose_to_keys, KeysDecomposition};
