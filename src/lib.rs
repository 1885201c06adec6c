pub mod analysis;
pub mod combinatorics;
pub mod config;
pub mod consts;
pub mod decompose;
pub mod definition;
pub mod error;
pub mod geometry;
pub mod layer_graph;
pub mod layout;
pub mod layouts;
pub mod physical;
pub mod symbols;
pub mod typer;
pub mod typing;

pub use error::{ChordError, ChordResult};
