pub mod accords;
pub mod keys;
pub mod paths;
pub mod plan;
