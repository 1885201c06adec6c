use crate::reports;
use chordforge::layout::Layout;
use chordforge::ChordResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {}

pub fn run(layout: &Layout) -> ChordResult<()> {
    println!("\n🧭 === LAYER PATHS ({}) ===", layout.keyboard().name());
    reports::print_layout_grid(layout);
    reports::print_layer_paths(layout);
    Ok(())
}
