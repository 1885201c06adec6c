use crate::reports;
use chordforge::decompose::decompose_to_accords;
use chordforge::geometry::KeyPos;
use chordforge::layout::Layout;
use chordforge::ChordResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct AccordsArgs {
    /// Key positions in typing order
    #[arg(num_args = 0..)]
    pub positions: Vec<KeyPos>,
}

pub fn run(args: &AccordsArgs, layout: &Layout) -> ChordResult<()> {
    let variants = decompose_to_accords(layout.keyboard(), &args.positions)?;
    println!(
        "\n🎹 {} accord groupings for {:?}",
        variants.len(),
        args.positions
    );
    reports::print_accords(layout, &variants);
    Ok(())
}
