use crate::reports;
use chordforge::config::Config;
use chordforge::decompose::{decompose_text, decompose_to_keys};
use chordforge::layout::Layout;
use chordforge::ChordResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct KeysArgs {
    #[command(flatten)]
    pub config: Config,

    pub text: String,

    /// Decompose the whole text instead of the first batch only
    #[arg(long, default_value_t = false)]
    pub full: bool,
}

pub fn run(args: &KeysArgs, layout: &Layout, config: &Config) -> ChordResult<()> {
    let max = config.decompose.max_one_hand_size;

    if args.full {
        let sequences = decompose_text(layout, &args.text, max)?;
        println!("\n🔎 {} full key sequences for {:?}", sequences.len(), args.text);
        reports::print_key_sequences(layout, &sequences);
    } else {
        let batch = decompose_to_keys(layout, &args.text, max)?;
        let prefix: String = args.text.chars().take(batch.consumed).collect();
        println!(
            "\n🔎 {} candidates for the first {} chars {:?}",
            batch.candidates.len(),
            batch.consumed,
            prefix
        );
        reports::print_key_sequences(layout, &batch.candidates);
    }
    Ok(())
}
