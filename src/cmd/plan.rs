use crate::reports;
use chordforge::analysis::plan_typing;
use chordforge::config::Config;
use chordforge::layout::Layout;
use chordforge::typer::{BaselineTyper, Typer};
use chordforge::ChordResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: Config,

    pub text: String,
}

pub fn run(args: &PlanArgs, layout: &Layout, config: &Config) -> ChordResult<()> {
    let mut typer = BaselineTyper::new(layout.keyboard(), config.costs.clone());
    let plan = plan_typing(layout, &args.text, &mut typer, &config.decompose)?;

    println!("\n⌨️  === TYPING PLAN === ⌨️");
    reports::print_plan(layout, &plan);
    println!("⏱️  Elapsed: {:.1} ms", typer.elapsed());
    Ok(())
}
