use chordforge::config::Config;
use chordforge::definition::LayoutDefinition;
use chordforge::layout::Layout;
use chordforge::layouts::KnownLayout;
use chordforge::ChordResult;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON keyboard + layout definition. Overrides --builtin.
    #[arg(global = true, short = 'd', long)]
    definition: Option<String>,

    #[arg(global = true, short, long, default_value = "tenkey")]
    builtin: KnownLayout,

    /// JSON config; explicit command-line flags still win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every switch path between layers
    Paths(cmd::paths::PathsArgs),
    /// Decompose text into key sequences
    Keys(cmd::keys::KeysArgs),
    /// Group key positions into accords
    Accords(cmd::accords::AccordsArgs),
    /// Plan how a text gets typed
    Plan(cmd::plan::PlanArgs),
}

fn load_layout(cli: &Cli) -> ChordResult<Layout> {
    match &cli.definition {
        Some(path) => LayoutDefinition::load_from_file(path)?.into_layout(),
        None => cli.builtin.layout(),
    }
}

fn main() {
    // 1. Raw matches tell user input apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    // 2. Keyboard + layout
    let layout = load_layout(&cli).unwrap_or_else(|e| {
        eprintln!("❌ Failed to load layout: {}", e);
        process::exit(1);
    });

    // 3. Config: file first, then explicit flags of the subcommand
    let cli_config = match &cli.command {
        Commands::Keys(args) => Some(&args.config),
        Commands::Plan(args) => Some(&args.config),
        Commands::Paths(_) | Commands::Accords(_) => None,
    };
    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
                eprintln!("❌ {}", e);
                process::exit(1);
            });
            if let (Some(cli_config), Some((_, sub_matches))) = (cli_config, matches.subcommand())
            {
                config.merge_from_cli(cli_config, sub_matches);
            }
            config
        }
        None => cli_config.cloned().unwrap_or_default(),
    };
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        process::exit(1);
    }

    // 4. Execute
    let result = match &cli.command {
        Commands::Paths(_) => cmd::paths::run(&layout),
        Commands::Keys(args) => cmd::keys::run(args, &layout, &config),
        Commands::Accords(args) => cmd::accords::run(args, &layout),
        Commands::Plan(args) => cmd::plan::run(args, &layout, &config),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
