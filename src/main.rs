use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use cueforge::config::Config;
use cueforge::planner::Planner;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring/power settings; explicit flags still win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Connect to the game server and play
    Play(cmd::play::PlayArgs),
    /// Plan a single snapshot given on the command line
    Plan(cmd::plan::PlanArgs),
    /// Plan every snapshot of a CSV file
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Plan random layouts in parallel and summarize the outcomes
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Flags parsed inside the subcommand live in the subcommand's matches
    let (cli_config, sub_matches) = match &cli.command {
        Commands::Play(args) => (&args.config, matches.subcommand_matches("play")),
        Commands::Plan(args) => (&args.config, matches.subcommand_matches("plan")),
        Commands::Analyze(args) => (&args.config, matches.subcommand_matches("analyze")),
        Commands::Simulate(args) => (&args.config, matches.subcommand_matches("simulate")),
    };

    let config = match (&cli.config, sub_matches) {
        (Some(path), Some(sub)) => {
            info!("⚖️  Loading Config from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub);
            file_config
        }
        _ => {
            if cli.config.is_some() {
                warn!("⚠️  Could not resolve subcommand flags, ignoring config file");
            }
            cli_config.clone()
        }
    };

    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let planner = Planner::new(config);

    let result = match cli.command {
        Commands::Play(args) => cmd::play::run(args, planner),
        Commands::Plan(args) => cmd::plan::run(args, &planner),
        Commands::Analyze(args) => cmd::analyze::run(args, &planner),
        Commands::Simulate(args) => cmd::simulate::run(args, &planner),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
