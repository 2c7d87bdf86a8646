use crate::reports;
use clap::Args;
use cueforge::config::Config;
use cueforge::error::CfResult;
use cueforge::planner::Planner;
use cueforge::protocol::DEFAULT_BALL_COUNT;
use cueforge::simulate::{self, SimulationOptions};
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value_t = 1000)]
    pub games: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_BALL_COUNT)]
    pub ball_count: usize,

    #[arg(long, default_value_t = 0.2)]
    pub off_table_chance: f64,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SimulateArgs, planner: &Planner) -> CfResult<()> {
    let opts = SimulationOptions {
        games: args.games,
        seed: args.seed,
        ball_count: args.ball_count,
        off_table_chance: args.off_table_chance,
    };

    info!(
        "🎲 Simulating {} layouts with {} balls",
        opts.games, opts.ball_count
    );
    let start = Instant::now();
    let summary = simulate::run(planner, &opts)?;
    info!("🏁 Done in {:.2?}", start.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_simulation(&summary);
    }
    Ok(())
}
