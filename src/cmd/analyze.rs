use crate::reports;
use clap::Args;
use cueforge::config::Config;
use cueforge::error::CfResult;
use cueforge::planner::{PlanContext, Planner};
use cueforge::snapshots::load_snapshots;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV file with rows `order,x0,y0,x1,y1,...`
    #[arg(short, long)]
    pub input: String,
}

pub fn run(args: AnalyzeArgs, planner: &Planner) -> CfResult<()> {
    let snapshots = load_snapshots(&args.input)?;
    info!("🔎 Planning {} snapshots", snapshots.len());

    let decisions: Vec<_> = snapshots
        .iter()
        .map(|s| (s.order, planner.decide(&s.layout, &PlanContext::new(s.order))))
        .collect();

    reports::print_analysis(&decisions);
    Ok(())
}
