use crate::reports;
use clap::Args;
use cueforge::config::Config;
use cueforge::error::CfResult;
use cueforge::layout::{RuleSet, TurnOrder};
use cueforge::planner::{PlanContext, Planner};
use cueforge::snapshots::parse_ball_list;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: Config,

    /// Ball positions "x,y;x,y;...", cue ball first; negative = potted
    #[arg(short, long)]
    pub balls: String,

    #[arg(short, long, default_value = "first")]
    pub order: TurnOrder,

    /// Override the rule set inferred from the ball count
    #[arg(long)]
    pub rules: Option<RuleSet>,

    /// Number of ranked candidates to list
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Print the decision as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: PlanArgs, planner: &Planner) -> CfResult<()> {
    let layout = parse_ball_list(&args.balls)?;
    let mut ctx = PlanContext::new(args.order);
    if let Some(rules) = args.rules {
        ctx = ctx.with_rules(rules);
    }

    let decision = planner.decide(&layout, &ctx);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    let mut candidates = planner.candidates(&layout, &ctx);
    // Stable sort keeps enumeration order among equal scores
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(args.top);

    reports::print_decision(&decision);
    reports::print_candidates(&candidates);
    Ok(())
}
