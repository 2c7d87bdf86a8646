use clap::Args;
use cueforge::config::Config;
use cueforge::error::CfResult;
use cueforge::planner::Planner;
use cueforge::protocol::DEFAULT_BALL_COUNT;
use cueforge::session::Session;

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, default_value_t = 1447)]
    pub port: u16,

    #[arg(short, long, default_value = "CUEFORGE")]
    pub nickname: String,

    /// Balls per snapshot, cue ball included
    #[arg(long, default_value_t = DEFAULT_BALL_COUNT)]
    pub ball_count: usize,
}

pub fn run(args: PlayArgs, planner: Planner) -> CfResult<()> {
    let mut session = Session::connect(&args.host, args.port, planner, args.ball_count)?;
    session.greet(&args.nickname)?;
    session.run()?;
    Ok(())
}
