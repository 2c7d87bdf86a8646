use crate::error::CfResult;
use crate::layout::{check_ball_count, TurnOrder};
use crate::planner::{PlanContext, Planner};
use crate::protocol::{self, ServerMessage};
use std::io::{Read, Write};
use std::net::TcpStream;
use tracing::{debug, info, warn};

const READ_CHUNK: usize = 1024;

/// What the session does in answer to one server message.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Reply(String),
    Silent,
    Stop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub shots: usize,
    pub fallbacks: usize,
    pub resends: usize,
}

/// One connection to the game server. The only state carried between
/// decisions is the last assigned turn order.
pub struct Session<S: Read + Write> {
    stream: S,
    planner: Planner,
    order: TurnOrder,
    ball_count: usize,
    stats: SessionStats,
}

impl Session<TcpStream> {
    pub fn connect(host: &str, port: u16, planner: Planner, ball_count: usize) -> CfResult<Self> {
        check_ball_count(ball_count)?;
        info!("🔌 Trying Connect: {}:{}", host, port);
        let stream = TcpStream::connect((host, port))?;
        info!("✅ Connected: {}:{}", host, port);
        Self::new(stream, planner, ball_count)
    }
}

impl<S: Read + Write> Session<S> {
    /// Fails when `ball_count` is outside `1..=MAX_BALLS`.
    pub fn new(stream: S, planner: Planner, ball_count: usize) -> CfResult<Self> {
        check_ball_count(ball_count)?;
        Ok(Self {
            stream,
            planner,
            order: TurnOrder::First,
            ball_count,
            stats: SessionStats::default(),
        })
    }

    pub fn order(&self) -> TurnOrder {
        self.order
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn greet(&mut self, nickname: &str) -> CfResult<()> {
        self.send(&protocol::encode_greeting(nickname))?;
        info!("🎱 Registered as '{}', ready to play", nickname);
        Ok(())
    }

    /// Decides the answer to one raw server message.
    pub fn handle(&mut self, raw: &str) -> Step {
        match protocol::parse_message(raw, self.ball_count) {
            Ok(ServerMessage::Close) => Step::Stop,
            Ok(ServerMessage::AssignOrder(order)) => {
                info!("* Order: {}", order);
                self.order = order;
                Step::Silent
            }
            Ok(ServerMessage::Snapshot(layout)) => {
                let decision = self.planner.decide(&layout, &PlanContext::new(self.order));
                self.stats.shots += 1;
                if decision.plan.is_fallback() {
                    self.stats.fallbacks += 1;
                }
                debug!("Plan: {}", decision.plan.label());
                Step::Reply(protocol::encode_shot(&decision))
            }
            Err(e) => {
                warn!("Bad message '{}': {}", raw.trim(), e);
                self.stats.resends += 1;
                Step::Reply(protocol::encode_resend_request())
            }
        }
    }

    /// Reads and answers messages until the server closes the game or the
    /// connection.
    pub fn run(&mut self) -> CfResult<SessionStats> {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let n = self.stream.read(&mut buf)?;
            if n == 0 {
                info!("Server hung up");
                break;
            }
            let raw = String::from_utf8_lossy(&buf[..n]).into_owned();
            match self.handle(&raw) {
                Step::Reply(msg) => {
                    self.send(&msg)?;
                    info!("Data Sent: {}", msg);
                }
                Step::Silent => {}
                Step::Stop => {
                    info!("Close signal received");
                    break;
                }
            }
        }
        info!(
            "Connection Closed. {} shots ({} fallbacks), {} resend requests",
            self.stats.shots, self.stats.fallbacks, self.stats.resends
        );
        Ok(self.stats)
    }

    fn send(&mut self, msg: &str) -> CfResult<()> {
        self.stream.write_all(msg.as_bytes())?;
        self.stream.flush()?;
        Ok(())
    }
}
