//! Slash-delimited text protocol spoken by the game server.
//!
//! Server -> client: `x0/y0/x1/y1/.../` snapshots, or a signal carried in the
//! first field (`9908/<order>/` assigns the turn order, `9909/...` closes).
//! Client -> server: `9901/<nickname>/` greeting, `<angle>/<power>/` shots and
//! `9902/9902/` to ask for a resend.

use crate::error::{CfResult, CueForgeError};
use crate::layout::{Layout, TurnOrder};
use crate::planner::ShotDecision;

pub const CODE_SEND: u32 = 9901;
pub const CODE_REQUEST: u32 = 9902;
pub const SIGNAL_ORDER: u32 = 9908;
pub const SIGNAL_CLOSE: u32 = 9909;

pub const DEFAULT_BALL_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    Snapshot(Layout),
    AssignOrder(TurnOrder),
    Close,
}

/// Parses one server message carrying `ball_count` coordinate pairs.
///
/// Short or non-numeric messages are errors; the session answers them with
/// a resend request.
pub fn parse_message(raw: &str, ball_count: usize) -> CfResult<ServerMessage> {
    let parts: Vec<&str> = raw.trim().split('/').collect();

    // Signals may arrive without a full set of coordinates
    let head = parse_field(parts[0]);
    if let Ok(code) = head {
        if code == SIGNAL_CLOSE as f64 {
            return Ok(ServerMessage::Close);
        }
        if code == SIGNAL_ORDER as f64 {
            let value = parts
                .get(1)
                .ok_or_else(|| CueForgeError::Protocol("order signal without a value".into()))
                .and_then(|p| parse_field(p))?;
            return TurnOrder::from_wire(value)
                .map(ServerMessage::AssignOrder)
                .ok_or_else(|| CueForgeError::Protocol(format!("unknown turn order {}", value)));
        }
    }

    let needed = ball_count * 2;
    if parts.len() < needed {
        return Err(CueForgeError::Protocol(format!(
            "expected {} fields, got {}",
            needed,
            parts.len()
        )));
    }

    let values = parts[..needed]
        .iter()
        .map(|p| parse_field(p))
        .collect::<CfResult<Vec<f64>>>()?;
    let coords: Vec<(f64, f64)> = values.chunks_exact(2).map(|c| (c[0], c[1])).collect();
    Ok(ServerMessage::Snapshot(Layout::from_coordinates(&coords)?))
}

fn parse_field(field: &str) -> CfResult<f64> {
    field
        .trim()
        .parse()
        .map_err(|_| CueForgeError::Protocol(format!("field '{}' is not a number", field)))
}

pub fn encode_greeting(nickname: &str) -> String {
    format!("{}/{}/", CODE_SEND, nickname)
}

pub fn encode_resend_request() -> String {
    format!("{}/{}/", CODE_REQUEST, CODE_REQUEST)
}

pub fn encode_shot(decision: &ShotDecision) -> String {
    // 359.996 would print as 360.00
    let angle = if decision.angle >= 359.995 {
        0.0
    } else {
        decision.angle
    };
    format!("{:.2}/{:.2}/", angle, decision.power)
}
