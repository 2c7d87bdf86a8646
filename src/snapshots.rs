//! Recorded table snapshots for offline analysis.
//!
//! CSV rows are `order,x0,y0,x1,y1,...` with no header; `order` is `first`,
//! `second`, `1` or `2`. Lines starting with `#` are skipped.

use crate::error::{CfResult, CueForgeError};
use crate::layout::{Layout, TurnOrder};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub order: TurnOrder,
    pub layout: Layout,
}

pub fn load_snapshots<P: AsRef<Path>>(path: P) -> CfResult<Vec<Snapshot>> {
    info!("📂 Loading Snapshots: {}", path.as_ref().display());
    let file = std::fs::File::open(path)?;
    read_snapshots(file)
}

pub fn read_snapshots<R: Read>(reader: R) -> CfResult<Vec<Snapshot>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut out = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        let Some((order_field, coords)) = fields.split_first() else {
            continue;
        };

        let order = parse_order(order_field).ok_or_else(|| {
            CueForgeError::Layout(format!("row {}: bad order '{}'", row + 1, order_field))
        })?;
        if coords.len() % 2 != 0 {
            return Err(CueForgeError::Layout(format!(
                "row {}: odd number of coordinates ({})",
                row + 1,
                coords.len()
            )));
        }

        let mut pairs = Vec::with_capacity(coords.len() / 2);
        for pair in coords.chunks_exact(2) {
            let x = parse_coord(pair[0], row)?;
            let y = parse_coord(pair[1], row)?;
            pairs.push((x, y));
        }
        out.push(Snapshot {
            order,
            layout: Layout::from_coordinates(&pairs)?,
        });
    }
    debug!("Read {} snapshots", out.len());
    Ok(out)
}

/// Parses `"x,y;x,y;..."`, the command-line form of a snapshot.
pub fn parse_ball_list(s: &str) -> CfResult<Layout> {
    let mut pairs = Vec::new();
    for chunk in s.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let (x, y) = chunk
            .split_once(',')
            .ok_or_else(|| CueForgeError::Layout(format!("'{}' is not an x,y pair", chunk)))?;
        let x: f64 = x
            .trim()
            .parse()
            .map_err(|_| CueForgeError::Layout(format!("bad x in '{}'", chunk)))?;
        let y: f64 = y
            .trim()
            .parse()
            .map_err(|_| CueForgeError::Layout(format!("bad y in '{}'", chunk)))?;
        pairs.push((x, y));
    }
    Layout::from_coordinates(&pairs)
}

pub fn parse_order(s: &str) -> Option<TurnOrder> {
    TurnOrder::from_str(&s.to_lowercase())
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(TurnOrder::from_wire))
}

fn parse_coord(field: &str, row: usize) -> CfResult<f64> {
    field
        .parse()
        .map_err(|_| CueForgeError::Layout(format!("row {}: '{}' is not a number", row + 1, field)))
}
