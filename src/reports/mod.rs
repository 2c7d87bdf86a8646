use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use cueforge::layout::TurnOrder;
use cueforge::planner::{CandidateShot, ShotDecision, ShotPlan};
use cueforge::simulate::SimulationSummary;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn plan_cell(plan: &ShotPlan) -> Cell {
    let cell = Cell::new(plan.label());
    match plan {
        ShotPlan::Pot(shot) if shot.metrics.is_clear() => cell.fg(Color::Green),
        ShotPlan::Pot(_) => cell.fg(Color::Yellow),
        _ => cell.fg(Color::Red),
    }
}

fn target_text(plan: &ShotPlan) -> String {
    match plan {
        ShotPlan::Pot(shot) => format!("#{} -> {} ({})", shot.target, shot.pocket, shot.kind),
        ShotPlan::NearestOwn { target, distance } => format!("#{} ({:.1} away)", target, distance),
        ShotPlan::TableCenter => "center".to_string(),
        ShotPlan::SafeDefault => "-".to_string(),
    }
}

pub fn print_decision(decision: &ShotDecision) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Plan").add_attribute(Attribute::Bold),
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Angle").fg(Color::Cyan),
        Cell::new("Power").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        plan_cell(&decision.plan),
        Cell::new(target_text(&decision.plan)),
        Cell::new(format!("{:.2}", decision.angle)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", decision.power)).set_alignment(CellAlignment::Right),
    ]);
    println!("\n{}", table);
}

pub fn print_candidates(candidates: &[CandidateShot]) {
    if candidates.is_empty() {
        println!("\nNo viable pot candidates.");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Ball").add_attribute(Attribute::Bold),
        Cell::new("Pocket"),
        Cell::new("Path"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Cue"),
        Cell::new("Target"),
        Cell::new("Align"),
        Cell::new("CueLen"),
        Cell::new("TgtLen"),
    ]);
    for i in 3..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let clear_cell = |clear: bool| {
        if clear {
            Cell::new("clear").fg(Color::Green)
        } else {
            Cell::new("blocked").fg(Color::Red)
        }
    };

    for c in candidates {
        let m = &c.metrics;
        let ball = if m.decisive {
            format!("#{} *", c.target)
        } else {
            format!("#{}", c.target)
        };
        table.add_row(vec![
            Cell::new(ball).add_attribute(Attribute::Bold),
            Cell::new(c.pocket.to_string()),
            Cell::new(c.kind.to_string()),
            Cell::new(format!("{:.1}", c.score)).fg(Color::Cyan),
            clear_cell(m.cue_leg_clear),
            clear_cell(m.target_leg_clear),
            Cell::new(format!("{:.3}", m.cut_alignment)),
            Cell::new(format!("{:.1}", m.cue_path_length)),
            Cell::new(format!("{:.1}", m.target_path_length)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_analysis(rows: &[(TurnOrder, ShotDecision)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Order"),
        Cell::new("Plan"),
        Cell::new("Target"),
        Cell::new("Angle").fg(Color::Cyan),
        Cell::new("Power").fg(Color::Cyan),
    ]);
    for i in [4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, (order, d)) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(order.to_string()),
            plan_cell(&d.plan),
            Cell::new(target_text(&d.plan)),
            Cell::new(format!("{:.2}", d.angle)),
            Cell::new(format!("{:.2}", d.power)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_simulation(s: &SimulationSummary) {
    let pct = |n: usize| {
        if s.games > 0 {
            n as f64 / s.games as f64 * 100.0
        } else {
            0.0
        }
    };

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Outcome").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("%"),
    ]);
    for i in [1, 2] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let rows = [
        ("Direct pot", s.direct, Color::Green),
        ("Bank pot", s.bank, Color::Green),
        ("  of which blocked", s.blocked_pots, Color::Yellow),
        ("Nearest own", s.nearest_own, Color::Red),
        ("Table center", s.table_center, Color::Red),
        ("Safe default", s.safe_default, Color::Red),
    ];
    for (name, n, color) in rows {
        table.add_row(vec![
            Cell::new(name).fg(color),
            Cell::new(n),
            Cell::new(format!("{:.1}", pct(n))),
        ]);
    }
    println!("\n{}", table);
    println!(
        "Games: {}  Mean power: {:.2}  Mean pot score: {:.1}",
        s.games, s.mean_power, s.mean_pot_score
    );
}
