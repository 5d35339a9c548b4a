use std::time::Duration;

use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// Diagnostics for one `solve` call.
///
/// Counters are reset at the start of every solve, only ever increase while
/// it runs, and are purely observational: they never influence the search
/// outcome. `nodes_explored` counts arc revision steps plus values tried in
/// backtracking; `constraint_checks` counts pairwise compatibility tests in
/// preprocessing, the assignment-time check, and the active inference
/// strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_explored: u64,
    pub constraint_checks: u64,
    /// Wall-clock time of the whole solve, preprocessing included.
    pub duration: Duration,
}

/// Renders one row per labelled solve, for comparing configurations.
pub fn render_stats_table(rows: &[(&str, &SearchStats)]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Configuration"),
        Cell::new("Nodes Explored"),
        Cell::new("Constraint Checks"),
        Cell::new("Search Time (ms)"),
    ]));

    for (label, stats) in rows {
        table.add_row(Row::new(vec![
            Cell::new(label),
            Cell::new(&stats.nodes_explored.to_string()),
            Cell::new(&stats.constraint_checks.to_string()),
            Cell::new(&format!("{:.2}", stats.duration.as_secs_f64() * 1000.0)),
        ]));
    }

    table.to_string()
}
