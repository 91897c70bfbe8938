//! Per-solver summary of a performance profile, printable as an ASCII table.

use crate::distribution::builder::Profile;
use crate::transform::processed_matrix::ProcessedMatrix;
use derive_new::new;
use tabled::{Table, Tabled};

/// Statistics of one solver's distribution.
#[derive(Debug, Clone, PartialEq, Tabled, new)]
pub struct SolverSummary {
    /// Display name of the solver
    #[tabled(rename = "Solver")]
    pub solver: String,
    /// Number of instances
    #[tabled(rename = "Instances")]
    pub instances: usize,
    /// Samples inside the visible x range
    #[tabled(rename = "Visible")]
    pub visible: usize,
    /// Samples pushed out of the visible range by the limits
    #[tabled(rename = "Clamped")]
    pub clamped: usize,
    /// Share of instances at or below `x_min` (the best ratio, for ratio plots)
    #[tabled(rename = "At x_min")]
    pub at_min: String,
    /// Share of instances at or below `x_max`, i.e. where the curve ends
    #[tabled(rename = "Within x_max")]
    pub within_max: String,
}

/// Computes a [`SolverSummary`] for every series of the profile.
pub fn summarize(profile: &Profile, processed: &ProcessedMatrix) -> Vec<SolverSummary> {
    let low = processed.low_sentinel();
    let high = processed.high_sentinel();

    profile
        .series()
        .iter()
        .map(|series| {
            let total = series.x.len();
            let clamped = series
                .x
                .iter()
                .filter(|&&value| value <= low || value >= high)
                .count();
            let visible = series
                .x
                .iter()
                .filter(|&&value| processed.is_visible(value))
                .count();
            let at_min = series
                .x
                .iter()
                .filter(|&&value| value > low && value <= processed.x_min())
                .count();
            let within_max = series
                .x
                .iter()
                .filter(|&&value| value > low && value <= processed.x_max())
                .count();

            SolverSummary::new(
                series.label.clone(),
                total,
                visible,
                clamped,
                format_share(at_min, total),
                format_share(within_max, total),
            )
        })
        .collect()
}

/// Formats the summaries as an ASCII table using the [`tabled`] crate.
pub fn format_summary_table(summaries: &[SolverSummary], title: Option<&str>) -> String {
    if summaries.is_empty() {
        return "No solvers to summarize".to_string();
    }

    let table = Table::new(summaries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

fn format_share(count: usize, total: usize) -> String {
    if total == 0 {
        "0.00%".to_string()
    } else {
        format!("{:.2}%", (count as f64 / total as f64) * 100.0)
    }
}
