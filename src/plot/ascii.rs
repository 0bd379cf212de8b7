//! ASCII bar charts for terminal output.
//!
//! Deliberately plain (fixed-width columns, `#` bars) so output is
//! deterministic and easy to golden-test.
//!
//! Count charts scale bars to the largest count; share charts scale to 100%.

use crate::analysis::Chart;

const MAX_LABEL: usize = 20;

/// Render one chart as horizontal bars, `width` columns for the longest bar.
pub fn render_bar_chart(chart: &Chart, width: usize) -> String {
    let width = width.max(1);
    let mut out = String::new();
    out.push_str(&format!("{} (n={})\n", chart.id.title(), chart.total()));

    if chart.points.is_empty() {
        out.push_str("  (sin datos)\n");
        return out;
    }

    let label_width = chart
        .points
        .iter()
        .map(|p| p.label.chars().count().min(MAX_LABEL))
        .max()
        .unwrap_or(0);
    let max_count = chart.max_count().max(1);

    for p in &chart.points {
        let (fraction, value) = if chart.id.is_share() {
            (p.share / 100.0, format!("{:.1}%", p.share))
        } else {
            (p.count as f64 / max_count as f64, p.count.to_string())
        };
        let bar_len = (fraction * width as f64).round() as usize;
        out.push_str(&format!(
            "{:<label_width$} | {} {value}\n",
            truncate(&p.label, MAX_LABEL),
            "#".repeat(bar_len),
        ));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
