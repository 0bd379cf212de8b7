//! Shared "dashboard pipeline" used by both the report command and the TUI.
//!
//! loaded dataset -> filter -> summary + chart series
//!
//! Front-ends only decide how to present a `DashboardView`.

use crate::analysis::{Chart, ChartId, Summary, build_chart, filter, summarize};
use crate::domain::{FilterCriteria, HolidayDataset, HolidayRecord};

/// Everything the presentation layer needs for one filter selection.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub rows: Vec<HolidayRecord>,
    pub summary: Summary,
    /// One entry per `ChartId::ALL`, same order.
    pub charts: Vec<Chart>,
}

impl DashboardView {
    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == id)
    }
}

pub fn build_view(dataset: &HolidayDataset, criteria: &FilterCriteria) -> DashboardView {
    let rows = filter(dataset, criteria);
    let summary = summarize(&rows);
    let charts = ChartId::ALL.iter().map(|&id| build_chart(id, &rows)).collect();
    log::debug!(
        "filtered {} of {} holidays ({} years, {} types selected)",
        rows.len(),
        dataset.len(),
        criteria.years.len(),
        criteria.kinds.len()
    );
    DashboardView {
        rows,
        summary,
        charts,
    }
}
