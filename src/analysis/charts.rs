//! Data behind the five dashboard charts.
//!
//! A chart is a list of labelled counts; renderers decide whether to draw
//! bars or shares.

use serde::Serialize;

use crate::analysis::value_counts;
use crate::domain::HolidayRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    ByKind,
    ByYear,
    ByMonth,
    KindShare,
    ByWeekday,
}

impl ChartId {
    pub const ALL: [ChartId; 5] = [
        ChartId::ByKind,
        ChartId::ByYear,
        ChartId::ByMonth,
        ChartId::KindShare,
        ChartId::ByWeekday,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartId::ByKind => "Conteo de Feriados por Tipo",
            ChartId::ByYear => "Conteo de Feriados por Año",
            ChartId::ByMonth => "Feriados por Mes",
            ChartId::KindShare => "Proporción de Feriados por Tipo",
            ChartId::ByWeekday => "Feriados por Día de la Semana",
        }
    }

    /// Pie-style chart (rendered as shares rather than bars).
    pub fn is_share(self) -> bool {
        matches!(self, ChartId::KindShare)
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub count: usize,
    /// Percent of the chart's total (0..=100).
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: ChartId,
    pub points: Vec<ChartPoint>,
}

impl Chart {
    pub fn total(&self) -> usize {
        self.points.iter().map(|p| p.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.points.iter().map(|p| p.count).max().unwrap_or(0)
    }
}

pub fn build_chart(id: ChartId, rows: &[HolidayRecord]) -> Chart {
    let counts: Vec<(String, usize)> = match id {
        ChartId::ByKind | ChartId::KindShare => value_counts(rows.iter().filter_map(|r| r.kind.clone())),
        ChartId::ByYear => {
            let mut counts = value_counts(rows.iter().map(|r| r.year));
            counts.sort_by_key(|(year, _)| *year);
            counts.into_iter().map(|(y, n)| (y.to_string(), n)).collect()
        }
        ChartId::ByMonth => value_counts(rows.iter().map(|r| r.month_name.to_string())),
        ChartId::ByWeekday => value_counts(rows.iter().map(|r| r.weekday_name.to_string())),
    };

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let points = counts
        .into_iter()
        .map(|(label, count)| ChartPoint {
            label,
            count,
            share: if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            },
        })
        .collect();

    Chart { id, points }
}
