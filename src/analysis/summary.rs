//! Descriptive statistics over a filtered view.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::value_counts;
use crate::domain::{HolidayRecord, month_number};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    /// Count per type, highest first. Rows without a type are not counted.
    pub by_kind: Vec<(String, usize)>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Most frequent type; ties go to the alphabetically smallest.
    pub most_common_kind: Option<String>,
    /// Month with the most rows; ties go to the earliest calendar month.
    pub busiest_month: Option<String>,
}

/// Summarize `rows`. Every field except `total` is empty/absent for no rows.
pub fn summarize(rows: &[HolidayRecord]) -> Summary {
    let by_kind: Vec<(String, usize)> = value_counts(rows.iter().filter_map(|r| r.kind.clone()));

    let most_common_kind = by_kind
        .iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(k, _)| k.clone());

    let busiest_month = value_counts(rows.iter().map(|r| r.month_name))
        .into_iter()
        .max_by(|a, b| {
            a.1.cmp(&b.1)
                .then_with(|| month_number(b.0).cmp(&month_number(a.0)))
        })
        .map(|(m, _)| m.to_string());

    Summary {
        total: rows.len(),
        by_kind,
        first_date: rows.iter().map(|r| r.date).min(),
        last_date: rows.iter().map(|r| r.date).max(),
        most_common_kind,
        busiest_month,
    }
}
