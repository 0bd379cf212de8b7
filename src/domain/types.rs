//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be:
//!
//! - filtered and summarized in-memory
//! - rendered by any front-end (TUI, text report)
//! - exported to JSON

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name for a 1-based month number.
///
/// Out-of-range input yields an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// 1-based calendar position of an English month name.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A law referenced by a holiday (`leyes` in the API payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Law {
    pub name: String,
    pub url: Option<String>,
}

/// One public holiday with its derived calendar fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub name: String,
    /// Holiday type ("Civil", "Religioso", ...), if the source provides one.
    pub kind: Option<String>,
    pub comments: Option<String>,
    /// Whether the holiday is legally non-waivable for workers.
    pub irrenunciable: Option<bool>,
    pub laws: Vec<Law>,

    pub year: i32,
    pub month_name: &'static str,
    pub weekday_name: &'static str,
}

impl HolidayRecord {
    /// Build a record, deriving `year`, `month_name` and `weekday_name` from `date`.
    pub fn new(date: NaiveDate, name: impl Into<String>, kind: Option<String>) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
            comments: None,
            irrenunciable: None,
            laws: Vec::new(),
            year: date.year(),
            month_name: month_name(date.month()),
            weekday_name: weekday_name(date.weekday()),
        }
    }

    pub fn kind_label(&self) -> &str {
        kind_label(self.kind.as_deref())
    }
}

/// Display label for an optional holiday type.
pub fn kind_label(kind: Option<&str>) -> &str {
    kind.unwrap_or("(sin tipo)")
}

/// The loaded holiday dataset.
///
/// Immutable after construction; filtered views are separate `Vec`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayDataset {
    records: Vec<HolidayRecord>,
    has_kind: bool,
}

impl HolidayDataset {
    pub fn new(records: Vec<HolidayRecord>) -> Self {
        let has_kind = records.iter().any(|r| r.kind.is_some());
        Self { records, has_kind }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `false` when no record carries a type; the type filter is then disabled.
    pub fn has_kind(&self) -> bool {
        self.has_kind
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct types in order of first appearance.
    pub fn kinds(&self) -> Vec<Option<String>> {
        let mut out: Vec<Option<String>> = Vec::new();
        if !self.has_kind {
            return out;
        }
        for r in &self.records {
            if !out.contains(&r.kind) {
                out.push(r.kind.clone());
            }
        }
        out
    }
}

/// Year and type selection used to derive the working view of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub years: BTreeSet<i32>,
    /// `None` entries select records without a type.
    pub kinds: BTreeSet<Option<String>>,
}

impl FilterCriteria {
    pub fn new<Y, K, S>(years: Y, kinds: K) -> Self
    where
        Y: IntoIterator<Item = i32>,
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            years: years.into_iter().collect(),
            kinds: kinds.into_iter().map(|k| Some(k.into())).collect(),
        }
    }

    /// Every year and type present in `dataset` (the default selection).
    pub fn all_from(dataset: &HolidayDataset) -> Self {
        Self {
            years: dataset.years().into_iter().collect(),
            kinds: dataset.kinds().into_iter().collect(),
        }
    }

    pub fn toggle_year(&mut self, year: i32) {
        if !self.years.remove(&year) {
            self.years.insert(year);
        }
    }

    pub fn toggle_kind(&mut self, kind: Option<String>) {
        if !self.kinds.remove(&kind) {
            self.kinds.insert(kind);
        }
    }
}
