//! Session-wide memoization of load results, keyed by request URL.
//!
//! Failed loads are cached too: a failure stays terminal until the caller
//! explicitly invalidates the entry.

use std::collections::HashMap;

use crate::data::{HolidaySource, LoadOutcome, load};

#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<String, LoadOutcome>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized outcome for `source.endpoint()`, loading it on first use.
    pub fn get_or_load(&mut self, source: &dyn HolidaySource) -> &LoadOutcome {
        let key = source.endpoint().to_string();
        if self.entries.contains_key(&key) {
            log::debug!("holiday cache hit for {key}");
        }
        self.entries.entry(key).or_insert_with(|| load(source))
    }

    /// Drop the entry for `url`. Returns whether one existed.
    pub fn invalidate(&mut self, url: &str) -> bool {
        let removed = self.entries.remove(url).is_some();
        if removed {
            log::info!("invalidated cached holidays for {url}");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
