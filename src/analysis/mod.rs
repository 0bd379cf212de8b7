//! Pure reductions over the loaded dataset.
//!
//! ```text
//!   HolidayDataset ──filter(criteria)──▶ Vec<HolidayRecord>
//!                                            │
//!                         ┌──────────────────┼──────────────────┐
//!                         ▼                                     ▼
//!                    summarize()                          build_chart()
//! ```

pub mod charts;
pub mod filter;
pub mod summary;

pub use charts::{Chart, ChartId, ChartPoint, build_chart};
pub use filter::filter;
pub use summary::{Summary, summarize};

/// Frequency count, highest first. Equal counts keep first-appearance order.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: PartialEq,
    I: IntoIterator<Item = K>,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|(k, _)| *k == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }
    // `sort_by` is stable, so ties stay in appearance order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_counts_orders_by_count_then_appearance() {
        let counts = value_counts(["b", "a", "c", "a", "c"]);
        assert_eq!(counts, vec![("a", 2), ("c", 2), ("b", 1)]);
    }

    #[test]
    fn value_counts_of_nothing_is_empty() {
        assert!(value_counts(Vec::<i32>::new()).is_empty());
    }
}
