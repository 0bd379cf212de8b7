use crate::domain::{FilterCriteria, HolidayDataset, HolidayRecord};

/// Rows whose year is selected and whose type is selected, in dataset order.
///
/// * empty year selection → nothing passes
/// * empty type selection → nothing passes
/// * dataset without a type field → the type predicate is skipped
pub fn filter(dataset: &HolidayDataset, criteria: &FilterCriteria) -> Vec<HolidayRecord> {
    let check_kind = dataset.has_kind();
    dataset
        .records()
        .iter()
        .filter(|r| criteria.years.contains(&r.year))
        .filter(|r| !check_kind || criteria.kinds.contains(&r.kind))
        .cloned()
        .collect()
}
