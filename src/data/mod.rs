//! Data acquisition: HTTP fetch, decoding, and the per-session cache.

pub mod cache;
pub mod feriados;

pub use cache::DatasetCache;
pub use feriados::{FeriadosClient, HolidaySource, parse_holidays};

use crate::domain::HolidayDataset;

/// Result of one load attempt.
///
/// On failure `dataset` is empty and `error` carries the user-facing message;
/// callers must skip all downstream processing in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub dataset: HolidayDataset,
    pub error: Option<String>,
}

impl LoadOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Fetch and decode the dataset. Never panics and never returns an error:
/// failures become an empty dataset plus a message.
pub fn load(source: &dyn HolidaySource) -> LoadOutcome {
    let url = source.endpoint();
    log::info!("fetching holidays from {url}");

    match source.fetch() {
        Ok(records) => {
            let dataset = HolidayDataset::new(records);
            log::info!("loaded {} holidays from {url}", dataset.len());
            if !dataset.is_empty() && !dataset.has_kind() {
                log::warn!("holiday data has no `tipo` field; type filter disabled");
            }
            LoadOutcome {
                dataset,
                error: None,
            }
        }
        Err(err) => {
            log::warn!("holiday load failed: {err}");
            LoadOutcome {
                dataset: HolidayDataset::empty(),
                error: Some(format!("Error al cargar los datos: {err}")),
            }
        }
    }
}
