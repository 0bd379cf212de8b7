//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - typed holiday rows with their derived calendar fields (`HolidayRecord`)
//! - the loaded, immutable dataset (`HolidayDataset`)
//! - the year/type selection applied to it (`FilterCriteria`)

pub mod types;

pub use types::*;
