//! Reporting utilities: text tables and the statistics block.

pub mod format;

pub use format::*;
