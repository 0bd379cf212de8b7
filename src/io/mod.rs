//! Output files.
//!
//! - filtered view + statistics as JSON (`export`)

pub mod export;

pub use export::*;
