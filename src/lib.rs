//! `feriados` library crate.
//!
//! The binary (`feriados`) is a thin wrapper around this library so that:
//!
//! - the fetch/filter/summary pipeline is testable without a terminal
//! - front-ends (TUI, text report) share one implementation

pub mod analysis;
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
pub mod tui;
