//! Plain-text chart rendering for the `report` command.

pub mod ascii;

pub use ascii::render_bar_chart;
