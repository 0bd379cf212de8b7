//! Command-line parsing for the holiday dashboard.
//!
//! Argument parsing and dispatch stay separate from the pipeline code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "feriados", version, about = "Análisis de Feriados - API Digital.gob.cl")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard (default).
    Tui(SourceArgs),
    /// Print the filtered holidays, statistics and optional charts.
    Report(ReportArgs),
}

/// Where to fetch the dataset from. Unset flags fall back to env/defaults.
#[derive(Debug, Args, Clone, Default)]
pub struct SourceArgs {
    /// Holiday API endpoint.
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Restrict to these years (repeatable). Default: all years.
    #[arg(long = "year", value_name = "YEAR")]
    pub years: Vec<i32>,

    /// Restrict to these holiday types (repeatable). Default: all types.
    #[arg(long = "type", value_name = "TIPO")]
    pub kinds: Vec<String>,

    /// Hide the per-holiday table.
    #[arg(long)]
    pub no_table: bool,

    /// Also print every loaded holiday, before filtering ("Datos cargados").
    #[arg(long = "all")]
    pub show_loaded: bool,

    /// Append ASCII bar charts.
    #[arg(long)]
    pub charts: bool,

    /// Chart width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Write filtered rows and statistics to a JSON file.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}
