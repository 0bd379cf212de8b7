//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initializes logging
//! - resolves settings (defaults, env, flags)
//! - dispatches to the report printer or the TUI

use std::io::{self, Write};

use clap::Parser;

use crate::cli::{Command, ReportArgs, SourceArgs};
use crate::config::Settings;
use crate::data::FeriadosClient;
use crate::domain::{FilterCriteria, HolidayDataset};
use crate::error::{AppError, EXIT_RUNTIME};

pub mod pipeline;

/// Entry point for the `feriados` binary.
pub fn run() -> Result<(), AppError> {
    // `feriados` and `feriados --url X` behave like `feriados tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => {
            init_logging("warn");
            handle_report(args)
        }
        Command::Tui(args) => {
            // Anything on stderr would corrupt the alternate screen.
            init_logging("off");
            handle_tui(args)
        }
    }
}

fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .try_init();
}

pub fn resolve_settings(source: &SourceArgs) -> Result<Settings, AppError> {
    Settings::from_env()?.with_overrides(source.url.as_deref(), source.timeout_secs)
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    write_report(&args, &mut stdout)
}

/// Load, filter and print one report to `out`.
fn write_report(args: &ReportArgs, out: &mut dyn Write) -> Result<(), AppError> {
    let settings = resolve_settings(&args.source)?;
    let client = FeriadosClient::new(&settings)?;

    let outcome = crate::data::load(&client);
    if let Some(message) = outcome.error {
        return Err(AppError::new(EXIT_RUNTIME, message));
    }
    let dataset = outcome.dataset;
    if dataset.is_empty() {
        writeln!(out, "No se pudieron cargar los datos.").map_err(write_failed)?;
        return Ok(());
    }

    if args.show_loaded {
        writeln!(out, "{}", crate::report::format_loaded_table(dataset.records())).map_err(write_failed)?;
    }

    let criteria = report_criteria(&dataset, args);
    let view = pipeline::build_view(&dataset, &criteria);

    writeln!(out, "{}", crate::report::format_report(&view, !args.no_table)).map_err(write_failed)?;

    if args.charts {
        for chart in &view.charts {
            writeln!(out, "{}", crate::plot::render_bar_chart(chart, args.width)).map_err(write_failed)?;
        }
    }

    if let Some(path) = &args.export_json {
        crate::io::export::write_view_json(path, &settings.url, &criteria, &view)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

fn write_failed(e: io::Error) -> AppError {
    AppError::new(EXIT_RUNTIME, format!("Failed to write report: {e}"))
}

fn handle_tui(args: SourceArgs) -> Result<(), AppError> {
    let settings = resolve_settings(&args)?;
    crate::tui::run(settings)
}

/// Start from "everything selected" and narrow by the flags that were given.
///
/// Type names match case-insensitively against the dataset's own spelling.
pub fn report_criteria(dataset: &HolidayDataset, args: &ReportArgs) -> FilterCriteria {
    let mut criteria = FilterCriteria::all_from(dataset);

    if !args.years.is_empty() {
        criteria.years = args.years.iter().copied().collect();
        for year in &args.years {
            if !dataset.years().contains(year) {
                log::warn!("year {year} not present in dataset");
            }
        }
    }

    if !args.kinds.is_empty() {
        let known = dataset.kinds();
        criteria.kinds = args
            .kinds
            .iter()
            .map(|wanted| {
                let matched = known
                    .iter()
                    .flatten()
                    .find(|k| k.eq_ignore_ascii_case(wanted))
                    .cloned();
                if matched.is_none() {
                    log::warn!("type '{wanted}' not present in dataset");
                }
                Some(matched.unwrap_or_else(|| wanted.clone()))
            })
            .collect();
    }

    criteria
}

/// Rewrite argv so `feriados` defaults to `feriados tui`.
///
/// Rules:
/// - `feriados`                      -> `feriados tui`
/// - `feriados --url X ...`          -> `feriados tui --url X ...`
/// - `feriados --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if matches!(arg1.as_str(), "tui" | "report") {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}
