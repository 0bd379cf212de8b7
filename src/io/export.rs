//! Export a filtered view to JSON.
//!
//! The file carries the selection that produced it so it can be read on its own.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::analysis::Summary;
use crate::app::pipeline::DashboardView;
use crate::domain::{FilterCriteria, HolidayRecord};
use crate::error::{AppError, EXIT_USAGE};

#[derive(Debug, Serialize)]
struct ExportFile<'a> {
    tool: &'static str,
    source_url: &'a str,
    criteria: &'a FilterCriteria,
    summary: &'a Summary,
    rows: &'a [HolidayRecord],
}

/// Write the filtered rows and their summary as pretty JSON.
pub fn write_view_json(
    path: &Path,
    source_url: &str,
    criteria: &FilterCriteria,
    view: &DashboardView,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    let export = ExportFile {
        tool: "feriados",
        source_url,
        criteria,
        summary: &view.summary,
        rows: &view.rows,
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::Value;

    use super::*;
    use crate::app::pipeline::build_view;
    use crate::domain::HolidayDataset;

    #[test]
    fn export_contains_rows_summary_and_criteria() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let ds = HolidayDataset::new(vec![
            HolidayRecord::new(d(2024, 9, 18), "Independencia Nacional", Some("Civil".into())),
            HolidayRecord::new(d(2024, 9, 19), "Día de las Glorias del Ejército", Some("Civil".into())),
        ]);
        let criteria = FilterCriteria::all_from(&ds);
        let view = build_view(&ds, &criteria);

        let path = std::env::temp_dir().join(format!("feriados_export_{}.json", std::process::id()));
        write_view_json(&path, "http://local.test/fl", &criteria, &view).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["tool"], "feriados");
        assert_eq!(json["source_url"], "http://local.test/fl");
        assert_eq!(json["criteria"]["years"], serde_json::json!([2024]));
        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["summary"]["busiest_month"], "September");
        assert_eq!(json["rows"][0]["date"], "2024-09-18");
        assert_eq!(json["rows"][0]["weekday_name"], "Wednesday");
    }

    #[test]
    fn unwritable_path_is_reported() {
        let ds = HolidayDataset::empty();
        let criteria = FilterCriteria::all_from(&ds);
        let view = build_view(&ds, &criteria);
        let path = std::env::temp_dir().join("feriados_missing_dir").join("nested").join("out.json");
        let err = write_view_json(&path, "u", &criteria, &view).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }
}
