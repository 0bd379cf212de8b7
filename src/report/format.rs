//! Formatted terminal output: holiday tables and the statistics block.
//!
//! Formatting lives in one place so the TUI and the `report` command print
//! the same wording.

use crate::analysis::Summary;
use crate::app::pipeline::DashboardView;
use crate::domain::{HolidayRecord, Law};

/// Full text report for one filtered view.
pub fn format_report(view: &DashboardView, include_table: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", shown_line(view.rows.len())));
    if include_table {
        out.push('\n');
        out.push_str(&format_table(&view.rows));
    }

    out.push_str("\nAnálisis Estadístico\n");
    for line in summary_lines(&view.summary) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

pub fn shown_line(n: usize) -> String {
    format!("Mostrando {n} feriados después de aplicar los filtros.")
}

/// The five statistics, one display line each (sub-items indented).
pub fn summary_lines(summary: &Summary) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("1. Número total de feriados: {}", summary.total));

    lines.push("2. Conteo de feriados por tipo:".to_string());
    if summary.by_kind.is_empty() {
        lines.push("   -".to_string());
    }
    for (kind, n) in &summary.by_kind {
        lines.push(format!("   {:<20} {n:>4}", truncate(kind, 20)));
    }

    lines.push("3. Primer y último feriado registrado:".to_string());
    lines.push(format!("   - Primer feriado: {}", fmt_opt(summary.first_date)));
    lines.push(format!("   - Último feriado: {}", fmt_opt(summary.last_date)));

    lines.push(format!(
        "4. Tipo de feriado más frecuente: {}",
        fmt_opt(summary.most_common_kind.as_deref())
    ));
    lines.push(format!(
        "5. Mes con más feriados: {}",
        fmt_opt(summary.busiest_month.as_deref())
    ));

    lines
}

/// Fixed-width table of holidays.
pub fn format_table(rows: &[HolidayRecord]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<10} {:<9} {:<40} {:<12} {:<5}",
            "fecha", "día", "nombre", "tipo", "irr."
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<10} {:-<9} {:-<40} {:-<12} {:-<5}", "", "", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:<10} {:<9} {:<40} {:<12} {:<5}",
                r.date,
                r.weekday_name,
                truncate(&r.name, 40),
                truncate(r.kind_label(), 12),
                fmt_flag(r.irrenunciable),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// The loaded dataset as-is, before any filtering, with comments and laws.
pub fn format_loaded_table(records: &[HolidayRecord]) -> String {
    let mut out = format!("Datos cargados ({} feriados)\n", records.len());
    out.push_str(
        format!(
            "{:<10} {:<40} {:<12} {:<5} {:<30} {}",
            "fecha", "nombre", "tipo", "irr.", "comentarios", "leyes"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<10} {:-<40} {:-<12} {:-<5} {:-<30} {:-<5}", "", "", "", "", "", "").trim_end());
    out.push('\n');

    for r in records {
        out.push_str(
            format!(
                "{:<10} {:<40} {:<12} {:<5} {:<30} {}",
                r.date,
                truncate(&r.name, 40),
                truncate(r.kind_label(), 12),
                fmt_flag(r.irrenunciable),
                truncate(r.comments.as_deref().unwrap_or(""), 30),
                fmt_laws(&r.laws),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

pub fn fmt_laws(laws: &[Law]) -> String {
    laws.iter()
        .map(|l| l.name.as_str())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn fmt_flag(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "sí",
        Some(false) => "no",
        None => "",
    }
}

fn fmt_opt<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::summarize;
    use chrono::NaiveDate;

    fn rows() -> Vec<HolidayRecord> {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let mut first = HolidayRecord::new(d(2024, 1, 1), "Año Nuevo", Some("Civil".into()));
        first.irrenunciable = Some(true);
        vec![
            first,
            HolidayRecord::new(d(2024, 3, 29), "Viernes Santo", Some("Religioso".into())),
        ]
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let txt = format_table(&rows());
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("fecha"));
        assert_eq!(lines[2], "2024-01-01 Monday    Año Nuevo                                Civil        sí");
        assert!(lines[3].ends_with("Religioso"));
    }

    #[test]
    fn summary_lines_cover_the_five_statistics() {
        let lines = summary_lines(&summarize(&rows()));
        assert_eq!(lines[0], "1. Número total de feriados: 2");
        assert!(lines.iter().any(|l| l == "   - Primer feriado: 2024-01-01"));
        assert!(lines.iter().any(|l| l == "   - Último feriado: 2024-03-29"));
        assert!(lines.iter().any(|l| l == "4. Tipo de feriado más frecuente: Civil"));
        assert!(lines.iter().any(|l| l == "5. Mes con más feriados: January"));
    }

    #[test]
    fn empty_summary_prints_placeholders() {
        let lines = summary_lines(&summarize(&[]));
        assert_eq!(lines[0], "1. Número total de feriados: 0");
        assert!(lines.contains(&"4. Tipo de feriado más frecuente: -".to_string()));
    }

    #[test]
    fn loaded_table_shows_comments_and_laws() {
        let mut records = rows();
        records[1].comments = Some("Fecha móvil".to_string());
        records[1].laws = vec![
            Law {
                name: "Ley 2.977".to_string(),
                url: None,
            },
            Law {
                name: "Ley 19.668".to_string(),
                url: Some("https://www.bcn.cl".to_string()),
            },
        ];

        let txt = format_loaded_table(&records);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "Datos cargados (2 feriados)");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with("comentarios                    leyes"));
        assert!(lines[3].starts_with("2024-01-01 Año Nuevo"));
        assert!(lines[4].contains("Viernes Santo"));
        assert!(lines[4].contains("Fecha móvil"));
        assert!(lines[4].ends_with("Ley 2.977; Ley 19.668"));
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("Navidad", 10), "Navidad");
        assert_eq!(truncate("Inmaculada Concepción", 10), "Inmaculad.");
    }
}
