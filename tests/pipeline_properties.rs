//! Filter/summary properties over small hand-built datasets.

use chrono::NaiveDate;
use feriados::analysis::{filter, summarize};
use feriados::data::parse_holidays;
use feriados::domain::{FilterCriteria, HolidayDataset, HolidayRecord};

fn rec(y: i32, m: u32, d: u32, kind: &str) -> HolidayRecord {
    HolidayRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), "feriado", Some(kind.to_string()))
}

fn scenario() -> HolidayDataset {
    HolidayDataset::new(vec![
        rec(2024, 1, 1, "Civil"),
        rec(2024, 9, 18, "Religioso"),
        rec(2025, 1, 1, "Civil"),
    ])
}

fn bigger() -> HolidayDataset {
    let body = r#"[
        {"fecha": "2023-01-01", "nombre": "Año Nuevo", "tipo": "Civil"},
        {"fecha": "2023-04-07", "nombre": "Viernes Santo", "tipo": "Religioso"},
        {"fecha": "2023-09-18", "nombre": "Independencia Nacional", "tipo": "Civil"},
        {"fecha": "2024-06-20", "nombre": "Día Nacional de los Pueblos Indígenas", "tipo": "Civil"},
        {"fecha": "2024-08-15", "nombre": "Asunción de la Virgen", "tipo": "Religioso"},
        {"fecha": "2024-10-27", "nombre": "Elecciones Municipales", "tipo": "Civil"},
        {"fecha": "2025-12-25", "nombre": "Navidad", "tipo": "Religioso"}
    ]"#;
    HolidayDataset::new(parse_holidays(body).unwrap())
}

#[test]
fn scenario_year_2024_civil() {
    let ds = scenario();
    let out = filter(&ds, &FilterCriteria::new([2024], ["Civil"]));
    assert_eq!(out, vec![rec(2024, 1, 1, "Civil")]);

    let s = summarize(&out);
    assert_eq!(s.total, 1);
    assert_eq!(s.most_common_kind.as_deref(), Some("Civil"));
}

#[test]
fn filtered_view_is_subset_satisfying_both_predicates() {
    let ds = bigger();
    let selections = [
        FilterCriteria::new([2023], ["Civil"]),
        FilterCriteria::new([2023, 2024], ["Religioso"]),
        FilterCriteria::new([2024, 2025], ["Civil", "Religioso"]),
        FilterCriteria::new([1999], ["Civil"]),
    ];
    for criteria in &selections {
        let out = filter(&ds, criteria);
        for r in &out {
            assert!(ds.records().contains(r));
            assert!(criteria.years.contains(&r.year));
            assert!(criteria.kinds.contains(&r.kind));
        }
        let expected = ds
            .records()
            .iter()
            .filter(|r| criteria.years.contains(&r.year) && criteria.kinds.contains(&r.kind))
            .count();
        assert_eq!(out.len(), expected);
    }
}

#[test]
fn selecting_everything_is_identity() {
    let ds = bigger();
    let out = filter(&ds, &FilterCriteria::all_from(&ds));
    assert_eq!(out.as_slice(), ds.records());
}

#[test]
fn empty_selection_yields_nothing() {
    let ds = bigger();
    let all = FilterCriteria::all_from(&ds);

    let no_years = FilterCriteria {
        years: Default::default(),
        ..all.clone()
    };
    assert!(filter(&ds, &no_years).is_empty());

    let no_types = FilterCriteria {
        kinds: Default::default(),
        ..all
    };
    assert!(filter(&ds, &no_types).is_empty());
}

#[test]
fn summary_of_empty_view_has_no_extremes() {
    let ds = bigger();
    let out = filter(&ds, &FilterCriteria::new([1999], ["Civil"]));
    let s = summarize(&out);
    assert_eq!(s.total, 0);
    assert!(s.first_date.is_none() && s.last_date.is_none());
    assert!(s.most_common_kind.is_none() && s.busiest_month.is_none());
}

#[test]
fn derived_fields_for_independence_day() {
    let ds = bigger();
    let r = ds
        .records()
        .iter()
        .find(|r| r.date == NaiveDate::from_ymd_opt(2023, 9, 18).unwrap())
        .unwrap();
    assert_eq!(r.year, 2023);
    assert_eq!(r.month_name, "September");
    assert_eq!(r.weekday_name, "Monday");

    let r = HolidayRecord::new(NaiveDate::from_ymd_opt(2024, 9, 18).unwrap(), "x", None);
    assert_eq!((r.year, r.month_name, r.weekday_name), (2024, "September", "Wednesday"));
}
