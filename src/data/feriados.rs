//! `apis.digital.gob.cl` holiday API integration.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::Settings;
use crate::domain::{HolidayRecord, Law};
use crate::error::{AppError, EXIT_USAGE, LoadError};

/// Anything that can produce the raw holiday list for one endpoint.
///
/// The HTTP client is the production implementation; tests plug in fakes.
pub trait HolidaySource {
    /// Cache key for the data this source returns.
    fn endpoint(&self) -> &str;

    fn fetch(&self) -> Result<Vec<HolidayRecord>, LoadError>;
}

pub struct FeriadosClient {
    client: Client,
    url: String,
    timeout_secs: u64,
}

impl FeriadosClient {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: settings.url.clone(),
            timeout_secs: settings.timeout.as_secs(),
        })
    }

    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {}s", self.timeout_secs)
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        }
    }
}

impl HolidaySource for FeriadosClient {
    fn endpoint(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<HolidayRecord>, LoadError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| LoadError::network(&self.url, self.describe(&e)))?;

        if !resp.status().is_success() {
            return Err(LoadError::network(
                &self.url,
                format!("request failed with status {}", resp.status()),
            ));
        }

        let body = resp
            .text()
            .map_err(|e| LoadError::network(&self.url, self.describe(&e)))?;

        parse_holidays(&body)
    }
}

#[derive(Debug, Deserialize)]
struct RawHoliday {
    fecha: String,
    #[serde(default, alias = "name")]
    nombre: Option<String>,
    #[serde(default, alias = "type")]
    tipo: Option<String>,
    #[serde(default)]
    comentarios: Option<String>,
    #[serde(default)]
    irrenunciable: Option<Value>,
    #[serde(default)]
    leyes: Option<Vec<RawLaw>>,
}

#[derive(Debug, Deserialize)]
struct RawLaw {
    #[serde(default)]
    nombre: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Decode an API response body into holiday records (source order kept).
pub fn parse_holidays(body: &str) -> Result<Vec<HolidayRecord>, LoadError> {
    let raw: Vec<RawHoliday> =
        serde_json::from_str(body).map_err(|e| LoadError::parse(format!("malformed JSON: {e}")))?;

    raw.into_iter()
        .enumerate()
        .map(|(i, r)| to_record(i, r))
        .collect()
}

fn to_record(index: usize, raw: RawHoliday) -> Result<HolidayRecord, LoadError> {
    let date = parse_date(&raw.fecha).ok_or_else(|| {
        LoadError::parse(format!("row {index}: invalid date '{}'", raw.fecha))
    })?;

    let kind = raw.tipo.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    let mut record = HolidayRecord::new(date, raw.nombre.unwrap_or_default(), kind);
    record.comments = raw.comentarios.filter(|c| !c.trim().is_empty());
    record.irrenunciable = raw.irrenunciable.as_ref().and_then(parse_flag);
    record.laws = raw
        .leyes
        .unwrap_or_default()
        .into_iter()
        .map(|l| Law {
            name: l.nombre.unwrap_or_default(),
            url: l.url,
        })
        .collect();
    Ok(record)
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part (`T...` or ` ...`).
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10)?;
    let rest = &raw[10..];
    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// The API encodes flags as `"0"`/`"1"`; numbers and booleans are accepted too.
fn parse_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|v| v != 0),
        Value::String(s) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"nombre": "Año Nuevo", "comentarios": null, "fecha": "2024-01-01",
         "irrenunciable": "1", "tipo": "Civil",
         "leyes": [{"nombre": "Ley 2.977", "url": "https://www.bcn.cl/leychile/navegar?idNorma=1040226"}]},
        {"nombre": "Día Nacional de las Iglesias Evangélicas y Protestantes", "comentarios": "",
         "fecha": "2024-10-31", "irrenunciable": "0", "tipo": "Religioso", "leyes": []}
    ]"#;

    #[test]
    fn parses_api_payload() {
        let rows = parse_holidays(SAMPLE).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].name, "Año Nuevo");
        assert_eq!(rows[0].kind.as_deref(), Some("Civil"));
        assert_eq!(rows[0].irrenunciable, Some(true));
        assert_eq!(rows[0].laws.len(), 1);
        assert_eq!(rows[0].laws[0].name, "Ley 2.977");
        assert_eq!(rows[0].weekday_name, "Monday");

        assert_eq!(rows[1].comments, None);
        assert_eq!(rows[1].irrenunciable, Some(false));
        assert_eq!(rows[1].month_name, "October");
    }

    #[test]
    fn accepts_aliases_and_missing_optionals() {
        let rows = parse_holidays(r#"[{"fecha": "2025-05-01", "name": "Día del Trabajo"}]"#).unwrap();
        assert_eq!(rows[0].name, "Día del Trabajo");
        assert_eq!(rows[0].kind, None);
        assert!(rows[0].laws.is_empty());
    }

    #[test]
    fn missing_date_is_a_parse_error() {
        let err = parse_holidays(r#"[{"nombre": "Sin fecha", "tipo": "Civil"}]"#).unwrap_err();
        assert!(!err.is_network());
        assert!(err.to_string().contains("fecha"));
    }

    #[test]
    fn bad_date_names_the_row() {
        let err = parse_holidays(r#"[{"fecha": "2024-01-01"}, {"fecha": "31/12/2024"}]"#).unwrap_err();
        assert_eq!(err, LoadError::parse("row 1: invalid date '31/12/2024'"));
    }

    #[test]
    fn non_array_body_is_a_parse_error() {
        assert!(parse_holidays(r#"{"error": "rate limited"}"#).is_err());
        assert!(parse_holidays("<html>").is_err());
    }

    #[test]
    fn parse_date_accepts_timestamps() {
        let d = NaiveDate::from_ymd_opt(2024, 9, 18).unwrap();
        assert_eq!(parse_date("2024-09-18"), Some(d));
        assert_eq!(parse_date("2024-09-18T00:00:00Z"), Some(d));
        assert_eq!(parse_date("2024-09-18 03:00:00"), Some(d));
        assert_eq!(parse_date("2024-09-18x"), None);
        assert_eq!(parse_date("2024-9-1"), None);
    }
}
