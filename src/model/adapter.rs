// File: src/model/adapter.rs
// Converts raw snapshot records into `Procedure`s. The conversion is lossy
// and forgiving: missing fields become empty values, unparseable dates are
// dropped, and only records without a title are skipped entirely.
use crate::model::dates;
use crate::model::display;
use crate::model::item::{Procedure, ProcedureStatus};
use crate::model::subjects;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// One record as exported from the procedures database. Every field is
/// optional; the exporter never promised a stable shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProcedure {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "stage_reached_in_procedure")]
    pub stage: Option<String>,
    #[serde(default)]
    pub subjects: Option<String>,
    /// Usually a map of event name -> {"Date": "..."}, occasionally a
    /// flattened string in older exports.
    #[serde(default)]
    pub key_events: Option<Value>,
    #[serde(default)]
    pub proposal_summary: Option<String>,
}

static DATE_SCAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\d{4}-\d{2}-\d{2}|\d{2}/\d{2}/\d{4}|\d{2}-\d{2}-\d{4}|\d{2}\.\d{2}\.\d{4}|\d{1,2} \w+\.? \d{4}",
    )
    .unwrap()
});

/// Pulls every parseable date out of a key_events value, whichever shape
/// it has. Unparseable entries are skipped.
fn event_dates(events: &Value) -> Vec<NaiveDate> {
    match events {
        Value::Object(map) => map
            .values()
            .filter_map(|event| event.get("Date"))
            .filter_map(Value::as_str)
            .filter_map(dates::parse_flexible)
            .collect(),
        Value::String(text) => DATE_SCAN_RE
            .find_iter(text)
            .filter_map(|m| dates::parse_flexible(m.as_str()))
            .collect(),
        _ => Vec::new(),
    }
}

impl Procedure {
    /// Returns None for records without a usable title; the original site
    /// never rendered those either.
    pub fn from_raw(raw: RawProcedure, date_format: &str) -> Option<Self> {
        let title = raw.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            log::debug!("Skipping untitled record (reference: {:?})", raw.reference);
            return None;
        }

        let stage = raw.stage.as_deref().map(str::trim).unwrap_or_default();
        let subjects_text = raw.subjects.as_deref().unwrap_or_default();

        let latest = raw
            .key_events
            .as_ref()
            .map(|events| event_dates(events))
            .unwrap_or_default()
            .into_iter()
            .max();

        let (date_raw, date_label, year) = match latest {
            Some(date) => (
                dates::sortable(date),
                dates::display(date, date_format),
                date.year().to_string(),
            ),
            None => (
                String::new(),
                dates::UNKNOWN_LABEL.to_string(),
                String::new(),
            ),
        };

        let summary = raw
            .proposal_summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(display::tidy_summary);

        Some(Self {
            reference: raw.reference.as_deref().map(str::trim).unwrap_or_default().to_string(),
            title: title.to_string(),
            status: ProcedureStatus::from_stage(stage),
            stage: stage.to_string(),
            year,
            subjects: subjects::extract_codes(subjects_text),
            subject_names: subjects::clean_subject_names(subjects_text),
            date_raw,
            date_label,
            summary,
        })
    }

    /// Converts a whole snapshot, logging how many records were dropped.
    pub fn from_raw_records(records: Vec<RawProcedure>, date_format: &str) -> Vec<Self> {
        let total = records.len();
        let procedures: Vec<Self> = records
            .into_iter()
            .filter_map(|raw| Self::from_raw(raw, date_format))
            .collect();
        if procedures.len() < total {
            log::info!(
                "Loaded {} of {} snapshot records ({} skipped)",
                procedures.len(),
                total,
                total - procedures.len()
            );
        }
        procedures
    }
}
