use crate::event::model::EventData;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use tracing::{error, info, instrument};

const REQUIRED_KEY: &str = "eventName";

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("Failed to create whitespace regex");
}

/// Pretty-printed document, as saved to `<event-name>-data.json`
pub fn export_json(event: &EventData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(event)
}

/// Accepts any JSON object with an `eventName` key. Missing fields are left
/// empty and fields of the wrong type are coerced; there is no further
/// schema check.
#[instrument(skip_all, fields(length = text.len()))]
pub fn import_json(text: &str) -> Result<EventData, ImportError> {
    let json = serde_json::from_str::<Value>(text).map_err(|e| {
        error!("Document is not valid JSON: {:?}", e);
        ImportError::InvalidJson
    })?;

    match &json {
        Value::Object(fields) if fields.contains_key(REQUIRED_KEY) => {}
        _ => {
            error!("Document is not an object with '{}'", REQUIRED_KEY);
            return Err(ImportError::InvalidFormat);
        }
    }

    let event = serde_json::from_value::<EventData>(json).map_err(|e| {
        error!("Document fields could not be read: {:?}", e);
        ImportError::InvalidFormat
    })?;

    info!("Imported '{}'", event.event_name);

    Ok(event)
}

pub fn json_filename(event_name: &str) -> String {
    format!("{}-data.json", hyphenate(event_name))
}

pub fn overview_filename(event_name: &str) -> String {
    format!("{}.html", hyphenate(event_name))
}

pub fn program_filename(event_name: &str) -> String {
    format!("{}program.html", hyphenate(event_name))
}

fn hyphenate(event_name: &str) -> String {
    WHITESPACE_RUN.replace_all(event_name, "-").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportError {
    InvalidJson,
    InvalidFormat,
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::InvalidJson => write!(f, "JSONファイルの読み込みに失敗しました。"),
            ImportError::InvalidFormat => write!(
                f,
                "無効なJSONファイルです。正しいフォーマットのファイルを選択してください。"
            ),
        }
    }
}

impl std::error::Error for ImportError {}
