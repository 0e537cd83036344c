//! Multi-format upload parsing.
//!
//! Turns raw upload bytes into sanitized, validated records plus a
//! row-indexed error list. Dispatch is by file extension; every format
//! funnels through the same sanitize/validate pipeline so a CSV row and
//! a JSON object are judged identically.

use serde_json::Value;

use crate::models::{RawRecord, ValidationError};
use crate::sanitize::sanitize_record;
use crate::schema::validate_record;

/// Result of parsing one uploaded file.
///
/// `items` holds the sanitized rows that passed validation. `errors`
/// carries parse and validation problems with 1-based row indices; row 0
/// marks a failure of the file as a whole.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub items: Vec<RawRecord>,
    pub errors: Vec<ValidationError>,
}

impl ParseOutcome {
    fn whole_file_failure(message: String) -> Self {
        Self {
            items: Vec::new(),
            errors: vec![ValidationError {
                row: 0,
                errors: vec![message],
            }],
        }
    }

    /// Whether the file as a whole failed to parse.
    pub fn is_fatal(&self) -> bool {
        self.items.is_empty() && self.errors.iter().any(|e| e.row == 0)
    }

    fn accept(&mut self, row: usize, raw: &RawRecord) {
        let cleaned = sanitize_record(raw);
        let row_errors = validate_record(&cleaned);
        if row_errors.is_empty() {
            self.items.push(cleaned);
        } else {
            self.errors.push(ValidationError {
                row,
                errors: row_errors,
            });
        }
    }

    fn reject(&mut self, row: usize, message: String) {
        self.errors.push(ValidationError {
            row,
            errors: vec![message],
        });
    }
}

/// Parses an uploaded dataset file, dispatching on its extension.
///
/// Supported: `csv`, `json` (array of objects), `jsonl`/`ndjson` (one
/// object per line). Anything else is a whole-file failure.
pub fn parse_upload(bytes: &[u8], filename: &str) -> ParseOutcome {
    match extension(filename).as_str() {
        "csv" => parse_csv(bytes),
        "json" => parse_json(bytes),
        "jsonl" | "ndjson" => parse_jsonl(bytes),
        other => ParseOutcome::whole_file_failure(format!("Unsupported file type: {}", other)),
    }
}

/// Lowercased final extension; the whole name when there is no dot.
fn extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => filename.to_lowercase(),
    }
}

fn parse_csv(bytes: &[u8]) -> ParseOutcome {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(normalize_header).collect(),
        Err(e) => return ParseOutcome::whole_file_failure(format!("CSV parse error: {}", e)),
    };

    let mut outcome = ParseOutcome::default();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        match record {
            Ok(record) => {
                let raw: RawRecord = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, field)| (header.clone(), Value::String(field.to_string())))
                    .collect();
                outcome.accept(row, &raw);
            }
            Err(e) => outcome.reject(row, format!("CSV parse error: {}", e)),
        }
    }
    outcome
}

/// Trims, lowercases, and snake_cases a CSV header name, so
/// `"Nazwa Przedmiotu"` addresses the `nazwa_przedmiotu` field.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn parse_json(bytes: &[u8]) -> ParseOutcome {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => return ParseOutcome::whole_file_failure(format!("JSON parse error: {}", e)),
    };

    let rows = match value {
        Value::Array(rows) => rows,
        _ => {
            return ParseOutcome::whole_file_failure("JSON must be an array of records".to_string())
        }
    };

    let mut outcome = ParseOutcome::default();
    for (index, row) in rows.iter().enumerate() {
        match row.as_object() {
            Some(raw) => outcome.accept(index + 1, raw),
            None => outcome.reject(index + 1, "Record must be a JSON object".to_string()),
        }
    }
    outcome
}

fn parse_jsonl(bytes: &[u8]) -> ParseOutcome {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => return ParseOutcome::whole_file_failure(format!("JSONL parse error: {}", e)),
    };

    let mut outcome = ParseOutcome::default();
    let mut row = 0;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        row += 1;
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(raw)) => outcome.accept(row, &raw),
            Ok(_) => outcome.reject(row, "Record must be a JSON object".to_string()),
            Err(e) => outcome.reject(row, format!("JSONL parse error: {}", e)),
        }
    }
    outcome
}
