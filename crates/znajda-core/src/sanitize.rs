//! Record sanitization: unknown-key filtering and type coercion.
//!
//! Runs between parsing and validation, so the validator only ever sees
//! schema fields with predictable types.

use serde_json::{Map, Number, Value};

use crate::models::RawRecord;
use crate::schema::{NUMERIC_FIELDS, is_known_field};

/// Cleans one raw record for validation.
///
/// Keys outside the schema are dropped. Coordinate fields are coerced to
/// a JSON number or null; everything else becomes a trimmed string.
/// Blank strings are preserved (not dropped) so the validator can report
/// the field as missing.
pub fn sanitize_record(raw: &RawRecord) -> RawRecord {
    let mut cleaned = Map::new();
    for (key, value) in raw {
        if !is_known_field(key) {
            continue;
        }
        let value = if NUMERIC_FIELDS.contains(&key.as_str()) {
            coerce_float(value)
        } else {
            stringify_trimmed(value)
        };
        cleaned.insert(key.clone(), value);
    }
    cleaned
}

/// Coerces a value to a finite JSON number, or null when it cannot be.
fn coerce_float(value: &Value) -> Value {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Stringifies a scalar and trims surrounding whitespace. Null stays
/// null; nested structures collapse to their JSON text.
fn stringify_trimmed(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        other => Value::String(other.to_string()),
    }
}
