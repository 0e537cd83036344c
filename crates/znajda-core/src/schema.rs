//! Field sets and per-record validation for found-item uploads.
//!
//! The upload schema mirrors the municipal found-item register: required
//! and optional fields carry their Polish canonical names, coordinates
//! use the `location_*` triple. The same constants drive the sanitizer,
//! the validator, and the published JSON Schema document, so the three
//! can never drift apart.

use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::models::{OFFICIAL_STATUSES, RawRecord};

/// Fields every valid record must carry a non-blank value for.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "nazwa_przedmiotu",
    "kategoria",
    "data_znalezienia",
    "miejsce_znalezienia_miasto",
    "miejsce_znalezienia_ulica",
    "jednostka_przechowujaca",
    "kontakt_email",
    "status",
];

/// Optional descriptive fields preserved through sanitization.
pub const OPTIONAL_FIELDS: [&str; 4] = [
    "opis_szczegolowy",
    "zdjecie_url",
    "kontakt_telefon",
    "sygnatura_sprawy",
];

/// Coordinate fields coerced to a float (or null) by the sanitizer.
pub const NUMERIC_FIELDS: [&str; 3] = ["location_lat", "location_lng", "location_radius"];

/// Accepted format for `data_znalezienia`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a field name survives sanitization.
pub fn is_known_field(name: &str) -> bool {
    REQUIRED_FIELDS.contains(&name)
        || OPTIONAL_FIELDS.contains(&name)
        || NUMERIC_FIELDS.contains(&name)
}

/// Validates a single record against the upload schema.
///
/// Returns one message per violation; an empty list means the record is
/// valid. Absent keys, JSON nulls, and blank strings all count as
/// missing. The finding date is checked for `YYYY-MM-DD` shape only when
/// present, so a missing date yields exactly one error, not two.
pub fn validate_record(record: &RawRecord) -> Vec<String> {
    let mut errors = Vec::new();

    for field in REQUIRED_FIELDS {
        if is_blank(record.get(field)) {
            errors.push(format!("Missing required field: {}", field));
        }
    }

    if let Some(Value::String(raw)) = record.get("data_znalezienia") {
        let date = raw.trim();
        if !date.is_empty() && NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            errors.push(format!("Invalid date format: {}. Expected: YYYY-MM-DD", date));
        }
    }

    errors
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// JSON Schema document describing the canonical record shape.
///
/// Served at `/schema.json` so external consumers can validate exported
/// records without talking to this service.
pub fn json_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "FoundItemRecord",
        "description": "A single found-item record as accepted by dataset uploads.",
        "type": "object",
        "required": REQUIRED_FIELDS,
        "properties": {
            "nazwa_przedmiotu": {
                "type": "string",
                "description": "Item name"
            },
            "kategoria": {
                "type": "string",
                "description": "Item category"
            },
            "data_znalezienia": {
                "type": "string",
                "format": "date",
                "description": "Finding date, YYYY-MM-DD"
            },
            "miejsce_znalezienia_miasto": {
                "type": "string",
                "description": "City where the item was found"
            },
            "miejsce_znalezienia_ulica": {
                "type": "string",
                "description": "Street where the item was found"
            },
            "jednostka_przechowujaca": {
                "type": "string",
                "description": "Office or unit holding the item"
            },
            "kontakt_email": {
                "type": "string",
                "format": "email",
                "description": "Contact e-mail of the holding unit"
            },
            "status": {
                "type": "string",
                "enum": OFFICIAL_STATUSES,
                "description": "Item status"
            },
            "opis_szczegolowy": {
                "type": "string",
                "description": "Detailed description"
            },
            "zdjecie_url": {
                "type": "string",
                "format": "uri",
                "description": "Photo URL"
            },
            "kontakt_telefon": {
                "type": "string",
                "description": "Contact phone of the holding unit"
            },
            "sygnatura_sprawy": {
                "type": "string",
                "description": "Case reference number"
            },
            "location_lat": {
                "type": ["number", "null"],
                "description": "Latitude in degrees"
            },
            "location_lng": {
                "type": ["number", "null"],
                "description": "Longitude in degrees"
            },
            "location_radius": {
                "type": ["number", "null"],
                "description": "Location uncertainty radius in meters"
            }
        },
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_record() -> RawRecord {
        json!({
            "nazwa_przedmiotu": "Czarny portfel",
            "kategoria": "Portfel",
            "data_znalezienia": "2023-10-05",
            "miejsce_znalezienia_miasto": "Warszawa",
            "miejsce_znalezienia_ulica": "Marszałkowska 10",
            "jednostka_przechowujaca": "Biuro Rzeczy Znalezionych",
            "kontakt_email": "biuro@um.warszawa.pl",
            "status": "znaleziony",
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate_record(&valid_record()).is_empty());
    }

    #[test]
    fn test_each_missing_required_field_is_named() {
        for field in REQUIRED_FIELDS {
            let mut record = valid_record();
            record.remove(field);
            let errors = validate_record(&record);
            assert_eq!(errors, vec![format!("Missing required field: {}", field)]);
        }
    }

    #[test]
    fn test_null_and_blank_count_as_missing() {
        let mut record = valid_record();
        record.insert("kategoria".to_string(), Value::Null);
        record.insert("status".to_string(), json!("   "));
        let errors = validate_record(&record);
        assert!(errors.contains(&"Missing required field: kategoria".to_string()));
        assert!(errors.contains(&"Missing required field: status".to_string()));
    }

    #[test]
    fn test_invalid_date_cites_offending_value() {
        let mut record = valid_record();
        record.insert("data_znalezienia".to_string(), json!("2023-13-40"));
        let errors = validate_record(&record);
        assert_eq!(
            errors,
            vec!["Invalid date format: 2023-13-40. Expected: YYYY-MM-DD".to_string()]
        );
    }

    #[test]
    fn test_non_iso_date_shapes_rejected() {
        for bad in ["05.10.2023", "2023/10/05", "October 5, 2023", "2023-10-99"] {
            let mut record = valid_record();
            record.insert("data_znalezienia".to_string(), json!(bad));
            assert_eq!(validate_record(&record).len(), 1, "date {:?}", bad);
        }
    }

    #[test]
    fn test_unpadded_date_parses_like_strptime() {
        // chrono (like strptime) accepts unpadded month/day digits.
        let mut record = valid_record();
        record.insert("data_znalezienia".to_string(), json!("2023-1-5"));
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn test_missing_date_yields_single_error() {
        let mut record = valid_record();
        record.remove("data_znalezienia");
        let errors = validate_record(&record);
        assert_eq!(
            errors,
            vec!["Missing required field: data_znalezienia".to_string()]
        );
    }

    #[test]
    fn test_multiple_violations_accumulate() {
        let mut record = valid_record();
        record.remove("nazwa_przedmiotu");
        record.remove("kontakt_email");
        record.insert("data_znalezienia".to_string(), json!("yesterday"));
        assert_eq!(validate_record(&record).len(), 3);
    }

    #[test]
    fn test_optional_fields_not_required() {
        // A valid record with no optional field at all is still valid.
        let record = valid_record();
        for field in OPTIONAL_FIELDS {
            assert!(!record.contains_key(field));
        }
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn test_schema_lists_all_fields() {
        let schema = json_schema();
        let properties = schema["properties"].as_object().unwrap();
        for field in REQUIRED_FIELDS.iter().chain(&OPTIONAL_FIELDS).chain(&NUMERIC_FIELDS) {
            assert!(properties.contains_key(*field), "schema missing {}", field);
        }
        assert_eq!(properties.len(), 15);
        assert_eq!(schema["required"].as_array().unwrap().len(), 8);
        assert_eq!(schema["additionalProperties"], json!(false));
    }
}
