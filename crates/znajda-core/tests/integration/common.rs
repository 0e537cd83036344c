//! Shared fixtures for the integration tests.

use serde_json::{Value, json};
use znajda_core::RawRecord;

/// A fully valid raw record under the canonical Polish field names.
/// Adjust individual fields after the fact for negative cases.
pub fn valid_record(name: &str) -> RawRecord {
    as_record(json!({
        "nazwa_przedmiotu": name,
        "kategoria": "Portfel",
        "data_znalezienia": "2023-10-05",
        "miejsce_znalezienia_miasto": "Warszawa",
        "miejsce_znalezienia_ulica": "Marszałkowska 10",
        "jednostka_przechowujaca": "Biuro Rzeczy Znalezionych",
        "kontakt_email": "biuro@um.warszawa.pl",
        "status": "znaleziony",
    }))
}

/// A valid record with coordinates attached.
pub fn located_record(name: &str, lat: f64, lng: f64) -> RawRecord {
    let mut record = valid_record(name);
    record.insert("location_lat".to_string(), json!(lat));
    record.insert("location_lng".to_string(), json!(lng));
    record
}

pub fn as_record(value: Value) -> RawRecord {
    value.as_object().expect("fixture must be an object").clone()
}

/// Writes records as a JSON dataset file under `dir`.
pub fn write_json_dataset(dir: &std::path::Path, file: &str, records: &[RawRecord]) {
    let body = serde_json::to_string_pretty(records).expect("serialize fixture");
    std::fs::write(dir.join(file), body).expect("write fixture file");
}
