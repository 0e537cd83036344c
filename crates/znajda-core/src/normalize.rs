//! Canonicalization of raw records into search-ready items.
//!
//! Records arrive under two naming conventions: the Polish canonical
//! field set used by official uploads, and a generic alias set (`name`,
//! `city`, `lat`, ...) used by older exports and external callers. Each
//! canonical field resolves through an ordered candidate-key list with
//! the localized name first, so mixed rows normalize the same way
//! regardless of which surface produced them.

use serde_json::Value;

use crate::models::{FoundItemRecord, RawRecord, STATUS_FOUND};

const NAME_KEYS: &[&str] = &["nazwa_przedmiotu", "name"];
const CATEGORY_KEYS: &[&str] = &["kategoria", "category"];
const DATE_KEYS: &[&str] = &["data_znalezienia", "date"];
const CITY_KEYS: &[&str] = &["miejsce_znalezienia_miasto", "city", "location_city"];
const STREET_KEYS: &[&str] = &["miejsce_znalezienia_ulica", "street", "location_street"];
const CONTACT_KEYS: &[&str] = &["kontakt_email", "contact"];
const DESCRIPTION_KEYS: &[&str] = &["opis_szczegolowy", "description"];
const LAT_KEYS: &[&str] = &["location_lat", "lat"];
const LNG_KEYS: &[&str] = &["location_lng", "lng"];
const RADIUS_KEYS: &[&str] = &["location_radius"];

/// Normalizes a raw record into the canonical item shape.
///
/// Purely a function of its inputs: the same record and id always yield
/// the same item, and normalizing an already-canonical record changes
/// nothing. Missing text fields become empty strings, missing
/// coordinates `None`, and a missing status defaults to
/// [`STATUS_FOUND`].
pub fn normalize_record(raw: &RawRecord, id: u64) -> FoundItemRecord {
    let city = first_text(raw, CITY_KEYS);
    let street = first_text(raw, STREET_KEYS);
    let location = location_label(raw, &city, &street);

    let mut status = first_text(raw, &["status"]);
    if status.is_empty() {
        status = STATUS_FOUND.to_string();
    }

    FoundItemRecord {
        id,
        name: first_text(raw, NAME_KEYS),
        category: first_text(raw, CATEGORY_KEYS),
        date: first_text(raw, DATE_KEYS),
        location,
        location_city: city,
        location_street: street,
        location_lat: first_float(raw, LAT_KEYS),
        location_lng: first_float(raw, LNG_KEYS),
        location_radius: first_float(raw, RADIUS_KEYS),
        description: first_text(raw, DESCRIPTION_KEYS),
        contact: first_text(raw, CONTACT_KEYS),
        status,
        security_question: non_empty(first_text(raw, &["security_question"])),
    }
}

/// Display label: non-empty city and street joined with a comma, falling
/// back to a raw `location` field when both are absent.
fn location_label(raw: &RawRecord, city: &str, street: &str) -> String {
    match (city.is_empty(), street.is_empty()) {
        (false, false) => format!("{}, {}", city, street),
        (false, true) => city.to_string(),
        (true, false) => street.to_string(),
        (true, true) => first_text(raw, &["location"]),
    }
}

/// First candidate key holding a usable text value, trimmed. Scalars are
/// stringified; blanks and nulls fall through to the next candidate.
fn first_text(raw: &RawRecord, keys: &[&str]) -> String {
    for key in keys {
        match raw.get(*key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
            Some(Value::Number(n)) => return n.to_string(),
            Some(Value::Bool(b)) => return b.to_string(),
            _ => {}
        }
    }
    String::new()
}

/// First candidate key coercible to a finite float.
fn first_float(raw: &RawRecord, keys: &[&str]) -> Option<f64> {
    for key in keys {
        match raw.get(*key) {
            Some(Value::Number(n)) => {
                if let Some(f) = n.as_f64() {
                    return Some(f);
                }
            }
            Some(Value::String(s)) => {
                if let Ok(f) = s.trim().parse::<f64>() {
                    if f.is_finite() {
                        return Some(f);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
