//! Integration tests for the upload pipeline: bytes in, validated and
//! searchable items out.

use serde_json::json;
use tempfile::TempDir;
use znajda_core::{Catalog, Circle, SearchFilters, parse_upload, search};

use crate::integration::common::{located_record, valid_record};

/// A realistic office upload: mixed-case CSV headers, one row with a
/// missing e-mail, one with a malformed date. Valid rows come through
/// sanitized; each bad row is reported under its own index.
#[test]
fn test_csv_office_upload_end_to_end() {
    let csv = "\
Nazwa Przedmiotu,Kategoria,Data Znalezienia,Miejsce Znalezienia Miasto,Miejsce Znalezienia Ulica,Jednostka Przechowujaca,Kontakt Email,Status
Czarny portfel,Portfel,2023-10-05,Warszawa,Marszałkowska 10,Biuro Rzeczy Znalezionych,biuro@um.warszawa.pl,znaleziony
Klucze z brelokiem,Klucze,2023-10-06,Warszawa,Złota 44,Biuro Rzeczy Znalezionych,,znaleziony
Niebieski parasol,Parasol,06.10.2023,Warszawa,Świętokrzyska 1,Biuro Rzeczy Znalezionych,biuro@um.warszawa.pl,znaleziony
";

    let outcome = parse_upload(csv.as_bytes(), "przedmioty.csv");

    assert_eq!(outcome.items.len(), 1);
    assert_eq!(outcome.items[0]["nazwa_przedmiotu"], json!("Czarny portfel"));

    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(outcome.errors[0].row, 2);
    assert_eq!(
        outcome.errors[0].errors,
        vec!["Missing required field: kontakt_email".to_string()]
    );
    assert_eq!(outcome.errors[1].row, 3);
    assert_eq!(
        outcome.errors[1].errors,
        vec!["Invalid date format: 06.10.2023. Expected: YYYY-MM-DD".to_string()]
    );
}

/// JSONL uploads recover after a malformed line; indices count records,
/// not file lines.
#[test]
fn test_jsonl_upload_recovers_after_bad_line() {
    let good = serde_json::to_string(&valid_record("Portfel")).unwrap();
    let body = format!("{}\n\nnot json\n{}\n", good, good);

    let outcome = parse_upload(body.as_bytes(), "przedmioty.jsonl");

    assert_eq!(outcome.items.len(), 2);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].row, 2);
}

/// Uploaded rows published as a dataset become searchable, including the
/// geospatial narrowing.
#[test]
fn test_upload_publish_search_flow() {
    let dir = TempDir::new().expect("create temp dir");
    let mut catalog = Catalog::new(dir.path().join("datasets"));
    catalog.reload().expect("initial reload");

    let rows = vec![
        located_record("Czarny portfel", 52.2297, 21.0122),
        located_record("Srebrny zegarek", 50.0647, 19.9450),
        valid_record("Parasol bez współrzędnych"),
    ];
    let body = serde_json::to_vec(&rows).expect("serialize rows");

    let outcome = parse_upload(&body, "przedmioty.json");
    assert_eq!(outcome.items.len(), 3);

    catalog.publish("Przedmioty z biura", outcome.items);
    let items = catalog.searchable_items();

    // Text search narrows by name.
    let by_text = search(
        &items,
        &SearchFilters {
            query: Some("zegarek".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(by_text.items.len(), 1);
    assert_eq!(by_text.items[0].name, "Srebrny zegarek");

    // 10 km around central Warsaw keeps only the Warsaw item in the
    // list, while the map still shows both located candidates.
    let by_circle = search(
        &items,
        &SearchFilters {
            circle: Some(Circle {
                lat: 52.2297,
                lng: 21.0122,
                radius_m: 10_000.0,
            }),
            ..Default::default()
        },
    );
    assert_eq!(by_circle.items.len(), 1);
    assert_eq!(by_circle.items[0].name, "Czarny portfel");
    assert_eq!(by_circle.map_points.len(), 2);
}

/// The same rows validate identically no matter which format carried
/// them.
#[test]
fn test_formats_share_validation() {
    let mut bad = valid_record("Bez miasta");
    bad.remove("miejsce_znalezienia_miasto");

    let json_body = serde_json::to_vec(&vec![bad.clone()]).unwrap();
    let json_outcome = parse_upload(&json_body, "z.json");

    let jsonl_body = serde_json::to_string(&bad).unwrap();
    let jsonl_outcome = parse_upload(jsonl_body.as_bytes(), "z.jsonl");

    assert_eq!(json_outcome.errors.len(), 1);
    assert_eq!(json_outcome.errors[0].errors, jsonl_outcome.errors[0].errors);
    assert_eq!(
        json_outcome.errors[0].errors,
        vec!["Missing required field: miejsce_znalezienia_miasto".to_string()]
    );
}
