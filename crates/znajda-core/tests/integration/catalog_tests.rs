//! Integration tests for the Catalog: reload, publish, and downloads
//! against a real temporary dataset directory.

use serde_json::json;
use tempfile::TempDir;
use znajda_core::{AppError, Catalog, NewReport, STATUS_LOST};

use crate::integration::common::{as_record, located_record, valid_record, write_json_dataset};

fn fresh_catalog() -> (Catalog, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let catalog = Catalog::new(dir.path().join("datasets"));
    (catalog, dir)
}

/// Publishing writes the backing file and a download returns exactly the
/// published rows, untouched by sanitization.
#[test]
fn test_publish_download_round_trip() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    let mut custom = valid_record("Czarny portfel");
    // Extra key survives publishing; only uploads sanitize.
    custom.insert("extra_note".to_string(), json!("do not drop"));
    let items = vec![custom.clone(), valid_record("Klucze")];

    let dataset = catalog.publish("Rzeczy znalezione - Łódź 2024!", items.clone());

    assert_eq!(dataset.id, "rzeczy-znalezione-odz-2024");
    assert_eq!(dataset.title, "Rzeczy znalezione - Łódź 2024!");
    assert_eq!(dataset.count, 2);
    assert_eq!(dataset.status, "Opublikowany");

    let path = catalog.dataset_dir().join("rzeczy-znalezione-odz-2024.json");
    assert!(path.is_file(), "backing file should exist");

    let loaded = catalog
        .load_dataset_items("rzeczy-znalezione-odz-2024")
        .expect("load published dataset");
    assert_eq!(loaded, items);
    assert_eq!(loaded[0]["extra_note"], json!("do not drop"));
}

/// Datasets are listed most recently published first.
#[test]
fn test_datasets_listed_most_recent_first() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    catalog.publish("Pierwszy zbiór", vec![valid_record("A")]);
    catalog.publish("Drugi zbiór", vec![valid_record("B")]);

    let ids: Vec<&str> = catalog.datasets().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["drugi-zbior", "pierwszy-zbior"]);
}

/// Official item ids continue counting where the citizen reports left
/// off, so this snapshot lists every item under a distinct id. (Ids are
/// only unique within each store; a report filed after a reload can
/// reuse an official id.)
#[test]
fn test_official_ids_continue_after_reports() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    let first = catalog.add_report(NewReport {
        name: "Zgubiony telefon".to_string(),
        contact: "anna@example.com".to_string(),
        ..Default::default()
    });
    let second = catalog.add_report(NewReport {
        name: "Zgubiony parasol".to_string(),
        contact: "jan@example.com".to_string(),
        ..Default::default()
    });
    assert_eq!((first, second), (1, 2));

    catalog.publish("Zbiór", vec![valid_record("A"), valid_record("B")]);

    let ids: Vec<u64> = catalog.searchable_items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

/// Reports always carry the `lost` status and keep their ids across an
/// official reload.
#[test]
fn test_reports_survive_reload() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    catalog.add_report(NewReport {
        name: "Rower".to_string(),
        contact: "ktos@example.com".to_string(),
        security_question: Some("Jaki kolor ramy?".to_string()),
        ..Default::default()
    });
    catalog.publish("Zbiór", vec![valid_record("A")]);

    catalog.reload().expect("second reload");

    let reports = catalog.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].id, 1);
    assert_eq!(reports[0].status, STATUS_LOST);
    assert_eq!(
        reports[0].security_question.as_deref(),
        Some("Jaki kolor ramy?")
    );
}

/// Reload picks up dataset files from disk, in filename order, and
/// normalizes their rows into the official index.
#[test]
fn test_reload_rebuilds_from_directory() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("create the directory");

    write_json_dataset(
        catalog.dataset_dir(),
        "a-pierwszy.json",
        &[located_record("Portfel", 52.2297, 21.0122)],
    );
    write_json_dataset(
        catalog.dataset_dir(),
        "b-drugi.json",
        &[valid_record("Klucze"), valid_record("Parasol")],
    );

    let report = catalog.reload().expect("reload with files");

    assert_eq!(report.datasets_loaded, 2);
    assert_eq!(report.items_indexed, 3);
    assert_eq!(report.rows_rejected, 0);
    assert!(report.failures.is_empty());

    let ids: Vec<&str> = catalog.datasets().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a-pierwszy", "b-drugi"]);

    let official = catalog.official_items();
    assert_eq!(official.len(), 3);
    assert_eq!(official[0].id, 1);
    assert_eq!(official[0].name, "Portfel");
    assert_eq!(official[0].location, "Warszawa, Marszałkowska 10");
    assert_eq!(official[0].location_lat, Some(52.2297));
}

/// A file that fails to parse is reported and skipped; the others load.
#[test]
fn test_reload_isolates_bad_files() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("create the directory");

    write_json_dataset(catalog.dataset_dir(), "dobry.json", &[valid_record("A")]);
    std::fs::write(catalog.dataset_dir().join("zepsuty.json"), "{ not json")
        .expect("write broken file");
    std::fs::write(catalog.dataset_dir().join("notatki.txt"), "ignored")
        .expect("write unrelated file");

    let report = catalog.reload().expect("reload");

    assert_eq!(report.datasets_loaded, 1);
    assert_eq!(report.items_indexed, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].file, "zepsuty.json");
    assert!(report.failures[0].error.starts_with("JSON parse error:"));

    assert!(catalog.find_dataset("dobry").is_some());
    assert!(catalog.find_dataset("zepsuty").is_none());
    assert!(catalog.find_dataset("notatki").is_none());
}

/// Invalid rows inside an otherwise good file are counted, not fatal.
#[test]
fn test_reload_counts_rejected_rows() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("create the directory");

    let mut bad = valid_record("Bez kategorii");
    bad.remove("kategoria");
    write_json_dataset(
        catalog.dataset_dir(),
        "mieszany.json",
        &[valid_record("Dobry"), bad],
    );

    let report = catalog.reload().expect("reload");

    assert_eq!(report.datasets_loaded, 1);
    assert_eq!(report.items_indexed, 1);
    assert_eq!(report.rows_rejected, 1);
    assert!(report.failures.is_empty());

    let dataset = catalog.find_dataset("mieszany").expect("dataset registered");
    assert_eq!(dataset.count, 1);
}

/// Dataset downloads re-read the backing file, so an edit made directly
/// on disk shows up without a reload.
#[test]
fn test_download_reads_fresh_from_disk() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    catalog.publish("Zbiór", vec![valid_record("Stara nazwa")]);

    let edited = vec![valid_record("Nowa nazwa")];
    write_json_dataset(catalog.dataset_dir(), "zbior.json", &edited);

    let loaded = catalog.load_dataset_items("zbior").expect("load");
    assert_eq!(loaded[0]["nazwa_przedmiotu"], json!("Nowa nazwa"));
}

/// When the backing file disappears the in-memory rows still serve the
/// download; an id that never existed is an error.
#[test]
fn test_download_falls_back_to_memory() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    catalog.publish("Zbiór", vec![valid_record("Portfel")]);
    std::fs::remove_file(catalog.dataset_dir().join("zbior.json")).expect("remove backing file");

    let loaded = catalog.load_dataset_items("zbior").expect("fallback");
    assert_eq!(loaded.len(), 1);

    let missing = catalog.load_dataset_items("nie-ma-takiego");
    assert!(missing.is_err());
}

/// Ids carrying a path separator never resolve to a file, even when a
/// matching file sits outside the dataset directory.
#[test]
fn test_download_rejects_ids_with_separators() {
    let (mut catalog, dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    // One level above the dataset directory, where a traversal id
    // would land.
    write_json_dataset(dir.path(), "poufne.json", &[valid_record("Poufne")]);

    for id in ["../poufne", "../poufne.json", "..\\poufne", "/etc/hostname"] {
        let result = catalog.load_dataset_items(id);
        assert!(
            matches!(result, Err(AppError::DatasetNotFound(_))),
            "id {:?} must be unknown",
            id
        );
    }
}

/// A publish still registers the dataset when the directory cannot be
/// written; downloads then run off the in-memory rows.
#[test]
fn test_publish_survives_unwritable_directory() {
    let dir = TempDir::new().expect("create temp dir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").expect("write blocker");

    // The dataset dir path runs through a regular file, so every write
    // under it must fail.
    let mut catalog = Catalog::new(blocker.join("datasets"));
    let dataset = catalog.publish("Zbiór awaryjny", vec![valid_record("Portfel")]);

    assert_eq!(dataset.count, 1);
    assert_eq!(catalog.datasets().len(), 1);

    let loaded = catalog.load_dataset_items("zbior-awaryjny").expect("fallback");
    assert_eq!(loaded.len(), 1);
}

/// Grouped and flat exports cover every registered dataset.
#[test]
fn test_exports_cover_all_datasets() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    catalog.publish("Pierwszy", vec![valid_record("A"), valid_record("B")]);
    catalog.publish("Drugi", vec![valid_record("C")]);

    let grouped = catalog.all_items_grouped();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["pierwszy"].len(), 2);
    assert_eq!(grouped["drugi"].len(), 1);

    let flat = catalog.all_items_flat();
    assert_eq!(flat.len(), 3);
    // Registry order: most recent dataset first.
    assert_eq!(flat[0]["nazwa_przedmiotu"], json!("C"));
}

/// The working set is replaced wholesale and read back unchanged.
#[test]
fn test_working_set_replacement() {
    let (mut catalog, _dir) = fresh_catalog();

    assert!(catalog.working_set().is_empty());

    let staged = vec![valid_record("A"), valid_record("B")];
    catalog.set_working_set(staged.clone());
    assert_eq!(catalog.working_set(), staged.as_slice());

    let replacement = vec![as_record(json!({"nazwa_przedmiotu": "C"}))];
    catalog.set_working_set(replacement.clone());
    assert_eq!(catalog.working_set(), replacement.as_slice());
}

/// Published rows normalize into the search index with generic aliases
/// honored, keeping externally produced records searchable.
#[test]
fn test_publish_normalizes_alias_fields() {
    let (mut catalog, _dir) = fresh_catalog();
    catalog.reload().expect("initial reload");

    let alias_row = as_record(json!({
        "name": "Niebieski plecak",
        "category": "Plecak",
        "date": "2023-10-06",
        "city": "Gdańsk",
        "street": "Długa 1",
        "contact": "biuro@gdansk.pl",
        "lat": 54.3520,
        "lng": 18.6466,
    }));
    catalog.publish("Zbiór z aliasami", vec![alias_row]);

    let items = catalog.searchable_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Niebieski plecak");
    assert_eq!(items[0].location, "Gdańsk, Długa 1");
    assert_eq!(items[0].location_lat, Some(54.3520));
    // No status in the row: official default applies.
    assert_eq!(items[0].status, "znaleziony");
}
