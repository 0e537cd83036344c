//! The catalog: in-memory item stores plus the dataset directory.
//!
//! Four collections live here. Citizen reports and the official item
//! index back `/search`; dataset summaries and their raw rows back the
//! publishing and download surface. Reports are append-only for the
//! process lifetime; the official side is rebuilt by [`Catalog::reload`]
//! and extended by [`Catalog::publish`].

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};
use unicode_normalization::UnicodeNormalization;

use crate::error::AppError;
use crate::models::{
    DATASET_STATUS_PUBLISHED, Dataset, FoundItemRecord, NewReport, RawRecord, STATUS_LOST,
};
use crate::normalize::normalize_record;
use crate::parse::parse_upload;

/// File extensions scanned during a reload.
const DATASET_EXTENSIONS: [&str; 4] = ["csv", "json", "jsonl", "ndjson"];

/// Slug used when a dataset title yields no usable characters.
const FALLBACK_SLUG: &str = "dataset";

/// Outcome of a full catalog reload.
#[derive(Debug, Clone, Default)]
pub struct ReloadReport {
    /// Dataset files registered.
    pub datasets_loaded: usize,
    /// Valid rows added to the official index.
    pub items_indexed: usize,
    /// Rows rejected by validation across all loaded files.
    pub rows_rejected: usize,
    /// Files skipped entirely, with the reason.
    pub failures: Vec<ReloadFailure>,
}

/// One dataset file that could not be loaded.
#[derive(Debug, Clone)]
pub struct ReloadFailure {
    pub file: String,
    pub error: String,
}

/// In-memory catalog bound to one dataset directory.
pub struct Catalog {
    dataset_dir: PathBuf,
    /// Citizen lost-item reports, append-only.
    reports: Vec<FoundItemRecord>,
    /// Normalized official items, searchable alongside the reports.
    official: Vec<FoundItemRecord>,
    /// Dataset summaries, most recently published first.
    datasets: Vec<Dataset>,
    /// Raw rows per dataset id, the fallback when a backing file is gone.
    dataset_items: HashMap<String, Vec<RawRecord>>,
    /// Rows staged between upload and publish.
    working_set: Vec<RawRecord>,
}

impl Catalog {
    /// Creates an empty catalog bound to `dataset_dir`. No disk access
    /// happens until [`Catalog::reload`].
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            reports: Vec::new(),
            official: Vec::new(),
            datasets: Vec::new(),
            dataset_items: HashMap::new(),
            working_set: Vec::new(),
        }
    }

    /// The directory holding published dataset files.
    pub fn dataset_dir(&self) -> &Path {
        &self.dataset_dir
    }

    /// Rebuilds the official index and dataset registry from disk.
    ///
    /// Creates the dataset directory when absent, then loads every file
    /// with a recognized extension in filename order. A file that fails
    /// to parse is skipped and reported; it never aborts the reload.
    /// Citizen reports are left untouched.
    pub fn reload(&mut self) -> Result<ReloadReport, AppError> {
        fs::create_dir_all(&self.dataset_dir)?;

        self.official.clear();
        self.datasets.clear();
        self.dataset_items.clear();

        let mut files: Vec<PathBuf> = fs::read_dir(&self.dataset_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_dataset_extension(path))
            .collect();
        files.sort();

        let mut report = ReloadReport::default();
        for path in files {
            let file = file_name(&path);
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(file = %file, error = %e, "skipping unreadable dataset file");
                    report.failures.push(ReloadFailure {
                        file,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            let outcome = parse_upload(&bytes, &file);
            if outcome.is_fatal() {
                let error = outcome
                    .errors
                    .first()
                    .and_then(|e| e.errors.first())
                    .cloned()
                    .unwrap_or_else(|| "unreadable dataset file".to_string());
                warn!(file = %file, error = %error, "skipping dataset file");
                report.failures.push(ReloadFailure { file, error });
                continue;
            }

            report.rows_rejected += outcome.errors.len();
            report.items_indexed += outcome.items.len();
            report.datasets_loaded += 1;

            for raw in &outcome.items {
                let id = self.next_item_id();
                self.official.push(normalize_record(raw, id));
            }

            let slug = file_stem(&path);
            self.datasets.push(Dataset {
                id: slug.clone(),
                title: slug.clone(),
                date: file_date(&path),
                count: outcome.items.len(),
                status: DATASET_STATUS_PUBLISHED.to_string(),
            });
            self.dataset_items.insert(slug, outcome.items);
        }

        info!(
            datasets = report.datasets_loaded,
            items = report.items_indexed,
            rejected = report.rows_rejected,
            failures = report.failures.len(),
            "catalog reloaded"
        );
        Ok(report)
    }

    /// Publishes raw rows as a named dataset.
    ///
    /// The rows are written as pretty-printed JSON under the slug derived
    /// from the title, the dataset is registered at the front of the
    /// registry, and the rows join the official search index. Rows are
    /// stored exactly as given, so a download returns what was published.
    /// A file write failure is logged and tolerated: the in-memory
    /// registration still happens and downloads fall back to it.
    pub fn publish(&mut self, title: &str, raw_items: Vec<RawRecord>) -> Dataset {
        let slug = slugify(title);
        let path = self.dataset_path(&slug);

        match self.write_dataset_file(&path, &raw_items) {
            Ok(()) => info!(dataset = %slug, path = %path.display(), "dataset file written"),
            Err(e) => warn!(dataset = %slug, error = %e, "failed to persist dataset file"),
        }

        let dataset = Dataset {
            id: slug.clone(),
            title: title.to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            count: raw_items.len(),
            status: DATASET_STATUS_PUBLISHED.to_string(),
        };
        self.datasets.insert(0, dataset.clone());

        for raw in &raw_items {
            let id = self.next_item_id();
            self.official.push(normalize_record(raw, id));
        }
        self.dataset_items.insert(slug, raw_items);

        info!(dataset = %dataset.id, count = dataset.count, "dataset published");
        dataset
    }

    fn write_dataset_file(&self, path: &Path, items: &[RawRecord]) -> Result<(), AppError> {
        fs::create_dir_all(&self.dataset_dir)?;
        let json = serde_json::to_string_pretty(items)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Records a citizen lost-item report and returns its id.
    ///
    /// Report ids count up from 1 independently of the official index.
    /// Every report carries the `lost` status.
    pub fn add_report(&mut self, report: NewReport) -> u64 {
        let id = self.reports.len() as u64 + 1;
        let item = FoundItemRecord {
            id,
            name: report.name,
            category: report.category,
            date: report.date,
            location: report.location,
            location_city: String::new(),
            location_street: String::new(),
            location_lat: None,
            location_lng: None,
            location_radius: None,
            description: report.description,
            contact: report.contact,
            status: STATUS_LOST.to_string(),
            security_question: report.security_question,
        };
        info!(id, name = %item.name, "citizen report recorded");
        self.reports.push(item);
        id
    }

    /// Looks up a citizen report by id.
    pub fn find_report(&self, id: u64) -> Option<&FoundItemRecord> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Dataset summaries, most recently published first.
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Looks up a dataset summary by slug.
    pub fn find_dataset(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Loads the raw rows of one dataset.
    ///
    /// The backing file is re-read on every call, so edits made directly
    /// on disk are served without a restart. When the file is missing the
    /// in-memory rows from publish time are returned instead; when
    /// neither exists the dataset is unknown. Ids carrying a path
    /// separator are unknown by definition: slugs never contain one, and
    /// joining one onto the dataset directory would resolve outside it.
    pub fn load_dataset_items(&self, id: &str) -> Result<Vec<RawRecord>, AppError> {
        if id.contains(['/', '\\']) {
            return Err(AppError::DatasetNotFound(id.to_string()));
        }
        let path = self.dataset_path(id);
        if path.is_file() {
            let text = fs::read_to_string(&path)?;
            let items: Vec<RawRecord> = serde_json::from_str(&text)?;
            return Ok(items);
        }
        self.dataset_items
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::DatasetNotFound(id.to_string()))
    }

    /// All dataset rows grouped by dataset id, keys sorted.
    ///
    /// Datasets whose rows cannot be loaded are skipped with a warning
    /// rather than failing the whole export.
    pub fn all_items_grouped(&self) -> BTreeMap<String, Vec<RawRecord>> {
        let mut grouped = BTreeMap::new();
        for dataset in &self.datasets {
            match self.load_dataset_items(&dataset.id) {
                Ok(items) => {
                    grouped.insert(dataset.id.clone(), items);
                }
                Err(e) => warn!(dataset = %dataset.id, error = %e, "skipping dataset in export"),
            }
        }
        grouped
    }

    /// All dataset rows as one flat list, in registry order. Rows are not
    /// deduplicated across datasets.
    pub fn all_items_flat(&self) -> Vec<RawRecord> {
        let mut all = Vec::new();
        for dataset in &self.datasets {
            match self.load_dataset_items(&dataset.id) {
                Ok(mut items) => all.append(&mut items),
                Err(e) => warn!(dataset = %dataset.id, error = %e, "skipping dataset in export"),
            }
        }
        all
    }

    /// Replaces the upload working set wholesale.
    pub fn set_working_set(&mut self, items: Vec<RawRecord>) {
        self.working_set = items;
    }

    /// The rows currently staged between upload and publish.
    pub fn working_set(&self) -> &[RawRecord] {
        &self.working_set
    }

    /// Snapshot of everything `/search` runs over: citizen reports first,
    /// then the official index.
    pub fn searchable_items(&self) -> Vec<FoundItemRecord> {
        self.reports
            .iter()
            .chain(self.official.iter())
            .cloned()
            .collect()
    }

    /// Normalized official items.
    pub fn official_items(&self) -> &[FoundItemRecord] {
        &self.official
    }

    /// Citizen reports recorded this process lifetime.
    pub fn reports(&self) -> &[FoundItemRecord] {
        &self.reports
    }

    /// Path of the backing file for a dataset id, whether or not the
    /// file exists.
    pub fn dataset_path(&self, id: &str) -> PathBuf {
        self.dataset_dir.join(format!("{}.json", id))
    }

    /// Next id for the combined report/official sequence, so official
    /// items continue counting where the citizen reports left off.
    fn next_item_id(&self) -> u64 {
        (self.reports.len() + self.official.len()) as u64 + 1
    }
}

fn has_dataset_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| DATASET_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name(path))
}

/// Modification date of the file, `YYYY-MM-DD`, falling back to today.
fn file_date(path: &Path) -> String {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|t| chrono::DateTime::<Local>::from(t).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| Local::now().format("%Y-%m-%d").to_string())
}

/// Derives a filename-safe slug from a dataset title.
///
/// Lowercases, strips diacritics by NFKD decomposition (characters
/// without an ASCII base are dropped, not transliterated), and collapses
/// every non-alphanumeric run into a single hyphen. Titles that leave
/// nothing usable fall back to [`FALLBACK_SLUG`].
pub fn slugify(title: &str) -> String {
    let ascii: String = title.nfkd().filter(char::is_ascii).collect();

    let mut slug = String::with_capacity(ascii.len());
    for ch in ascii.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
