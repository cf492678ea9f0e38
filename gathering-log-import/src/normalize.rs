//! Normalization of raw gathering-log tables into item records.
//!
//! The exports interleave section-header rows (level ranges such as
//! `"15-20"`) with data rows whose first cell is a checkbox column
//! (`FALSE`/`TRUE`). One forward pass carries the most recent level range
//! onto every data row that follows it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use gathering_log_core::{
    ItemRecord, LocaleStore, Namespace, Profession, StoreError, derive_id, store,
};
use regex::Regex;
use thiserror::Error;

use crate::table::{self, TableError};

/// Level range assumed until the first section header is seen.
pub const DEFAULT_LEVEL_RANGE: &str = "1-5";

static LEVEL_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-\d+").expect("level range pattern is valid"));

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// A locale entry that must exist for the normalized records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub namespace: Namespace,
    pub key: String,
    pub text: String,
}

/// Output of normalizing one or more sources.
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub records: Vec<ItemRecord>,
    pub seeds: Vec<SeedEntry>,
}

impl Normalized {
    fn extend(&mut self, other: Normalized) {
        self.records.extend(other.records);
        self.seeds.extend(other.seeds);
    }
}

/// How a single row is interpreted.
#[derive(Debug, PartialEq, Eq)]
enum RowKind<'a> {
    /// Context row; carries a new level range if its first cell has one.
    SectionHeader { level_range: Option<&'a str> },
    /// Too few cells, or an empty/echoed item name.
    Malformed,
    Data(DataRow<'a>),
}

#[derive(Debug, PartialEq, Eq)]
struct DataRow<'a> {
    item: &'a str,
    region: &'a str,
    area: &'a str,
    location: &'a str,
    time: Option<&'a str>,
}

fn classify_row(cells: &[String]) -> RowKind<'_> {
    let first = cells.first().map(|c| c.trim()).unwrap_or("");

    if cells.len() < 2 || !first.to_uppercase().contains("FALSE") {
        let level_range = Some(first).filter(|f| LEVEL_RANGE.is_match(f));
        return RowKind::SectionHeader { level_range };
    }

    if cells.len() < 5 {
        return RowKind::Malformed;
    }

    let item = cells[1].trim();
    if item.is_empty() || item.to_lowercase() == "item" {
        return RowKind::Malformed;
    }

    RowKind::Data(DataRow {
        item,
        region: cells[2].trim(),
        area: cells[3].trim(),
        location: cells[4].trim(),
        time: cells.get(5).map(|t| t.trim()).filter(|t| !t.is_empty()),
    })
}

/// Normalize the rows of one source (header row already removed).
///
/// Produces one record per data row, in order, plus the locale entries the
/// records refer to. Section headers and malformed rows produce nothing.
pub fn normalize_rows<I, R>(profession: Profession, rows: I) -> Normalized
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let (_, normalized) = rows.into_iter().fold(
        (DEFAULT_LEVEL_RANGE.to_string(), Normalized::default()),
        |(mut level_range, mut out), row| {
            match classify_row(row.as_ref()) {
                RowKind::SectionHeader { level_range: Some(level) } => {
                    level_range = level.to_string();
                }
                RowKind::SectionHeader { level_range: None } | RowKind::Malformed => {}
                RowKind::Data(data) => emit(profession, &level_range, &data, &mut out),
            }
            (level_range, out)
        },
    );
    normalized
}

fn emit(profession: Profession, level_range: &str, row: &DataRow<'_>, out: &mut Normalized) {
    let id = derive_id(row.item);
    let region_key = derive_id(row.region);
    let area_key = derive_id(row.area);
    let location_key = derive_id(row.location);

    let seeds = [
        (Namespace::Item, &id, row.item),
        (Namespace::Region, &region_key, row.region),
        (Namespace::Area, &area_key, row.area),
        (Namespace::Location, &location_key, row.location),
    ];
    for (namespace, key, text) in seeds {
        if !key.is_empty() {
            out.seeds.push(SeedEntry {
                namespace,
                key: key.clone(),
                text: text.to_string(),
            });
        }
    }

    out.records.push(ItemRecord {
        id,
        profession,
        level_range: level_range.to_string(),
        time_window: row.time.map(str::to_string),
        region_key,
        area_key,
        location_key,
        icon: None,
        locations: None,
    });
}

/// `ensure` every seed into every language currently in the store.
///
/// Returns the number of entries actually inserted.
pub fn seed_locales(locales: &mut LocaleStore, seeds: &[SeedEntry]) -> usize {
    let languages: Vec<String> = locales.languages().map(str::to_string).collect();
    let mut inserted = 0;
    for language in &languages {
        for seed in seeds {
            if locales.ensure(language, seed.namespace, &seed.key, &seed.text) {
                inserted += 1;
            }
        }
    }
    inserted
}

/// Carry `icon` and `locations` over from previously stored records with the
/// same profession and id. Returns how many records inherited something.
pub fn inherit_enrichment(records: &mut [ItemRecord], previous: &[ItemRecord]) -> usize {
    let by_key: HashMap<(Profession, &str), &ItemRecord> = previous
        .iter()
        .map(|r| ((r.profession, r.id.as_str()), r))
        .collect();

    let mut inherited = 0;
    for record in records.iter_mut() {
        if let Some(old) = by_key.get(&(record.profession, record.id.as_str())) {
            let before = (record.icon.is_some(), record.locations.is_some());
            record.inherit_enrichment(old);
            if before != (record.icon.is_some(), record.locations.is_some()) {
                inherited += 1;
            }
        }
    }
    inherited
}

/// What happened to one raw source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub profession: Profession,
    pub path: PathBuf,
    /// Records produced; `None` if the source was unavailable.
    pub records: Option<usize>,
}

/// Normalize every source in order.
///
/// A source that cannot be read is logged and contributes nothing; the
/// others are still processed.
pub fn normalize_sources(sources: &[(Profession, PathBuf)]) -> (Normalized, Vec<SourceReport>) {
    let mut all = Normalized::default();
    let mut reports = Vec::with_capacity(sources.len());

    for (profession, path) in sources {
        let records = match table::read_table(path) {
            Ok(rows) => {
                let normalized = normalize_rows(*profession, rows);
                let count = normalized.records.len();
                log::debug!("{}: {} records from {}", profession, count, path.display());
                all.extend(normalized);
                Some(count)
            }
            Err(TableError::SourceUnavailable(p)) => {
                log::error!("Source file not found: {}", p.display());
                None
            }
            Err(e) => {
                log::error!("{e}");
                None
            }
        };
        reports.push(SourceReport {
            profession: *profession,
            path: path.clone(),
            records,
        });
    }

    (all, reports)
}

/// Summary of an import run.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub sources: Vec<SourceReport>,
    pub records: usize,
    pub locale_entries_added: usize,
    pub enrichment_inherited: usize,
}

/// Normalize `sources` and write the items and locales stores.
///
/// Existing stores are read first: enrichment output on matching records is
/// kept and existing translations are never overwritten. Missing default
/// languages are added before seeding. Both files are written only after
/// every source has been processed.
pub fn import_sources(
    sources: &[(Profession, PathBuf)],
    items_path: &Path,
    locales_path: &Path,
) -> Result<ImportReport, ImportError> {
    let previous = store::load_items_or_empty(items_path)?;
    let mut locales = store::load_locales_or_default(locales_path)?;

    let (mut normalized, source_reports) = normalize_sources(sources);
    let enrichment_inherited = inherit_enrichment(&mut normalized.records, &previous);
    locales.ensure_default_languages();
    let locale_entries_added = seed_locales(&mut locales, &normalized.seeds);

    store::save_items(items_path, &normalized.records)?;
    store::save_locales(locales_path, &locales)?;

    Ok(ImportReport {
        sources: source_reports,
        records: normalized.records.len(),
        locale_entries_added,
        enrichment_inherited,
    })
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
