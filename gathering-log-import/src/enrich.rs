//! Enrich stored item records from upstream game-data services.
//!
//! Two flows share one driver:
//!
//! - **Icons** fills in `icon` and the secondary/tertiary item names for
//!   records that are missing any of them, and leaves finished records alone.
//! - **Locations** resolves the zones an item is gathered in to place names
//!   and stores them as `locations`. Every named record is visited each run.
//!
//! Requests are strictly sequential. The driver sleeps after every upstream
//! request and takes a longer cooldown every N processed records. A failed
//! lookup only skips its record; the only fatal error is failing to load or
//! save the stores.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;

use gathering_log_core::settings::{EnrichSettings, LocationSettings};
use gathering_log_core::{CANONICAL_LANGUAGE, ItemRecord, LocaleStore, Namespace, StoreError, store};
use gathering_log_scraper::{
    ItemDetails, NameSearch, PlaceNames, ScrapeError, ZoneData, resolve_id,
};
use thiserror::Error;
use tokio::time::{Duration, sleep};

use crate::progress::EnrichProgress;

/// Language that receives the detail source's secondary item names.
pub const SECONDARY_LANGUAGE: &str = "zh-CN";

/// Language that receives the detail source's tertiary item names.
pub const TERTIARY_LANGUAGE: &str = "ja";

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Options for an enrichment run.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// Maximum records to process (records skipped as already done don't count).
    pub limit: Option<usize>,
    /// Pause after every upstream request.
    pub request_delay: Duration,
    /// Take a cooldown after every this many processed records (0 disables it).
    pub cooldown_every: usize,
    pub cooldown: Duration,
    pub canonical_language: String,
    pub secondary_language: String,
    pub tertiary_language: String,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self::from(&EnrichSettings::default())
    }
}

impl EnrichOptions {
    /// Defaults for the locations flow.
    pub fn locations() -> Self {
        Self::from(&LocationSettings::default())
    }

    fn paced(limit: Option<usize>, delay_ms: u64, cooldown_every: usize, cooldown_secs: u64) -> Self {
        Self {
            limit,
            request_delay: Duration::from_millis(delay_ms),
            cooldown_every,
            cooldown: Duration::from_secs(cooldown_secs),
            canonical_language: CANONICAL_LANGUAGE.to_string(),
            secondary_language: SECONDARY_LANGUAGE.to_string(),
            tertiary_language: TERTIARY_LANGUAGE.to_string(),
        }
    }
}

impl From<&EnrichSettings> for EnrichOptions {
    fn from(s: &EnrichSettings) -> Self {
        Self::paced(s.limit, s.request_delay_ms, s.cooldown_every, s.cooldown_secs)
    }
}

impl From<&LocationSettings> for EnrichOptions {
    fn from(s: &LocationSettings) -> Self {
        Self::paced(s.limit, s.request_delay_ms, s.cooldown_every, s.cooldown_secs)
    }
}

/// Statistics from an enrichment run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnrichStats {
    pub processed: usize,
    /// Records that needed no work.
    pub skipped: usize,
    pub resolved: usize,
    pub not_found: usize,
    pub errors: usize,
    pub icons_updated: usize,
    pub secondary_names_updated: usize,
    pub tertiary_names_updated: usize,
    pub locations_updated: usize,
}

/// Result of processing one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resolved,
    /// Upstream confirmed there is nothing to use for this record.
    NotFound,
    /// Upstream could not be reached or answered with an error.
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resolved => "resolved",
            Self::NotFound => "not found",
            Self::Failed => "failed",
        })
    }
}

/// Sleeps between requests and between batches of records.
struct Pacer {
    request_delay: Duration,
    cooldown_every: usize,
    cooldown: Duration,
}

impl Pacer {
    fn new(options: &EnrichOptions) -> Self {
        Self {
            request_delay: options.request_delay,
            cooldown_every: options.cooldown_every,
            cooldown: options.cooldown,
        }
    }

    /// Await `request`, then pause for the request delay.
    async fn request<T>(&self, request: impl Future<Output = T>) -> T {
        let out = request.await;
        if !self.request_delay.is_zero() {
            sleep(self.request_delay).await;
        }
        out
    }

    async fn after_record(&self, processed: usize) {
        if self.cooldown_every == 0 || self.cooldown.is_zero() {
            return;
        }
        if processed.is_multiple_of(self.cooldown_every) {
            log::info!(
                "Cooling down for {}s after {} records",
                self.cooldown.as_secs(),
                processed
            );
            sleep(self.cooldown).await;
        }
    }
}

/// Log a failed lookup and turn it into the record's outcome.
fn lookup_failed(name: &str, what: &str, err: ScrapeError) -> Outcome {
    if err.is_not_found() {
        log::info!("{}: {} not found", name, what);
        Outcome::NotFound
    } else {
        log::warn!("{}: {} failed: {}", name, what, err);
        Outcome::Failed
    }
}

fn canonical_name(locales: &LocaleStore, options: &EnrichOptions, id: &str) -> Option<String> {
    locales
        .get(&options.canonical_language, Namespace::Item, id)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

/// One enrichment flow driven by [`drive`].
trait Flow {
    const NAME: &'static str;

    fn needs_work(&self, record: &ItemRecord, locales: &LocaleStore) -> bool;

    async fn process(
        &mut self,
        record: &mut ItemRecord,
        locales: &mut LocaleStore,
        pacer: &Pacer,
        stats: &mut EnrichStats,
    ) -> Outcome;
}

async fn drive<F: Flow>(
    flow: &mut F,
    records: &mut [ItemRecord],
    locales: &mut LocaleStore,
    options: &EnrichOptions,
    progress: &dyn EnrichProgress,
) -> EnrichStats {
    let pacer = Pacer::new(options);
    let mut stats = EnrichStats::default();

    let mut pending = records.iter().filter(|r| flow.needs_work(r, locales)).count();
    if let Some(limit) = options.limit {
        pending = pending.min(limit);
    }
    progress.on_start(F::NAME, pending);

    for record in records.iter_mut() {
        if options.limit.is_some_and(|limit| stats.processed >= limit) {
            break;
        }
        if !flow.needs_work(record, locales) {
            stats.skipped += 1;
            continue;
        }

        let label = canonical_name(locales, options, &record.id).unwrap_or_else(|| record.id.clone());
        log::debug!("Processing {} ({})", label, record.id);

        let outcome = flow.process(record, locales, &pacer, &mut stats).await;
        stats.processed += 1;
        match outcome {
            Outcome::Resolved => stats.resolved += 1,
            Outcome::NotFound => stats.not_found += 1,
            Outcome::Failed => stats.errors += 1,
        }
        progress.on_item(stats.processed, pending, &label, outcome);

        pacer.after_record(stats.processed).await;
    }

    progress.on_complete(&stats);
    stats
}

/// Icon and translated-name flow.
struct IconFlow<'a, S, D> {
    search: &'a S,
    details: &'a D,
    options: &'a EnrichOptions,
}

impl<S: NameSearch, D: ItemDetails> Flow for IconFlow<'_, S, D> {
    const NAME: &'static str = "Icons and translations";

    fn needs_work(&self, record: &ItemRecord, locales: &LocaleStore) -> bool {
        let canonical = &self.options.canonical_language;
        !record.has_icon()
            || !locales.is_translated(&self.options.secondary_language, canonical, &record.id)
            || !locales.is_translated(&self.options.tertiary_language, canonical, &record.id)
    }

    async fn process(
        &mut self,
        record: &mut ItemRecord,
        locales: &mut LocaleStore,
        pacer: &Pacer,
        stats: &mut EnrichStats,
    ) -> Outcome {
        let Some(name) = canonical_name(locales, self.options, &record.id) else {
            log::info!("{}: no {} name to search for", record.id, self.options.canonical_language);
            return Outcome::NotFound;
        };

        let external_id = match pacer.request(resolve_id(self.search, &name)).await {
            Ok(id) => id,
            Err(e) => return lookup_failed(&name, "item search", e),
        };
        let detail = match pacer.request(self.details.item_detail(external_id)).await {
            Ok(detail) => detail,
            Err(e) => return lookup_failed(&name, "item detail", e),
        };

        if let Some(icon) = detail.icon {
            let url = format!("{}{}", self.details.base_url(), icon);
            if record.icon.as_deref() != Some(url.as_str()) {
                log::debug!("{}: icon {}", name, url);
                record.icon = Some(url);
                stats.icons_updated += 1;
            }
        }

        let names = [
            (&self.options.secondary_language, detail.secondary_name, &mut stats.secondary_names_updated),
            (&self.options.tertiary_language, detail.tertiary_name, &mut stats.tertiary_names_updated),
        ];
        for (language, translated, counter) in names {
            if let Some(text) = translated {
                if locales.set(language, Namespace::Item, &record.id, &text) {
                    *counter += 1;
                }
            }
        }

        Outcome::Resolved
    }
}

/// Gathering-zone flow.
struct LocationFlow<'a, S, Z, P> {
    search: &'a S,
    zones: &'a Z,
    places: &'a P,
    options: &'a EnrichOptions,
    /// Place names already looked up this run, by zone id.
    place_cache: HashMap<u32, Option<String>>,
}

impl<S, Z, P: PlaceNames> LocationFlow<'_, S, Z, P> {
    async fn place_name(&mut self, zone_id: u32, pacer: &Pacer) -> Option<String> {
        if let Some(cached) = self.place_cache.get(&zone_id) {
            return cached.clone();
        }
        let name = match pacer.request(self.places.place_name(zone_id)).await {
            Ok(place) => place.preferred().map(str::to_string),
            Err(ScrapeError::NotFound) => None,
            Err(e) => {
                log::warn!("Place name for zone {} failed: {}", zone_id, e);
                return None;
            }
        };
        self.place_cache.insert(zone_id, name.clone());
        name
    }
}

impl<S: NameSearch, Z: ZoneData, P: PlaceNames> Flow for LocationFlow<'_, S, Z, P> {
    const NAME: &'static str = "Gathering locations";

    fn needs_work(&self, record: &ItemRecord, locales: &LocaleStore) -> bool {
        canonical_name(locales, self.options, &record.id).is_some()
    }

    async fn process(
        &mut self,
        record: &mut ItemRecord,
        locales: &mut LocaleStore,
        pacer: &Pacer,
        stats: &mut EnrichStats,
    ) -> Outcome {
        let Some(name) = canonical_name(locales, self.options, &record.id) else {
            return Outcome::NotFound;
        };

        let external_id = match pacer.request(resolve_id(self.search, &name)).await {
            Ok(id) => id,
            Err(e) => return lookup_failed(&name, "item search", e),
        };
        let partials = match pacer.request(self.zones.node_partials(external_id)).await {
            Ok(partials) => partials,
            Err(e) => return lookup_failed(&name, "zone data", e),
        };

        let zone_ids: BTreeSet<u32> = partials
            .iter()
            .filter(|p| p.is_node())
            .filter_map(|p| p.zone_id)
            .collect();

        let mut places = Vec::with_capacity(zone_ids.len());
        for zone_id in zone_ids {
            if let Some(place) = self.place_name(zone_id, pacer).await {
                places.push(place);
            }
        }

        if places.is_empty() {
            log::info!("{}: no zones found", name);
            return Outcome::NotFound;
        }

        places.sort();
        log::debug!("{}: {}", name, places.join(", "));
        if record.locations.as_ref() != Some(&places) {
            record.locations = Some(places);
            stats.locations_updated += 1;
        }
        Outcome::Resolved
    }
}

/// Fill in icons and secondary/tertiary item names.
///
/// The secondary language is added to `locales` first if it is missing.
/// Records that already have an icon and real translations in both languages
/// are skipped without any upstream request.
pub async fn enrich_items<S, D>(
    records: &mut [ItemRecord],
    locales: &mut LocaleStore,
    search: &S,
    details: &D,
    options: &EnrichOptions,
    progress: &dyn EnrichProgress,
) -> EnrichStats
where
    S: NameSearch,
    D: ItemDetails,
{
    if locales.add_language(&options.secondary_language) {
        log::info!("Added language {}", options.secondary_language);
    }
    let mut flow = IconFlow {
        search,
        details,
        options,
    };
    drive(&mut flow, records, locales, options, progress).await
}

/// Resolve gathering zones to place names and store them as `locations`.
///
/// A record whose zones all fail to resolve keeps its previous `locations`.
pub async fn locate_items<S, Z, P>(
    records: &mut [ItemRecord],
    locales: &mut LocaleStore,
    search: &S,
    zones: &Z,
    places: &P,
    options: &EnrichOptions,
    progress: &dyn EnrichProgress,
) -> EnrichStats
where
    S: NameSearch,
    Z: ZoneData,
    P: PlaceNames,
{
    let mut flow = LocationFlow {
        search,
        zones,
        places,
        options,
        place_cache: HashMap::new(),
    };
    drive(&mut flow, records, locales, options, progress).await
}

/// Load both stores, run [`enrich_items`], and save both stores once.
pub async fn enrich_stores<S, D>(
    items_path: &Path,
    locales_path: &Path,
    search: &S,
    details: &D,
    options: &EnrichOptions,
    progress: &dyn EnrichProgress,
) -> Result<EnrichStats, EnrichError>
where
    S: NameSearch,
    D: ItemDetails,
{
    let mut records = store::load_items(items_path)?;
    let mut locales = store::load_locales(locales_path)?;

    let stats = enrich_items(&mut records, &mut locales, search, details, options, progress).await;

    store::save_items(items_path, &records)?;
    store::save_locales(locales_path, &locales)?;
    Ok(stats)
}

/// Load both stores, run [`locate_items`], and save both stores once.
pub async fn locate_stores<S, Z, P>(
    items_path: &Path,
    locales_path: &Path,
    search: &S,
    zones: &Z,
    places: &P,
    options: &EnrichOptions,
    progress: &dyn EnrichProgress,
) -> Result<EnrichStats, EnrichError>
where
    S: NameSearch,
    Z: ZoneData,
    P: PlaceNames,
{
    let mut records = store::load_items(items_path)?;
    let mut locales = store::load_locales(locales_path)?;

    let stats = locate_items(&mut records, &mut locales, search, zones, places, options, progress).await;

    store::save_items(items_path, &records)?;
    store::save_locales(locales_path, &locales)?;
    Ok(stats)
}

#[cfg(test)]
#[path = "tests/enrich_tests.rs"]
mod tests;
