//! Resolver capabilities consumed by the enrichment pipeline.
//!
//! Each upstream lookup is its own trait so a flow only asks for what it
//! uses, and tests can stand in a stub for any one of them. Every call
//! returns `Result<_, ScrapeError>`; callers tell a confirmed miss
//! ([`ScrapeError::NotFound`]) apart from transport trouble by matching on
//! the error.

use std::future::Future;

use crate::error::ScrapeError;

/// One hit from a name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub external_id: u32,
    pub display_name: String,
}

/// Icon and translated names for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDetail {
    /// Icon path relative to the detail source's base URL (e.g. `/i/021000/021203.png`).
    pub icon: Option<String>,
    pub secondary_name: Option<String>,
    pub tertiary_name: Option<String>,
}

/// One entry from an item's gathering-source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePartial {
    /// Partial kind; only `"node"` entries carry gathering zones.
    pub kind: String,
    pub zone_id: Option<u32>,
}

impl NodePartial {
    pub fn is_node(&self) -> bool {
        self.kind == "node"
    }
}

/// Names of one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceName {
    pub name: Option<String>,
    pub secondary_name: Option<String>,
}

impl PlaceName {
    /// Secondary-language name if present, else the default name.
    pub fn preferred(&self) -> Option<&str> {
        non_empty(self.secondary_name.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }
}

/// Resolve a display name to upstream item ids.
pub trait NameSearch {
    fn search(&self, text: &str) -> impl Future<Output = Result<Vec<SearchHit>, ScrapeError>>;
}

/// Fetch icon and translations for an upstream item id.
pub trait ItemDetails {
    /// Base URL that relative icon paths are resolved against.
    fn base_url(&self) -> &str;

    fn item_detail(&self, external_id: u32) -> impl Future<Output = Result<ItemDetail, ScrapeError>>;
}

/// Fetch where an upstream item can be gathered.
pub trait ZoneData {
    fn node_partials(
        &self,
        external_id: u32,
    ) -> impl Future<Output = Result<Vec<NodePartial>, ScrapeError>>;
}

/// Resolve a zone id to its place names.
pub trait PlaceNames {
    fn place_name(&self, zone_id: u32) -> impl Future<Output = Result<PlaceName, ScrapeError>>;
}

/// Pick the upstream id for `name` from search hits.
///
/// Prefers a case-insensitive exact name match, otherwise the first hit.
/// Returns `None` only when there are no hits.
pub fn pick_match(hits: &[SearchHit], name: &str) -> Option<u32> {
    let wanted = name.to_lowercase();
    hits.iter()
        .find(|hit| hit.display_name.to_lowercase() == wanted)
        .or_else(|| hits.first())
        .map(|hit| hit.external_id)
}

/// Search for `name` and pick the best hit.
///
/// An empty result is reported as [`ScrapeError::NotFound`].
pub async fn resolve_id<S: NameSearch>(search: &S, name: &str) -> Result<u32, ScrapeError> {
    let hits = search.search(name).await?;
    let id = pick_match(&hits, name).ok_or(ScrapeError::NotFound)?;
    log::debug!("Resolved \"{}\" to upstream id {} ({} hits)", name, id, hits.len());
    Ok(id)
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "tests/lookup_tests.rs"]
mod tests;
