//! Build and enrich the gathering-log data stores.
//!
//! This crate owns the ETL side: reading the per-profession tables,
//! normalizing them into item records and locale seeds, and the paced
//! enrichment flows that fill in icons, translations and gathering zones
//! from upstream services.

pub mod enrich;
pub mod normalize;
pub mod progress;
pub mod table;

pub use enrich::{
    EnrichError, EnrichOptions, EnrichStats, Outcome, SECONDARY_LANGUAGE, TERTIARY_LANGUAGE,
    enrich_items, enrich_stores, locate_items, locate_stores,
};
pub use normalize::{
    DEFAULT_LEVEL_RANGE, ImportError, ImportReport, Normalized, SeedEntry, SourceReport,
    import_sources, inherit_enrichment, normalize_rows, normalize_sources, seed_locales,
};
pub use progress::{EnrichProgress, LogProgress, SilentProgress};
pub use table::{TableError, read_rows, read_table};
