//! Enrichment progress reporting.

use crate::enrich::{EnrichStats, Outcome};

/// Trait for receiving enrichment progress updates.
pub trait EnrichProgress {
    /// Called once before the first record, with the number of records that
    /// will be processed (already bounded by the cap).
    fn on_start(&self, flow: &str, pending: usize);

    /// Called after each processed record.
    fn on_item(&self, current: usize, pending: usize, name: &str, outcome: Outcome);

    /// Called when the run is complete, before anything is saved.
    fn on_complete(&self, stats: &EnrichStats);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl EnrichProgress for SilentProgress {
    fn on_start(&self, _flow: &str, _pending: usize) {}
    fn on_item(&self, _current: usize, _pending: usize, _name: &str, _outcome: Outcome) {}
    fn on_complete(&self, _stats: &EnrichStats) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl EnrichProgress for LogProgress {
    fn on_start(&self, flow: &str, pending: usize) {
        log::info!("{}: {} records to process", flow, pending);
    }

    fn on_item(&self, current: usize, pending: usize, name: &str, outcome: Outcome) {
        if current.is_multiple_of(50) || current == pending || outcome != Outcome::Resolved {
            log::info!("  [{}/{}] {} ({})", current, pending, name, outcome);
        }
    }

    fn on_complete(&self, stats: &EnrichStats) {
        log::info!(
            "Processed {} ({} resolved, {} not found, {} errors)",
            stats.processed,
            stats.resolved,
            stats.not_found,
            stats.errors
        );
    }
}
