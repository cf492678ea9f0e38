use std::time::Duration;

use gathering_log_core::StoreError;
use gathering_log_core::settings::UpstreamSettings;
use gathering_log_import::{EnrichError, EnrichOptions, EnrichStats, enrich_stores, locate_stores};
use gathering_log_scraper::{ApiClient, CafeMakerClient, GarlandClient};

use crate::cli_types::PacingArgs;
use crate::progress;
use crate::{CliError, Context};

/// Fill in icons and zh-CN/ja item names.
pub(crate) fn run_enrich(ctx: &Context, pacing: PacingArgs) -> Result<(), CliError> {
    let options = with_overrides(EnrichOptions::from(&ctx.settings.enrich), &pacing);
    let (garland, cafemaker) = connect(&ctx.settings.upstream)?;
    let progress = progress::reporter(ctx.quiet);
    let started = chrono::Local::now();

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;
    let result = rt.block_on(enrich_stores(
        &ctx.items,
        &ctx.locales,
        &garland,
        &cafemaker,
        &options,
        progress.as_ref(),
    ));
    let stats = with_import_hint(result)?;

    super::log_run_header("Enrichment complete", started);
    log_common(&stats);
    log::info!("  Icons:         {:>6}", stats.icons_updated);
    log::info!(
        "  {} names:  {:>6}",
        options.secondary_language,
        stats.secondary_names_updated
    );
    log::info!(
        "  {} names:     {:>6}",
        options.tertiary_language,
        stats.tertiary_names_updated
    );
    Ok(())
}

/// Resolve gathering zones into `locations`.
pub(crate) fn run_locations(ctx: &Context, pacing: PacingArgs) -> Result<(), CliError> {
    let options = with_overrides(EnrichOptions::from(&ctx.settings.locations), &pacing);
    let (garland, cafemaker) = connect(&ctx.settings.upstream)?;
    let progress = progress::reporter(ctx.quiet);
    let started = chrono::Local::now();

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;
    let result = rt.block_on(locate_stores(
        &ctx.items,
        &ctx.locales,
        &garland,
        &garland,
        &cafemaker,
        &options,
        progress.as_ref(),
    ));
    let stats = with_import_hint(result)?;

    super::log_run_header("Location lookup complete", started);
    log_common(&stats);
    log::info!("  Locations:     {:>6}", stats.locations_updated);
    Ok(())
}

fn with_overrides(mut options: EnrichOptions, pacing: &PacingArgs) -> EnrichOptions {
    if pacing.limit.is_some() {
        options.limit = pacing.limit;
    }
    if let Some(every) = pacing.cooldown_every {
        options.cooldown_every = every;
    }
    options
}

fn connect(upstream: &UpstreamSettings) -> Result<(GarlandClient, CafeMakerClient), CliError> {
    let api = ApiClient::new(
        &upstream.user_agent,
        Duration::from_secs(upstream.timeout_secs),
    )?;
    Ok((
        GarlandClient::new(api.clone(), upstream.garland_url.clone()),
        CafeMakerClient::new(api, upstream.cafemaker_url.clone()),
    ))
}

/// Point at `import` when a store does not exist yet.
fn with_import_hint(result: Result<EnrichStats, EnrichError>) -> Result<EnrichStats, CliError> {
    if let Err(EnrichError::Store(StoreError::NotFound(path))) = &result {
        log::warn!("No store found at {}", path.display());
        log::info!("Run 'gathering-log import' first.");
    }
    Ok(result?)
}

fn log_common(stats: &EnrichStats) {
    log::info!("  Processed:     {:>6}", stats.processed);
    log::info!("  Resolved:      {:>6}", stats.resolved);
    log::info!("  Not found:     {:>6}", stats.not_found);
    log::info!("  Skipped:       {:>6}", stats.skipped);
    if stats.errors > 0 {
        log::info!("  Errors:        {:>6}", stats.errors);
    }
}
