use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gathering_log_core::{CANONICAL_LANGUAGE, Namespace, Profession, store};

use crate::{CliError, Context};

/// Summarize the items and locales stores.
pub(crate) fn run_status(ctx: &Context) -> Result<(), CliError> {
    if !ctx.items.exists() {
        log::warn!("No items store found at {}", ctx.items.display());
        log::info!("Run 'gathering-log import' to create one.");
        return Ok(());
    }

    let items = store::load_items(&ctx.items)?;
    let locales = store::load_locales_or_default(&ctx.locales)?;

    log::info!(
        "{}",
        "Gathering Log Status".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Items:   {}", ctx.items.display());
    log::info!("  Locales: {}", ctx.locales.display());
    crate::log_blank();

    log::info!("  {:<10} {:>7} {:>7} {:>10}", "Job", "Items", "Icons", "Locations");
    for &profession in Profession::all() {
        let records: Vec<_> = items.iter().filter(|r| r.profession == profession).collect();
        log::info!(
            "  {:<10} {:>7} {:>7} {:>10}",
            profession.display_name(),
            records.len(),
            records.iter().filter(|r| r.has_icon()).count(),
            records.iter().filter(|r| r.locations.is_some()).count(),
        );
    }
    crate::log_blank();

    log::info!("  {:<10} {:>7} {:>11}", "Language", "Items", "Translated");
    for language in locales.languages() {
        let names = locales.count(language, Namespace::Item);
        let translated = if language == CANONICAL_LANGUAGE {
            "-".to_string()
        } else {
            items
                .iter()
                .filter(|r| locales.is_translated(language, CANONICAL_LANGUAGE, &r.id))
                .count()
                .to_string()
        };
        log::info!("  {:<10} {:>7} {:>11}", language, names, translated);
    }
    Ok(())
}
