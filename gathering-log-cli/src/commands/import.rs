use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gathering_log_core::Profession;
use gathering_log_import::import_sources;

use crate::{CliError, Context};

/// Normalize the CSV exports and write both stores.
pub(crate) fn run_import(
    ctx: &Context,
    miner: Option<PathBuf>,
    botanist: Option<PathBuf>,
) -> Result<(), CliError> {
    let started = chrono::Local::now();
    let sources: Vec<(Profession, PathBuf)> = [(Profession::Miner, miner), (Profession::Botanist, botanist)]
        .into_iter()
        .map(|(profession, path)| {
            let path = path.unwrap_or_else(|| ctx.settings.sources.path_for(profession).to_path_buf());
            (profession, path)
        })
        .collect();

    let report = import_sources(&sources, &ctx.items, &ctx.locales)?;

    super::log_run_header("Import complete", started);
    for source in &report.sources {
        match source.records {
            Some(n) => log::info!(
                "  {} {:<9} {:>6} records from {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                source.profession.display_name(),
                n,
                source.path.display(),
            ),
            None => log::info!(
                "  {} {:<9} {} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                source.profession.display_name(),
                "missing".if_supports_color(Stdout, |t| t.red()),
                source.path.display(),
            ),
        }
    }
    log::info!("  Records:          {:>6}", report.records);
    log::info!("  Locale entries:   {:>6} (new)", report.locale_entries_added);
    log::info!("  Kept enrichment:  {:>6}", report.enrichment_inherited);
    log::info!("  Items:   {}", ctx.items.display());
    log::info!("  Locales: {}", ctx.locales.display());
    Ok(())
}
