use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::{CliError, Context};

/// Show the settings file location and the effective settings.
pub(crate) fn run_config_show(ctx: &Context) -> Result<(), CliError> {
    let path = gathering_log_core::settings_path();

    log::info!(
        "{}",
        "Gathering Log Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("  Items store:   {}", ctx.items.display());
    log::info!("  Locales store: {}", ctx.locales.display());
    crate::log_blank();

    for line in ctx.settings.to_toml_string()?.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", gathering_log_core::settings_path().display());
}
