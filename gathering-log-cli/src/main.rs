//! gathering-log CLI
//!
//! Command-line interface for building the FFXIV gathering log data stores.

mod cli_types;
mod commands;
mod error;
mod progress;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use gathering_log_core::Settings;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Settings plus the store paths after CLI overrides.
pub(crate) struct Context {
    pub settings: Settings,
    pub items: PathBuf,
    pub locales: PathBuf,
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = gathering_log_core::load_settings()?;
    let ctx = Context {
        items: cli.items.unwrap_or_else(|| settings.files.items.clone()),
        locales: cli.locales.unwrap_or_else(|| settings.files.locales.clone()),
        quiet: cli.quiet,
        settings,
    };

    match cli.command {
        Commands::Import { miner, botanist } => commands::import::run_import(&ctx, miner, botanist),
        Commands::Enrich { pacing } => commands::enrich::run_enrich(&ctx, pacing),
        Commands::Locations { pacing } => commands::enrich::run_locations(&ctx, pacing),
        Commands::Status => commands::status::run_status(&ctx),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&ctx),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

/// Install the logger: plain messages at info level, level-prefixed
/// warnings and errors, timestamps when verbose. `RUST_LOG` overrides the
/// level chosen by the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "{} {:<5} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            } else if record.level() == log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
        })
        .init();
}

/// Log an empty line.
pub(crate) fn log_blank() {
    log::info!("");
}
