//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gathering-log")]
#[command(about = "Build and enrich the FFXIV gathering log data", long_about = None)]
pub(crate) struct Cli {
    /// Items store (overrides [files] items in settings.toml)
    #[arg(long, global = true)]
    pub items: Option<PathBuf>,

    /// Locales store (overrides [files] locales in settings.toml)
    #[arg(long, global = true)]
    pub locales: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Pacing overrides shared by the enrichment commands.
#[derive(Args, Clone)]
pub(crate) struct PacingArgs {
    /// Maximum number of records to process
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Pause for the cooldown after this many processed records (0 disables it)
    #[arg(long)]
    pub cooldown_every: Option<usize>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Normalize the raw CSV exports into the items and locales stores
    Import {
        /// Miner export (defaults to [sources] miner)
        #[arg(long)]
        miner: Option<PathBuf>,

        /// Botanist export (defaults to [sources] botanist)
        #[arg(long)]
        botanist: Option<PathBuf>,
    },

    /// Fill in item icons and zh-CN/ja names from Garland Tools and CafeMaker
    Enrich {
        #[command(flatten)]
        pacing: PacingArgs,
    },

    /// Resolve the zones each item is gathered in
    Locations {
        #[command(flatten)]
        pacing: PacingArgs,
    },

    /// Show what the stores currently hold
    Status,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
