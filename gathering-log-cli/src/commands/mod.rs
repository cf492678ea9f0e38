pub(crate) mod config;
pub(crate) mod enrich;
pub(crate) mod import;
pub(crate) mod status;

use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Log a bold heading followed by when the run started and how long it took.
pub(crate) fn log_run_header(title: &str, started: DateTime<Local>) {
    let took = Local::now().signed_duration_since(started);
    crate::log_blank();
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  Started {} ({}s)",
        started.format("%Y-%m-%d %H:%M:%S"),
        took.num_seconds(),
    );
}
