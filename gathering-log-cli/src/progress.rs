//! Progress bar for the enrichment commands.

use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gathering_log_import::{EnrichProgress, EnrichStats, LogProgress, Outcome, SilentProgress};

/// Pick a reporter: nothing when quiet, a bar on a terminal, log lines otherwise.
pub(crate) fn reporter(quiet: bool) -> Box<dyn EnrichProgress> {
    if quiet {
        Box::new(SilentProgress)
    } else if std::io::stdout().is_terminal() {
        Box::new(BarProgress::new())
    } else {
        Box::new(LogProgress)
    }
}

/// Renders enrichment progress as a single bar, printing misses above it.
pub(crate) struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub(crate) fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos:>5}/{len:<5} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }
}

impl EnrichProgress for BarProgress {
    fn on_start(&self, flow: &str, pending: usize) {
        self.bar.set_length(pending as u64);
        self.bar.println(format!(
            "{}: {} records to process",
            flow.if_supports_color(Stdout, |t| t.bold()),
            pending,
        ));
    }

    fn on_item(&self, current: usize, _pending: usize, name: &str, outcome: Outcome) {
        self.bar.set_position(current as u64);
        self.bar.set_message(name.to_string());
        match outcome {
            Outcome::Resolved => {}
            Outcome::NotFound => self.bar.println(format!(
                "  {} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                name,
            )),
            Outcome::Failed => self.bar.println(format!(
                "  {} {} (upstream error)",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                name,
            )),
        }
    }

    fn on_complete(&self, _stats: &EnrichStats) {
        self.bar.finish_and_clear();
    }
}
