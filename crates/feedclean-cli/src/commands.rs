//! Command execution: wiring between the CLI surface and the core pipeline.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, info_span};

use feedclean_core::{CleanReport, FeedSummary, inspect_feed, output_path, spawn_process};

use crate::cli::{CleanArgs, InspectArgs};
use crate::summary::{print_clean_outcome, print_feed_summary};

/// Everything a `clean` run produced, for table or JSON rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CleanOutcome {
    /// Header metadata gathered by the validation gate.
    pub summary: FeedSummary,
    /// Counts reported by the cleaning pass.
    pub report: CleanReport,
    /// Where the cleaned copy was written.
    pub output: PathBuf,
    /// Wall-clock duration of the cleaning pass.
    pub elapsed_ms: u64,
}

/// Execute the `inspect` command: validate the feed and show its metadata.
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let summary = inspect_feed(&args.feed)?;
    if args.json {
        let rendered =
            serde_json::to_string_pretty(&summary).context("serializing feed summary")?;
        println!("{rendered}");
    } else {
        print_feed_summary(&args.feed, &summary);
    }
    Ok(())
}

/// Execute the `clean` command: validate, then run the cleaning pass on a
/// background thread while the interactive thread shows a spinner.
pub fn run_clean(args: &CleanArgs) -> Result<()> {
    let span = info_span!("clean", feed = %args.feed.display());
    let _guard = span.enter();

    // Validation gates the cleaning pass; a malformed feed never reaches it.
    let summary = inspect_feed(&args.feed)?;

    let start = Instant::now();
    let spinner = progress_spinner(args.no_progress);
    let (sender, receiver) = mpsc::channel();
    let handle = spawn_process(args.feed.clone(), sender);
    let report = receiver
        .recv()
        .context("cleaning thread exited without reporting")?;
    let _ = handle.join();
    spinner.finish_and_clear();

    let outcome = CleanOutcome {
        summary,
        report,
        output: output_path(&args.feed),
        elapsed_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
    };
    info!(
        processed = outcome.report.processed,
        cleaned = outcome.report.cleaned,
        "clean finished"
    );
    if args.json {
        let rendered =
            serde_json::to_string_pretty(&outcome).context("serializing clean outcome")?;
        println!("{rendered}");
    } else {
        print_clean_outcome(&outcome);
    }
    Ok(())
}

fn progress_spinner(disabled: bool) -> ProgressBar {
    if disabled {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} cleaning... {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
