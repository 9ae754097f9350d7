//! Streaming first-column cleanup.
//!
//! The cleaning pass is best-effort by contract: callers always get a final
//! count report, never an error. Failures are logged and degrade the counts
//! instead, so a run that could not start reports zero lines and a run that
//! died mid-stream reports the lines it got through.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::cleaner::clean_field;

/// Prefix prepended to the input file name to derive the output file name.
pub const OUTPUT_PREFIX: &str = "cleaned";

/// Final counts for one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Lines read from the input file.
    pub processed: usize,
    /// Lines whose first column changed during cleanup.
    pub cleaned: usize,
}

/// Derive the output path for an input feed.
///
/// Returns `cleaned_<file name>` as a relative path, so the output lands in
/// the process's current working directory rather than next to the input.
pub fn output_path(input: &Path) -> PathBuf {
    let base = input.file_name().map(OsStr::to_string_lossy).unwrap_or_default();
    PathBuf::from(format!("{OUTPUT_PREFIX}_{base}"))
}

/// Clean a feed into an explicit output path.
///
/// Streams the input line by line, keeps only the first tab-separated
/// column of each line, cleans it, and writes one cleaned value per output
/// line. An existing file at `output` is overwritten.
///
/// Open and create failures return a zeroed report. A read failure stops
/// the stream with the counts gathered so far. A write failure is logged
/// and the stream continues, so the output may have fewer lines than the
/// report says were processed. The report is returned only after the output
/// has been flushed and both file handles released.
pub fn process_feed_with_output(input: &Path, output: &Path) -> CleanReport {
    let mut report = CleanReport::default();

    let in_file = match File::open(input) {
        Ok(file) => file,
        Err(error) => {
            error!(path = %input.display(), %error, "failed to open feed for cleaning");
            return report;
        }
    };
    let out_file = match File::create(output) {
        Ok(file) => file,
        Err(error) => {
            error!(path = %output.display(), %error, "failed to create cleaned output");
            return report;
        }
    };
    debug!(input = %input.display(), output = %output.display(), "starting feed cleanup");

    let reader = BufReader::new(in_file);
    let mut writer = BufWriter::new(out_file);

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                error!(
                    path = %input.display(),
                    line = report.processed + 1,
                    %error,
                    "read failed mid-feed, stopping"
                );
                break;
            }
        };
        report.processed += 1;

        // Everything after the first tab is dropped; only the cleaned
        // first column reaches the output.
        let first = match line.split_once('\t') {
            Some((first, _)) => first,
            None => line.as_str(),
        };
        let cleaned = clean_field(first);
        if cleaned.changed {
            report.cleaned += 1;
        }

        if let Err(error) = writeln!(writer, "{}", cleaned.value) {
            warn!(
                path = %output.display(),
                line = report.processed,
                %error,
                "write failed, line dropped from output"
            );
        }
    }

    if let Err(error) = writer.flush() {
        error!(path = %output.display(), %error, "failed to flush cleaned output");
    }
    info!(
        input = %input.display(),
        output = %output.display(),
        processed = report.processed,
        cleaned = report.cleaned,
        "feed cleanup finished"
    );
    report
}

/// Clean a feed, writing `cleaned_<file name>` into the working directory.
///
/// Best-effort wrapper around [`process_feed_with_output`] using the
/// derived [`output_path`].
pub fn process_feed(input: &Path) -> CleanReport {
    process_feed_with_output(input, &output_path(input))
}

/// Run [`process_feed`] on a background thread.
///
/// The report is sent over `sender` exactly once, after the run has
/// finished and its file handles are released. A disconnected receiver is
/// ignored, so the worker never panics on delivery.
pub fn spawn_process(input: PathBuf, sender: Sender<CleanReport>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let report = process_feed(&input);
        let _ = sender.send(report);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_file_name_only() {
        let path = output_path(Path::new("/data/feeds/wholesale.txt"));
        assert_eq!(path, PathBuf::from("cleaned_wholesale.txt"));
    }

    #[test]
    fn output_path_is_relative_for_relative_input() {
        let path = output_path(Path::new("feed.txt"));
        assert_eq!(path, PathBuf::from("cleaned_feed.txt"));
    }
}
