//! Core library for cleaning tab-delimited product feeds.
//!
//! Feeds arrive as tab-delimited text whose first column is polluted with
//! spurious double quotes. Two operations make up the pipeline:
//!
//! - [`inspect_feed`] validates a candidate file and extracts header
//!   metadata (GTIN, title, line count) so a caller can decide whether to
//!   clean it. Validation failures come back as typed [`InspectError`]s.
//! - [`process_feed`] streams the file line by line, cleans the first
//!   column with [`clean_field`], writes `cleaned_<name>` into the working
//!   directory, and reports how many lines were read and how many changed.
//!   It is best-effort: failures are logged, never returned.
//!
//! [`spawn_process`] runs the cleaning pass on a background thread and
//! delivers the report over a channel, keeping interactive callers
//! responsive while large feeds stream through.

pub mod cleaner;
pub mod error;
pub mod inspect;
pub mod process;

pub use cleaner::{CleanedField, clean_field};
pub use error::{InspectError, Result};
pub use inspect::{FeedSummary, MIN_HEADER_COLUMNS, inspect_feed};
pub use process::{
    CleanReport, OUTPUT_PREFIX, output_path, process_feed, process_feed_with_output, spawn_process,
};
