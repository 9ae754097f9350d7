//! Feed validation and header metadata extraction.
//!
//! A candidate feed is accepted when its first line carries at least three
//! tab-separated columns; the second and third columns identify the product
//! (GTIN and title). Inspection reads the file twice, once for the header
//! and once to count lines, and never writes anything.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use serde::Serialize;

use crate::error::{InspectError, Result};

/// Minimum number of tab-separated columns required in the header line.
pub const MIN_HEADER_COLUMNS: usize = 3;

/// Header metadata and size of a validated feed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSummary {
    /// GTIN taken verbatim from the second header column.
    pub gtin: String,
    /// Product title taken verbatim from the third header column.
    pub title: String,
    /// Total number of lines in the file, header included.
    pub line_count: usize,
}

/// Validate a feed file and extract its header metadata.
///
/// Fails when the file cannot be opened or read, when it has no lines, or
/// when the first line has fewer than [`MIN_HEADER_COLUMNS`] tab-separated
/// columns. The extracted values are reported as found, without any
/// cleaning applied.
pub fn inspect_feed(path: &Path) -> Result<FeedSummary> {
    let file = File::open(path).map_err(|e| InspectError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let mut first_line = String::new();
    let bytes_read = reader
        .read_line(&mut first_line)
        .map_err(|e| InspectError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
    if bytes_read == 0 {
        return Err(InspectError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let header = first_line.strip_suffix('\n').unwrap_or(&first_line);
    let header = header.strip_suffix('\r').unwrap_or(header);
    let columns: Vec<&str> = header.split('\t').collect();
    if columns.len() < MIN_HEADER_COLUMNS {
        return Err(InspectError::MalformedHeader {
            path: path.to_path_buf(),
            expected: MIN_HEADER_COLUMNS,
            actual: columns.len(),
        });
    }
    let gtin = columns[1].to_string();
    let title = columns[2].to_string();

    // Second pass over the same handle counts every line, header included.
    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| InspectError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
    let mut line_count = 0;
    for line in reader.lines() {
        line.map_err(|e| InspectError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        line_count += 1;
    }

    Ok(FeedSummary {
        gtin,
        title,
        line_count,
    })
}
