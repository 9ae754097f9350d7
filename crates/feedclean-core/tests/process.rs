//! Integration tests for the streaming cleanup pass.

use std::fs;
use std::sync::mpsc;

use tempfile::TempDir;

use feedclean_core::{CleanReport, process_feed, process_feed_with_output, spawn_process};

#[test]
fn cleans_first_column_and_counts_changes() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    fs::write(
        &input,
        "\"Acme\"\"\"\tG123\tACME Widget\nNoQuotes\tG124\tPlain\nBad\"Quote\tG125\tStray\n",
    )
    .expect("write feed file");
    let output = dir.path().join("out.txt");

    let report = process_feed_with_output(&input, &output);

    assert_eq!(
        report,
        CleanReport {
            processed: 3,
            cleaned: 2,
        }
    );
    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written, "Acme\"\nNoQuotes\nBadQuote\n");
}

#[test]
fn drops_everything_after_the_first_tab() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    fs::write(&input, "keep\tdrop\tdrop again\n").expect("write feed file");
    let output = dir.path().join("out.txt");

    let report = process_feed_with_output(&input, &output);

    assert_eq!(report.processed, 1);
    assert_eq!(report.cleaned, 0);
    assert_eq!(fs::read_to_string(&output).expect("read output"), "keep\n");
}

#[test]
fn tabless_line_is_cleaned_whole() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    fs::write(&input, "  padded whole line  \n").expect("write feed file");
    let output = dir.path().join("out.txt");

    let report = process_feed_with_output(&input, &output);

    assert_eq!(report.processed, 1);
    assert_eq!(report.cleaned, 1);
    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "padded whole line\n"
    );
}

#[test]
fn crlf_input_is_written_with_plain_newlines() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    fs::write(&input, "a\tx\r\nb\ty\r\n").expect("write feed file");
    let output = dir.path().join("out.txt");

    let report = process_feed_with_output(&input, &output);

    assert_eq!(report.processed, 2);
    assert_eq!(fs::read_to_string(&output).expect("read output"), "a\nb\n");
}

#[test]
fn empty_input_produces_empty_output() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    fs::write(&input, "").expect("write feed file");
    let output = dir.path().join("out.txt");

    let report = process_feed_with_output(&input, &output);

    assert_eq!(report, CleanReport::default());
    assert_eq!(fs::read_to_string(&output).expect("read output"), "");
}

#[test]
fn existing_output_is_overwritten() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    fs::write(&input, "fresh\tdata\n").expect("write feed file");
    let output = dir.path().join("out.txt");
    fs::write(&output, "stale content from an earlier run\n").expect("write stale output");

    process_feed_with_output(&input, &output);

    assert_eq!(fs::read_to_string(&output).expect("read output"), "fresh\n");
}

#[test]
fn unopenable_input_reports_zero_and_writes_nothing() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("does_not_exist.txt");
    let output = dir.path().join("out.txt");

    let report = process_feed_with_output(&input, &output);

    assert_eq!(report, CleanReport::default());
    // Input is opened before the output is created, so no file appears.
    assert!(!output.exists());
}

#[test]
fn uncreatable_output_reports_zero() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    fs::write(&input, "a\tb\n").expect("write feed file");
    let output = dir.path().join("no_such_dir").join("out.txt");

    let report = process_feed_with_output(&input, &output);

    assert_eq!(report, CleanReport::default());
}

#[test]
fn read_failure_mid_stream_keeps_counts_seen_so_far() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    // Line 2 is not valid UTF-8, so the line reader fails after one line.
    fs::write(&input, b"good\tx\n\xff\xfe\nafter\ty\n").expect("write feed file");
    let output = dir.path().join("out.txt");

    let report = process_feed_with_output(&input, &output);

    assert_eq!(
        report,
        CleanReport {
            processed: 1,
            cleaned: 0,
        }
    );
    assert_eq!(fs::read_to_string(&output).expect("read output"), "good\n");
}

#[cfg(unix)]
#[test]
fn directory_input_reports_zero_counts() {
    let dir = TempDir::new().expect("create temp dir");
    let output = dir.path().join("out.txt");

    // A directory opens fine but fails on the first read.
    let report = process_feed_with_output(dir.path(), &output);

    assert_eq!(report, CleanReport::default());
    assert_eq!(fs::read_to_string(&output).expect("read output"), "");
}

#[cfg(target_os = "linux")]
#[test]
fn write_failures_do_not_stop_the_stream() {
    use std::path::Path;

    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("feed.txt");
    let mut contents = String::new();
    for row in 0..2000 {
        contents.push_str(&format!("row {row:04}\tdropped\n"));
    }
    fs::write(&input, &contents).expect("write feed file");

    // Writes to /dev/full fail once the buffer spills; every line must
    // still be counted.
    let report = process_feed_with_output(&input, Path::new("/dev/full"));

    assert_eq!(
        report,
        CleanReport {
            processed: 2000,
            cleaned: 0,
        }
    );
}

#[test]
fn derived_output_lands_in_working_directory() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("wholesale_feed.txt");
    fs::write(&input, "\"Acme\tG1\tT\n").expect("write feed file");

    let report = process_feed(&input);

    assert_eq!(
        report,
        CleanReport {
            processed: 1,
            cleaned: 1,
        }
    );
    let written = fs::read_to_string("cleaned_wholesale_feed.txt").expect("read derived output");
    assert_eq!(written, "Acme\n");
    let _ = fs::remove_file("cleaned_wholesale_feed.txt");
}

#[test]
fn spawned_run_delivers_report_over_channel_once() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("spawned_feed.txt");
    fs::write(&input, "a\"b\tG1\tT\n").expect("write feed file");

    let (sender, receiver) = mpsc::channel();
    let handle = spawn_process(input, sender);
    let report = receiver.recv().expect("report delivered");
    handle.join().expect("worker thread finished");

    assert_eq!(
        report,
        CleanReport {
            processed: 1,
            cleaned: 1,
        }
    );
    // The worker dropped its sender after the single send.
    assert!(receiver.recv().is_err());

    let _ = fs::remove_file("cleaned_spawned_feed.txt");
}
