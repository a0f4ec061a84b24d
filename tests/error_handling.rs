//! Error handling tests.
//!
//! The unopenable source is the pipeline's only explicit failure; these
//! tests verify the error carries the offending path and that the output
//! directory, created before the open attempt, is left behind empty.

use filmstrip::{ExportOptions, FilmstripError, VideoSource, sample_frames};

#[test]
fn open_nonexistent_file() {
    let result = VideoSource::open("this_file_does_not_exist.mp4");
    assert!(result.is_err());

    let error_message = result.unwrap_err().to_string();
    assert!(
        error_message.contains("Failed to open video file"),
        "Error message should mention file open failure: {error_message}",
    );
}

#[test]
fn open_invalid_file() {
    // Create a temporary file with garbage content.
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let invalid_file_path = temporary_directory.path().join("invalid.mp4");
    std::fs::write(&invalid_file_path, b"this is not a video file")
        .expect("Failed to write invalid file");

    let result = VideoSource::open(&invalid_file_path);
    assert!(result.is_err(), "Expected error for garbage input");
}

#[test]
fn export_failure_leaves_empty_output_directory() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let video_path = temporary_directory.path().join("missing.mp4");

    let result = sample_frames(&video_path, &ExportOptions::new());
    assert!(matches!(result, Err(FilmstripError::FileOpen { .. })));

    // Directory creation precedes the open attempt.
    let output_directory = temporary_directory.path().join("missing_frames");
    assert!(output_directory.is_dir());

    let entry_count = std::fs::read_dir(&output_directory)
        .expect("Failed to read output directory")
        .count();
    assert_eq!(entry_count, 0, "Expected no image files after a failed open");
}

#[test]
fn export_failure_names_the_path() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let video_path = temporary_directory.path().join("missing.mp4");

    let error = sample_frames(&video_path, &ExportOptions::new()).unwrap_err();
    assert!(
        error.to_string().contains("missing.mp4"),
        "Error should carry the offending path: {error}",
    );
}
