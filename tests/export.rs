//! Exporter integration tests.
//!
//! The end-to-end scenario requires `tests/fixtures/sample_video.mp4` and is
//! skipped when the fixture is absent.

use std::path::Path;

use filmstrip::{ExportOptions, output_directory_for, sample_frames};

// ── Output directory derivation ──────────────────────────────────

#[test]
fn output_directory_next_to_input() {
    assert_eq!(
        output_directory_for(Path::new("/videos/banana_success.mp4")),
        Path::new("/videos/banana_success_frames"),
    );
}

#[test]
fn output_directory_for_bare_file_name() {
    assert_eq!(
        output_directory_for(Path::new("clip.mkv")),
        Path::new("clip_frames"),
    );
}

#[test]
fn output_directory_strips_only_the_final_extension() {
    assert_eq!(
        output_directory_for(Path::new("/tmp/archive.tar.mp4")),
        Path::new("/tmp/archive.tar_frames"),
    );
}

// ── ExportOptions builder ────────────────────────────────────────

#[test]
fn options_defaults() {
    let options = ExportOptions::new();
    let debug = format!("{options:?}");
    assert!(debug.contains("frame_count: 6"));
    assert!(debug.contains("width_ratio: 1.1"));
}

#[test]
fn options_clamp_zero_frame_count() {
    let options = ExportOptions::new().with_frame_count(0);
    let debug = format!("{options:?}");
    assert!(debug.contains("frame_count: 1"));
}

#[test]
fn options_override_defaults() {
    let options = ExportOptions::new()
        .with_frame_count(12)
        .with_width_ratio(2.0);
    let debug = format!("{options:?}");
    assert!(debug.contains("frame_count: 12"));
    assert!(debug.contains("width_ratio: 2.0"));
}

// ── End-to-end ───────────────────────────────────────────────────

#[test]
fn end_to_end_sample_video() {
    let fixture = "tests/fixtures/sample_video.mp4";
    if !Path::new(fixture).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let video_path = temporary_directory.path().join("sample_video.mp4");
    std::fs::copy(fixture, &video_path).expect("Failed to copy fixture");

    let options = ExportOptions::new().with_frame_count(4).with_width_ratio(1.1);
    let report = sample_frames(&video_path, &options).expect("Export failed");

    let output_directory = temporary_directory.path().join("sample_video_frames");
    assert_eq!(report.plan.output_directory, output_directory);
    assert_eq!(report.plan.indices.len(), 4);
    assert!(!report.saved.is_empty(), "Expected at least frame 0 saved");
    assert!(report.saved.len() <= report.plan.indices.len());

    // Filenames form a dense 1-based sequence in write order.
    for (index, saved) in report.saved.iter().enumerate() {
        assert_eq!(saved.ordinal, index as u64 + 1);
        let expected = output_directory.join(format!("frame_{}.jpg", index + 1));
        assert_eq!(saved.path, expected);
        assert!(expected.exists(), "Missing {}", expected.display());

        let image = image::open(&expected).expect("Failed to read output image");
        // Padding guarantees width ≥ floor(1.1 × height); wide sources
        // already satisfy it.
        assert!(f64::from(image.width()) >= (f64::from(image.height()) * 1.1).floor());
    }

    // The directory holds nothing beyond the reported files.
    let entry_count = std::fs::read_dir(&output_directory)
        .expect("Failed to read output directory")
        .count();
    assert_eq!(entry_count, report.saved.len());
}

#[test]
fn rerun_overwrites_in_place() {
    let fixture = "tests/fixtures/sample_video.mp4";
    if !Path::new(fixture).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let video_path = temporary_directory.path().join("sample_video.mp4");
    std::fs::copy(fixture, &video_path).expect("Failed to copy fixture");

    let first = sample_frames(&video_path, &ExportOptions::new().with_frame_count(3))
        .expect("First export failed");
    // Re-running against an existing, populated directory must not fail.
    let second = sample_frames(&video_path, &ExportOptions::new().with_frame_count(3))
        .expect("Second export failed");

    assert_eq!(first.plan.indices, second.plan.indices);
    assert_eq!(first.saved.len(), second.saved.len());
}
