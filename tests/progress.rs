//! Progress callback tests.
//!
//! Tests require `tests/fixtures/sample_video.mp4` and are skipped when the
//! fixture is absent.

use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use filmstrip::{ExportOptions, ProgressCallback, SamplePlan, SavedFrame, sample_frames};

#[derive(Default)]
struct CountingProgress {
    plans: AtomicU64,
    saves: AtomicU64,
}

impl ProgressCallback for CountingProgress {
    fn on_plan(&self, plan: &SamplePlan) {
        assert!(!plan.indices.is_empty());
        self.plans.fetch_add(1, Ordering::SeqCst);
    }

    fn on_frame_saved(&self, saved: &SavedFrame) {
        assert!(saved.ordinal >= 1);
        assert!(saved.path.exists(), "Callback fired before the write");
        self.saves.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn callbacks_fire_once_per_event() {
    let fixture = "tests/fixtures/sample_video.mp4";
    if !Path::new(fixture).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let video_path = temporary_directory.path().join("sample_video.mp4");
    std::fs::copy(fixture, &video_path).expect("Failed to copy fixture");

    let counter = Arc::new(CountingProgress::default());
    let options = ExportOptions::new()
        .with_frame_count(3)
        .with_progress(counter.clone());

    let report = sample_frames(&video_path, &options).expect("Export failed");

    assert_eq!(counter.plans.load(Ordering::SeqCst), 1);
    assert_eq!(
        counter.saves.load(Ordering::SeqCst),
        report.saved.len() as u64,
    );
}
