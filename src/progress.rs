//! Progress reporting for export runs.
//!
//! [`ProgressCallback`] lets callers observe an export as it happens —
//! once when the sampling plan is fixed, and once per written file — without
//! the library committing to any particular console output. The pipeline is
//! fully synchronous, so callbacks fire on the calling thread and there is
//! no cancellation hook.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use filmstrip::{
//!     ExportOptions, ProgressCallback, SamplePlan, SavedFrame, sample_frames,
//! };
//!
//! struct PrintProgress;
//!
//! impl ProgressCallback for PrintProgress {
//!     fn on_plan(&self, plan: &SamplePlan) {
//!         println!("sampling {} of {} frames", plan.indices.len(), plan.total_frames);
//!     }
//!
//!     fn on_frame_saved(&self, saved: &SavedFrame) {
//!         println!("saved {}", saved.path.display());
//!     }
//! }
//!
//! let options = ExportOptions::new().with_progress(Arc::new(PrintProgress));
//! let _report = sample_frames("input.mp4", &options)?;
//! # Ok::<(), filmstrip::FilmstripError>(())
//! ```

use crate::export::{SamplePlan, SavedFrame};

/// Observer for export progress.
///
/// All methods have empty default implementations, so an implementor only
/// overrides the events it cares about.
pub trait ProgressCallback: Send + Sync {
    /// Called once per export run, after the source has been opened and the
    /// sample positions computed, before any frame is read.
    fn on_plan(&self, _plan: &SamplePlan) {}

    /// Called once per written image file, after the write succeeded.
    fn on_frame_saved(&self, _saved: &SavedFrame) {}
}

/// A [`ProgressCallback`] that does nothing. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ProgressCallback for NoOpProgress {}
