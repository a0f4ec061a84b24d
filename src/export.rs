//! The frame sampler/exporter.
//!
//! [`sample_frames`] drives the whole pipeline for one video file: derive
//! and create the output directory, open the source, compute the evenly
//! spaced sample positions, decode the stream sequentially, pad each sampled
//! frame, and write it as a sequentially numbered JPEG.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::FilmstripError,
    pad::pad_to_width_ratio,
    progress::{NoOpProgress, ProgressCallback},
    sample::sample_indices,
    source::VideoSource,
};

/// Default number of frames to extract.
pub const DEFAULT_FRAME_COUNT: usize = 6;

/// Default target width as a multiple of the frame height.
pub const DEFAULT_WIDTH_RATIO: f64 = 1.1;

/// Options for [`sample_frames`].
///
/// # Example
///
/// ```no_run
/// use filmstrip::{ExportOptions, sample_frames};
///
/// let options = ExportOptions::new()
///     .with_frame_count(12)
///     .with_width_ratio(1.0);
/// let report = sample_frames("input.mp4", &options)?;
/// # Ok::<(), filmstrip::FilmstripError>(())
/// ```
#[derive(Clone)]
#[must_use]
pub struct ExportOptions {
    /// Number of frames to extract.
    pub(crate) frame_count: usize,
    /// Target width as a multiple of the frame height.
    pub(crate) width_ratio: f64,
    /// Progress callback. Defaults to a no-op.
    pub(crate) progress: Arc<dyn ProgressCallback>,
}

impl Debug for ExportOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ExportOptions")
            .field("frame_count", &self.frame_count)
            .field("width_ratio", &self.width_ratio)
            .finish_non_exhaustive()
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportOptions {
    /// Create options with the default settings: 6 frames, width ratio 1.1,
    /// no progress callback.
    pub fn new() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            width_ratio: DEFAULT_WIDTH_RATIO,
            progress: Arc::new(NoOpProgress),
        }
    }

    /// Set the number of frames to extract. Clamped to a minimum of 1.
    pub fn with_frame_count(mut self, count: usize) -> Self {
        self.frame_count = count.max(1);
        self
    }

    /// Set the target width as a multiple of the frame height.
    ///
    /// Ratios at or below the source aspect ratio leave frames unpadded.
    pub fn with_width_ratio(mut self, ratio: f64) -> Self {
        self.width_ratio = ratio;
        self
    }

    /// Attach a progress callback.
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }
}

/// The work a single export run intends to do.
///
/// Fixed once the source is open; delivered to
/// [`ProgressCallback::on_plan`] and embedded in the final [`ExportReport`].
#[derive(Debug, Clone)]
#[must_use]
pub struct SamplePlan {
    /// Total frame count reported by the container, trusted as-is.
    pub total_frames: u64,
    /// Frame positions selected for export: non-decreasing, endpoints
    /// included, possibly with duplicates.
    pub indices: Vec<u64>,
    /// Directory the image files are written into.
    pub output_directory: PathBuf,
}

/// A single image file written during an export run.
#[derive(Debug, Clone)]
pub struct SavedFrame {
    /// 0-based position of the source frame in the video.
    pub position: u64,
    /// 1-based output counter. File names form a dense
    /// `frame_<ordinal>.jpg` sequence regardless of which positions were
    /// sampled.
    pub ordinal: u64,
    /// Full path of the written file.
    pub path: PathBuf,
}

/// Summary of a completed export run.
///
/// The report mirrors the observable filesystem state: `saved` holds one
/// entry per written file, in write order. When the stream ends before every
/// sampled position is reached, `saved` is shorter than `plan.indices`.
#[derive(Debug, Clone)]
#[must_use]
pub struct ExportReport {
    /// The plan the run executed.
    pub plan: SamplePlan,
    /// The files that were written.
    pub saved: Vec<SavedFrame>,
}

/// Derive the output directory for a video path.
///
/// Takes the input file's base name without its extension, appends the
/// literal suffix `_frames`, and resolves the result inside the same parent
/// directory as the input.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use filmstrip::output_directory_for;
///
/// assert_eq!(
///     output_directory_for(Path::new("/videos/banana.mp4")),
///     Path::new("/videos/banana_frames"),
/// );
/// ```
pub fn output_directory_for(video_path: &Path) -> PathBuf {
    let stem = video_path.file_stem().unwrap_or_default().to_string_lossy();
    let directory_name = format!("{stem}_frames");

    match video_path.parent() {
        Some(parent) => parent.join(directory_name),
        None => PathBuf::from(directory_name),
    }
}

/// Sample evenly-spaced frames from the video at `path` and write them as
/// JPEG files.
///
/// The run proceeds in order:
///
/// 1. Derive the output directory ([`output_directory_for`]) and create it.
///    Creation is idempotent and happens before the open attempt, so a
///    failed open leaves the directory behind, empty.
/// 2. Open the source; this is the pipeline's only hard failure.
/// 3. Compute the sample positions ([`sample_indices`]) from the trusted
///    frame count and fire [`ProgressCallback::on_plan`].
/// 4. Decode sequentially from position 0. Each sampled frame is padded
///    ([`pad_to_width_ratio`]) and saved as `frame_<n>.jpg` with a dense
///    1-based counter; a duplicated sample position writes the same pixels
///    under consecutive names. If the stream ends early, the run finishes
///    with whatever was already saved.
///
/// The source is released when the function returns, on success and on
/// every error path alike.
///
/// # Errors
///
/// - [`FilmstripError::IoError`] if the output directory cannot be created.
/// - [`FilmstripError::FileOpen`] if the source cannot be opened.
/// - [`FilmstripError::NoVideoStream`] if the container has no video.
/// - [`FilmstripError::FfmpegError`] if the decoder cannot be set up.
/// - [`FilmstripError::ImageError`] if an output file cannot be written.
///
/// # Example
///
/// ```no_run
/// use filmstrip::{ExportOptions, sample_frames};
///
/// let report = sample_frames("clips/banana_success.mp4", &ExportOptions::new())?;
/// for saved in &report.saved {
///     println!("frame {} -> {}", saved.position, saved.path.display());
/// }
/// # Ok::<(), filmstrip::FilmstripError>(())
/// ```
pub fn sample_frames<P: AsRef<Path>>(
    path: P,
    options: &ExportOptions,
) -> Result<ExportReport, FilmstripError> {
    let path = path.as_ref();

    let output_directory = output_directory_for(path);
    fs::create_dir_all(&output_directory)?;

    let mut source = VideoSource::open(path)?;

    let total_frames = match &source.metadata().video {
        Some(video) => video.frame_count,
        None => return Err(FilmstripError::NoVideoStream),
    };

    let indices = sample_indices(total_frames, options.frame_count);

    log::info!("Video has {total_frames} frames; sampling at {indices:?}");

    let plan = SamplePlan {
        total_frames,
        indices,
        output_directory,
    };
    options.progress.on_plan(&plan);

    let mut saved: Vec<SavedFrame> = Vec::with_capacity(plan.indices.len());

    if !plan.indices.is_empty() {
        let mut target_index = 0;

        for (position, image) in source.reader()? {
            if target_index >= plan.indices.len() {
                break;
            }
            if plan.indices[target_index] != position {
                continue;
            }

            let padded = pad_to_width_ratio(&image, options.width_ratio);

            // A duplicated sample position writes identical pixel content
            // under consecutive ordinals.
            while target_index < plan.indices.len() && plan.indices[target_index] == position {
                let ordinal = saved.len() as u64 + 1;
                let file_path = plan.output_directory.join(format!("frame_{ordinal}.jpg"));
                padded.save(&file_path)?;

                log::info!("Saved {}", file_path.display());

                let frame = SavedFrame {
                    position,
                    ordinal,
                    path: file_path,
                };
                options.progress.on_frame_saved(&frame);
                saved.push(frame);
                target_index += 1;
            }
        }

        if target_index < plan.indices.len() {
            log::warn!(
                "Stream ended early: saved {} of {} requested frames",
                saved.len(),
                plan.indices.len(),
            );
        }
    }

    log::info!("Frames saved in: {}", plan.output_directory.display());

    Ok(ExportReport { plan, saved })
}
