//! # filmstrip
//!
//! Sample a fixed number of frames evenly across a video's duration and
//! save them as padded still images.
//!
//! `filmstrip` opens a video file, computes evenly-spaced frame positions
//! over the whole stream, decodes the file sequentially, pads each sampled
//! frame horizontally to a target width-to-height ratio, and writes the
//! results as sequentially numbered JPEG files into a `<basename>_frames`
//! directory next to the input. Decoding is powered by FFmpeg via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate; frames are
//! materialized as [`image::DynamicImage`] values.
//!
//! ## Quick Start
//!
//! ```no_run
//! use filmstrip::{ExportOptions, sample_frames};
//!
//! let options = ExportOptions::new().with_frame_count(6).with_width_ratio(1.1);
//! let report = sample_frames("input.mp4", &options)?;
//!
//! println!(
//!     "{} frames saved in {}",
//!     report.saved.len(),
//!     report.plan.output_directory.display(),
//! );
//! # Ok::<(), filmstrip::FilmstripError>(())
//! ```
//!
//! ## Behaviour
//!
//! - The output directory is derived from the input file name (extension
//!   stripped, `_frames` appended) and created before the video is opened;
//!   it is never cleaned up.
//! - Sample positions are spaced evenly across `[0, total_frames - 1]`,
//!   inclusive of both endpoints, with fractional positions truncated.
//! - Output files are named `frame_1.jpg`, `frame_2.jpg`, … by a dense
//!   1-based counter, independent of the source frame positions.
//! - The stream is read strictly sequentially, one frame at a time. A
//!   mid-stream decode failure ends the run with whatever frames were
//!   already saved; only an unopenable source is an error.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system for
//! `ffmpeg-sys-next` to link against.

pub mod error;
pub mod export;
pub mod ffmpeg;
pub mod metadata;
pub mod pad;
pub mod progress;
pub mod reader;
pub mod sample;
pub mod source;
mod utilities;

pub use error::FilmstripError;
pub use export::{
    ExportOptions, ExportReport, SamplePlan, SavedFrame, output_directory_for, sample_frames,
};
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use metadata::{MediaMetadata, VideoMetadata};
pub use pad::pad_to_width_ratio;
pub use progress::{NoOpProgress, ProgressCallback};
pub use reader::FrameReader;
pub use sample::sample_indices;
pub use source::VideoSource;
