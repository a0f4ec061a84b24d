//! Error types for the `filmstrip` crate.
//!
//! This module defines [`FilmstripError`], the unified error type returned by
//! all fallible operations in the crate. The only failure the sampling
//! pipeline itself raises is [`FilmstripError::FileOpen`]; decode trouble
//! mid-stream ends extraction gracefully instead of erroring.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `filmstrip` operations.
///
/// Every public method that can fail returns `Result<T, FilmstripError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FilmstripError {
    /// The video file could not be opened.
    #[error("Failed to open video file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::VideoSource::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// A decoded frame could not be converted to an image.
    #[error("Failed to decode video frame: {0}")]
    VideoDecodeError(String),

    /// An I/O error occurred while creating the output directory.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate while encoding a frame.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),
}

impl From<FfmpegError> for FilmstripError {
    fn from(error: FfmpegError) -> Self {
        FilmstripError::FfmpegError(error.to_string())
    }
}
