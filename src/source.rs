//! Core [`VideoSource`] implementation.
//!
//! `VideoSource` is the entry point for reading a video file. It opens the
//! container, locates the best video stream, extracts and caches metadata,
//! and hands out a [`FrameReader`] for sequential decoding.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{codec::context::Context as CodecContext, format::context::Input, media::Type};

use crate::{
    error::FilmstripError,
    metadata::{MediaMetadata, VideoMetadata},
    reader::FrameReader,
};

/// An opened video file.
///
/// Created via [`VideoSource::open`], this struct holds the demuxer context
/// and cached metadata. The demuxer is exclusively owned: it is opened once,
/// read sequentially through [`reader()`](VideoSource::reader), and released
/// when the source is dropped, regardless of how the read loop terminated.
///
/// # Example
///
/// ```no_run
/// use filmstrip::VideoSource;
///
/// let mut source = VideoSource::open("input.mp4")?;
/// if let Some(video) = &source.metadata().video {
///     println!("{}x{}, ~{} frames", video.width, video.height, video.frame_count);
/// }
///
/// for (position, image) in source.reader()? {
///     println!("decoded frame {position} ({}x{})", image.width(), image.height());
/// }
/// # Ok::<(), filmstrip::FilmstripError>(())
/// ```
pub struct VideoSource {
    /// The opened FFmpeg input (demuxer) context.
    pub(crate) input_context: Input,
    /// Cached metadata extracted at open time.
    pub(crate) metadata: MediaMetadata,
    /// Index of the best video stream, if one exists.
    pub(crate) video_stream_index: Option<usize>,
    /// Path to the opened file (kept for error messages).
    pub(crate) file_path: PathBuf,
}

impl Debug for VideoSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VideoSource")
            .field("metadata", &self.metadata)
            .field("video_stream_index", &self.video_stream_index)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl VideoSource {
    /// Open a video file for frame extraction.
    ///
    /// Initializes FFmpeg (idempotent), opens the file, locates the best
    /// video stream, and caches its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FilmstripError::FileOpen`] if the file does not exist, is
    /// unreadable, or uses an unsupported container/codec.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use filmstrip::{FilmstripError, VideoSource};
    ///
    /// let source = VideoSource::open("video.mp4")?;
    /// # Ok::<(), FilmstripError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FilmstripError> {
        let path = path.as_ref();
        let file_path = path.to_path_buf();

        log::debug!("Opening video file: {}", file_path.display());

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| FilmstripError::FileOpen {
            path: file_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| FilmstripError::FileOpen {
                path: file_path.clone(),
                reason: error.to_string(),
            })?;

        let video_stream_index = input_context
            .streams()
            .best(Type::Video)
            .map(|stream| stream.index());

        // Extract container-level duration.
        let duration_microseconds = input_context.duration();
        let duration = if duration_microseconds > 0 {
            Duration::from_micros(duration_microseconds as u64)
        } else {
            Duration::ZERO
        };

        let format = input_context.format().name().to_string();

        let video = match video_stream_index {
            Some(index) => Some(read_video_metadata(
                &input_context,
                index,
                duration,
                &file_path,
            )?),
            None => None,
        };

        let metadata = MediaMetadata {
            video,
            duration,
            format,
        };

        log::info!(
            "Opened video file: {} (format={}, duration={:.2}s)",
            file_path.display(),
            metadata.format,
            metadata.duration.as_secs_f64(),
        );

        if let Some(video) = &metadata.video {
            log::debug!(
                "Best video stream: {}x{}, {:.2} fps, codec={}, ~{} frames",
                video.width,
                video.height,
                video.frames_per_second,
                video.codec,
                video.frame_count,
            );
        }

        Ok(Self {
            input_context,
            metadata,
            video_stream_index,
            file_path,
        })
    }

    /// Get a reference to the cached metadata.
    ///
    /// Metadata is extracted once during [`open`](VideoSource::open) and
    /// does not require additional decoding.
    pub fn metadata(&self) -> &MediaMetadata {
        &self.metadata
    }

    /// The path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Create a sequential [`FrameReader`] starting at frame position 0.
    ///
    /// The reader borrows this source mutably, so nothing else can read the
    /// stream while it is alive. Dropping the reader releases the borrow.
    ///
    /// # Errors
    ///
    /// Returns [`FilmstripError::NoVideoStream`] if the file has no video
    /// stream, or decoder setup errors.
    pub fn reader(&mut self) -> Result<FrameReader<'_>, FilmstripError> {
        FrameReader::new(self)
    }
}

/// Extract metadata for the selected video stream.
fn read_video_metadata(
    input_context: &Input,
    stream_index: usize,
    duration: Duration,
    path: &Path,
) -> Result<VideoMetadata, FilmstripError> {
    let stream = input_context
        .stream(stream_index)
        .ok_or(FilmstripError::NoVideoStream)?;

    let codec_parameters = stream.parameters();
    let decoder_context =
        CodecContext::from_parameters(codec_parameters).map_err(|error| {
            FilmstripError::FileOpen {
                path: path.to_path_buf(),
                reason: format!(
                    "Failed to read video codec parameters for stream {stream_index}: {error}"
                ),
            }
        })?;
    let video_decoder =
        decoder_context
            .decoder()
            .video()
            .map_err(|error| FilmstripError::FileOpen {
                path: path.to_path_buf(),
                reason: format!(
                    "Failed to create video decoder for stream {stream_index}: {error}"
                ),
            })?;

    let width = video_decoder.width();
    let height = video_decoder.height();

    // Compute frames per second from the stream's average frame rate.
    let frame_rate = stream.avg_frame_rate();
    let frames_per_second = if frame_rate.denominator() != 0 {
        frame_rate.numerator() as f64 / frame_rate.denominator() as f64
    } else {
        // Fallback: try the stream's rate field.
        let rate = stream.rate();
        if rate.denominator() != 0 {
            rate.numerator() as f64 / rate.denominator() as f64
        } else {
            0.0
        }
    };

    let frame_count = if frames_per_second > 0.0 {
        (duration.as_secs_f64() * frames_per_second) as u64
    } else {
        0
    };

    let codec = video_decoder
        .codec()
        .map(|codec| codec.name().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Ok(VideoMetadata {
        width,
        height,
        frames_per_second,
        frame_count,
        codec,
    })
}
