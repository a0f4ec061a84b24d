//! Lazy, pull-based sequential frame reader.
//!
//! [`FrameReader`] implements [`Iterator`] and decodes frames on demand —
//! each call to [`next()`](Iterator::next) reads and decodes just enough
//! packets to produce the next frame in presentation order. No frame is
//! retained beyond the iteration that produced it.
//!
//! Unlike a seeking extractor, the reader starts at position 0 and counts
//! decoded frames with a running position counter. When the stream ends, or
//! a packet cannot be read or decoded mid-stream, iteration simply stops:
//! truncated input degrades into fewer frames, never into an error.
//!
//! Create a `FrameReader` via [`VideoSource::reader`](crate::VideoSource::reader).
//!
//! # Example
//!
//! ```no_run
//! use filmstrip::VideoSource;
//!
//! let mut source = VideoSource::open("input.mp4")?;
//! for (position, image) in source.reader()? {
//!     if position % 30 == 0 {
//!         image.save(format!("frame_{position}.png"))?;
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use ffmpeg_next::{
    Error as FfmpegError, Packet,
    codec::context::Context as CodecContext,
    decoder::Video as VideoDecoder,
    format::Pixel,
    frame::Video as VideoFrame,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::{error::FilmstripError, source::VideoSource};

/// A lazy iterator over decoded video frames in presentation order.
///
/// Yields `(position, image)` pairs where `position` is the 0-based index
/// of the frame in the stream and `image` is the decoded frame in RGB8.
/// The iterator borrows the underlying [`VideoSource`] mutably; dropping it
/// releases the borrow.
pub struct FrameReader<'a> {
    source: &'a mut VideoSource,
    decoder: VideoDecoder,
    scaler: ScalingContext,
    video_stream_index: usize,
    /// Position of the next frame to yield, counting from 0.
    position: u64,
    width: u32,
    height: u32,
    decoded_frame: VideoFrame,
    rgb_frame: VideoFrame,
    eof_sent: bool,
    done: bool,
}

impl<'a> FrameReader<'a> {
    pub(crate) fn new(source: &'a mut VideoSource) -> Result<Self, FilmstripError> {
        let video_stream_index = source
            .video_stream_index
            .ok_or(FilmstripError::NoVideoStream)?;

        let stream = source
            .input_context
            .stream(video_stream_index)
            .ok_or(FilmstripError::NoVideoStream)?;
        let codec_parameters = stream.parameters();
        let decoder_context = CodecContext::from_parameters(codec_parameters)?;
        let decoder = decoder_context.decoder().video()?;

        let width = decoder.width();
        let height = decoder.height();

        // Pixel-format converter (source format → RGB24) at the source
        // resolution.
        let scaler = ScalingContext::get(
            decoder.format(),
            width,
            height,
            Pixel::RGB24,
            width,
            height,
            ScalingFlags::BILINEAR,
        )?;

        Ok(Self {
            source,
            decoder,
            scaler,
            video_stream_index,
            position: 0,
            width,
            height,
            decoded_frame: VideoFrame::empty(),
            rgb_frame: VideoFrame::empty(),
            eof_sent: false,
            done: false,
        })
    }

    /// Position of the next frame this reader would yield.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Scale and convert the current `decoded_frame` to a `DynamicImage`.
    fn convert_current_frame(&mut self) -> Result<DynamicImage, FilmstripError> {
        self.scaler.run(&self.decoded_frame, &mut self.rgb_frame)?;

        let buffer =
            crate::utilities::frame_to_rgb_buffer(&self.rgb_frame, self.width, self.height);
        let rgb_image = RgbImage::from_raw(self.width, self.height, buffer).ok_or_else(|| {
            FilmstripError::VideoDecodeError(
                "Failed to construct RGB image from decoded frame data".to_string(),
            )
        })?;
        Ok(DynamicImage::ImageRgb8(rgb_image))
    }
}

impl Iterator for FrameReader<'_> {
    type Item = (u64, DynamicImage);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            // Try to receive a frame the decoder has already produced.
            if self.decoder.receive_frame(&mut self.decoded_frame).is_ok() {
                match self.convert_current_frame() {
                    Ok(image) => {
                        let position = self.position;
                        self.position += 1;
                        return Some((position, image));
                    }
                    Err(error) => {
                        log::warn!(
                            "Stopping read loop at frame {}: {error}",
                            self.position,
                        );
                        self.done = true;
                        return None;
                    }
                }
            }

            // Decoder has no buffered frames. Feed it more packets.
            if self.eof_sent {
                // Already sent EOF and decoder is drained.
                self.done = true;
                return None;
            }

            let mut packet = Packet::empty();
            match packet.read(&mut self.source.input_context) {
                Ok(()) => {
                    if packet.stream() == self.video_stream_index {
                        if let Err(error) = self.decoder.send_packet(&packet) {
                            log::warn!(
                                "Stopping read loop at frame {}: undecodable packet: {error}",
                                self.position,
                            );
                            self.done = true;
                            return None;
                        }
                    }
                    // Non-video packets are silently skipped.
                }
                Err(FfmpegError::Eof) => {
                    if let Err(error) = self.decoder.send_eof() {
                        log::warn!(
                            "Stopping read loop at frame {}: decoder flush failed: {error}",
                            self.position,
                        );
                        self.done = true;
                        return None;
                    }
                    self.eof_sent = true;
                }
                Err(error) => {
                    log::warn!(
                        "Stopping read loop at frame {}: packet read failed: {error}",
                        self.position,
                    );
                    self.done = true;
                    return None;
                }
            }
        }
    }
}
