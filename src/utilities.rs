//! Internal helpers.

use ffmpeg_next::frame::Video as VideoFrame;

/// Copy a scaled RGB24 frame into a tightly packed byte vector.
///
/// FFmpeg row strides often include alignment padding beyond `width × 3`;
/// [`image::RgbImage::from_raw`] expects none.
pub(crate) fn frame_to_rgb_buffer(frame: &VideoFrame, width: u32, height: u32) -> Vec<u8> {
    let row_bytes = width as usize * 3;
    let stride = frame.stride(0);
    let data = frame.data(0);

    if stride == row_bytes {
        // No padding — copy the whole plane at once.
        return data[..row_bytes * height as usize].to_vec();
    }

    let mut buffer = Vec::with_capacity(row_bytes * height as usize);
    for row in data.chunks(stride).take(height as usize) {
        buffer.extend_from_slice(&row[..row_bytes]);
    }
    buffer
}
