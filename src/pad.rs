//! Horizontal constant-color padding.

use image::{DynamicImage, RgbImage, imageops};

/// Pad `image` with black columns so its width reaches `ratio` × height.
///
/// The target width is `floor(height × ratio)`. When the image is already at
/// least that wide, the input is returned unchanged. Otherwise the missing
/// columns are split between the two sides — the left side receives
/// `pad_total / 2` and the right side absorbs the odd remainder — and the
/// original pixels are preserved at that offset. The height never changes.
///
/// This is a pure function: the output height always equals the input
/// height, and the output width is `max(width, floor(height × ratio))`.
///
/// # Example
///
/// ```
/// use image::{DynamicImage, RgbImage};
/// use filmstrip::pad_to_width_ratio;
///
/// let frame = DynamicImage::ImageRgb8(RgbImage::new(80, 100));
/// let padded = pad_to_width_ratio(&frame, 1.1);
/// assert_eq!((padded.width(), padded.height()), (110, 100));
/// ```
pub fn pad_to_width_ratio(image: &DynamicImage, ratio: f64) -> DynamicImage {
    let width = image.width();
    let height = image.height();
    let target_width = (f64::from(height) * ratio).floor() as u32;

    if target_width <= width {
        // Already wide enough.
        return image.clone();
    }

    let pad_total = target_width - width;
    let pad_left = pad_total / 2;

    log::debug!(
        "Padding {width}x{height} frame to {target_width}x{height} ({pad_left} columns left, {} right)",
        pad_total - pad_left,
    );

    // A fresh RgbImage is zero-filled, i.e. already black.
    let mut canvas = RgbImage::new(target_width, height);
    imageops::replace(&mut canvas, &image.to_rgb8(), i64::from(pad_left), 0);

    DynamicImage::ImageRgb8(canvas)
}
