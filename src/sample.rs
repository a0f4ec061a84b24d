//! Evenly-spaced sample position computation.

/// Compute `count` frame positions evenly spaced across
/// `[0, total_frames - 1]`, inclusive of both endpoints.
///
/// Position `i` is the exact rational `i × (total_frames − 1) / (count − 1)`
/// truncated toward zero, so the first index is always 0 and the last is
/// always `total_frames - 1` (for `count >= 2`). The result is
/// non-decreasing and may contain duplicates when `total_frames < count`.
///
/// Degenerate inputs: `total_frames == 0` or `count == 0` yield an empty
/// set; `count == 1` yields `[0]`.
///
/// # Example
///
/// ```
/// use filmstrip::sample_indices;
///
/// assert_eq!(sample_indices(100, 6), vec![0, 19, 39, 59, 79, 99]);
/// ```
pub fn sample_indices(total_frames: u64, count: usize) -> Vec<u64> {
    if total_frames == 0 || count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0];
    }

    let last = total_frames - 1;
    let divisions = (count - 1) as u64;

    // Integer division floors, which for non-negative operands is the same
    // truncation the fractional positions require.
    (0..count as u64).map(|i| i * last / divisions).collect()
}
