//! Quadrant recentering for spectrum visualization.

/// Swap the top-left quadrant with the bottom-right and the top-right with
/// the bottom-left, in place, splitting at `width / 2` and `height / 2`.
///
/// This moves the zero-frequency bin from the corners to the center of the
/// grid. The permutation is self-inverse: applying it twice restores the
/// input. With odd dimensions the middle row/column is left untouched.
pub fn swap_quadrants<T: Copy>(width: usize, height: usize, data: &mut [T]) {
    debug_assert_eq!(data.len(), width * height);
    let half_w = width / 2;
    let half_h = height / 2;
    // Starts of the right/bottom blocks; skips the middle row/column when a
    // dimension is odd, keeping the swap an involution.
    let right = width - half_w;
    let bottom = height - half_h;

    for y in 0..half_h {
        for x in 0..half_w {
            let tl = y * width + x;
            let br = (y + bottom) * width + (x + right);
            data.swap(tl, br);

            let tr = y * width + (x + right);
            let bl = (y + bottom) * width + x;
            data.swap(tr, bl);
        }
    }
}
