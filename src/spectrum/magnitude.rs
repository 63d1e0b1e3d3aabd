//! Log-magnitude spectrum visualization.

use super::dft::Spectrum;
use super::shift::swap_quadrants;
use crate::image::ImageF32;

/// Build the recentered log-magnitude image of a spectrum, normalized to
/// [0, 1] for display.
///
/// Per pixel: `ln(1 + sqrt(re² + im²))`, then a linear stretch of the
/// observed min/max to [0, 1], then the quadrant swap so the zero-frequency
/// bin sits at the center. Rescaling to 8-bit happens at save time
/// (see [`crate::image::io::save_grayscale_f32`]).
pub fn magnitude_image(spectrum: &Spectrum) -> ImageF32 {
    let mut out = ImageF32::new(spectrum.w, spectrum.h);
    for (dst, c) in out.data.iter_mut().zip(&spectrum.data) {
        // +1 keeps the log finite on zero-energy bins.
        *dst = (c.norm() + 1.0).ln();
    }

    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for &v in &out.data {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    let span = hi - lo;
    if span > 0.0 {
        for v in &mut out.data {
            *v = (*v - lo) / span;
        }
    } else {
        // Flat spectrum: nothing to stretch.
        out.data.fill(0.0);
    }

    swap_quadrants(out.w, out.h, &mut out.data);
    out
}
