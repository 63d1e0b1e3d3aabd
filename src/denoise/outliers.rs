//! Full-image impulse-noise scrub pass.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::neighborhood::neighborhood_average;
use crate::error::CoreError;
use crate::image::{GrayImageU8, ImageView};

/// Closed intensity range considered valid; anything outside is presumed
/// corrupted. The denoiser does not validate `min <= max`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutlierThresholds {
    pub min: u8,
    pub max: u8,
}

impl Default for OutlierThresholds {
    fn default() -> Self {
        Self { min: 50, max: 185 }
    }
}

impl OutlierThresholds {
    #[inline]
    pub fn is_outlier(&self, value: u8) -> bool {
        value < self.min || value > self.max
    }
}

/// Outcome of a scrub pass.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DenoiseReport {
    /// Number of destination pixels overwritten with a neighborhood estimate.
    pub replaced: usize,
    pub elapsed_ms: f64,
}

/// Replace every destination pixel whose corresponding `source` value falls
/// outside `thresholds` with the neighborhood estimate computed over the
/// unmodified `source`. In-range pixels keep whatever the caller put in
/// `dest`.
///
/// `dest` must match the source dimensions and must not alias `source`;
/// callers typically pass a clone of the source buffer.
pub fn remove_impulse_noise<S>(
    source: &S,
    dest: &mut GrayImageU8,
    thresholds: OutlierThresholds,
) -> Result<DenoiseReport, CoreError>
where
    S: ImageView<Pixel = u8>,
{
    let (w, h) = (source.width(), source.height());
    if !source.same_dimensions(dest) {
        return Err(CoreError::DimensionMismatch {
            expected_w: w,
            expected_h: h,
            actual_w: dest.width(),
            actual_h: dest.height(),
        });
    }
    if w < 2 || h < 2 {
        return Err(CoreError::DegenerateImage {
            width: w,
            height: h,
        });
    }

    let start = Instant::now();
    let mut replaced = 0usize;
    for y in 0..h {
        let src_row = source.row(y);
        for (x, &v) in src_row.iter().enumerate() {
            if thresholds.is_outlier(v) {
                dest.set(x, y, neighborhood_average(source, x, y)?);
                replaced += 1;
            }
        }
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "remove_impulse_noise: replaced {replaced}/{} pixels outside [{}, {}] in {elapsed_ms:.3} ms",
        w * h,
        thresholds.min,
        thresholds.max
    );

    Ok(DenoiseReport {
        replaced,
        elapsed_ms,
    })
}

/// Convenience wrapper: clone the source, scrub outliers into the clone.
pub fn denoised_copy(
    source: &GrayImageU8,
    thresholds: OutlierThresholds,
) -> Result<(GrayImageU8, DenoiseReport), CoreError> {
    let mut dest = source.clone();
    let report = remove_impulse_noise(source, &mut dest, thresholds)?;
    Ok((dest, report))
}
