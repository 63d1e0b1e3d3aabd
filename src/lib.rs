#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod denoise;
pub mod error;
pub mod image;
pub mod spectrum;

// Tool plumbing, public for the binaries.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::denoise::{
    denoised_copy, neighborhood_average, remove_impulse_noise, DenoiseReport, OutlierThresholds,
    PixelPosition,
};
pub use crate::error::CoreError;
pub use crate::spectrum::{forward_dft, inverse_dft, magnitude_image, swap_quadrants, Spectrum};

/// Small prelude for quick experiments.
///
/// ```
/// use impulse_denoise::prelude::*;
///
/// # fn main() {
/// let mut noisy = GrayImageU8::filled(16, 16, 120);
/// noisy.set(3, 3, 255);
/// let (clean, report) = denoised_copy(&noisy, OutlierThresholds::default()).unwrap();
/// assert_eq!(report.replaced, 1);
/// assert_eq!(clean.get(3, 3), 120);
/// # }
/// ```
pub mod prelude {
    pub use crate::denoise::{denoised_copy, remove_impulse_noise, OutlierThresholds};
    pub use crate::image::{GrayImageU8, ImageF32, ImageU8, ImageView};
    pub use crate::spectrum::{forward_dft, inverse_dft, magnitude_image, Spectrum};
}
