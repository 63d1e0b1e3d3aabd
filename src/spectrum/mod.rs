//! Discrete-frequency-domain analysis.
//!
//! A real spatial image (f32, values in [0, 1]) is transformed into a full
//! complex [`Spectrum`] of identical dimensions, inspected via the recentered
//! log-magnitude visualization, and inverted back to the spatial domain:
//!
//! - `dft`: forward and normalized inverse 2-D transforms built from 1-D FFT
//!   passes over rows and columns.
//! - `shift`: the self-inverse quadrant swap that moves the zero-frequency
//!   bin from the corners to the center.
//! - `magnitude`: log-scaled min/max-normalized magnitude image for display.
//!
//! Every operation is a pure function over its inputs; spectra are transient
//! values created and consumed within one analysis pass.

pub mod dft;
pub mod magnitude;
pub mod shift;

pub use dft::{forward_dft, inverse_dft, Spectrum};
pub use magnitude::magnitude_image;
pub use shift::swap_quadrants;
