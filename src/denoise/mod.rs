//! Impulse-noise detection and removal.
//!
//! The denoiser treats intensities outside a caller-chosen closed range
//! `[min, max]` as corrupted and replaces them with a local estimate from the
//! pixel's in-bounds 8-connected neighbors:
//!
//! - `neighborhood`: positional classification (corner/edge/interior) into
//!   neighbor-offset tables and the integer-truncated mean estimate.
//! - `outliers`: the row-major scrub pass over a full image.
//!
//! Estimates always read from the untouched source buffer, so traversal
//! order does not affect the result and a single pass is deterministic.
//! Callers must supply a destination distinct from the source (typically a
//! clone); writing into the source buffer itself would let later estimates
//! observe already-replaced values.

pub mod neighborhood;
pub mod outliers;

pub use neighborhood::{neighborhood_average, Corner, Edge, PixelPosition};
pub use outliers::{denoised_copy, remove_impulse_noise, DenoiseReport, OutlierThresholds};
