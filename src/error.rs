use thiserror::Error;

/// Errors raised by the denoising and spectrum operations.
///
/// Decode/encode failures from the raster codec are not represented here;
/// the I/O helpers in [`crate::image::io`] propagate them as strings, and the
/// core never retries or recovers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Source and destination buffers must have identical dimensions. Raised
    /// before any write.
    #[error("dimension mismatch: expected {expected_w}x{expected_h}, got {actual_w}x{actual_h}")]
    DimensionMismatch {
        expected_w: usize,
        expected_h: usize,
        actual_w: usize,
        actual_h: usize,
    },

    /// A pixel coordinate outside `[0, width) x [0, height)` was supplied.
    /// Programmer error, not user-recoverable.
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// The operation is ill-defined on images this small (e.g. a 1x1 image
    /// has no 8-connected neighbors at all).
    #[error("degenerate image dimensions {width}x{height}")]
    DegenerateImage { width: usize, height: usize },
}
