//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Used for numeric processing: DFT input/output and magnitude-spectrum
//! visualization. Values are nominally in [0, 1]; conversion from 8-bit
//! divides by 255, conversion back multiplies by 255 and clamps.

use super::traits::{ImageView, ImageViewMut};
use super::u8::GrayImageU8;

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Convert an 8-bit grayscale view into [0, 1] floats.
    pub fn from_u8<I>(gray: &I) -> Self
    where
        I: ImageView<Pixel = u8>,
    {
        let mut out = Self::new(gray.width(), gray.height());
        for y in 0..gray.height() {
            let src = gray.row(y);
            let dst = out.row_mut(y);
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s as f32 / 255.0;
            }
        }
        out
    }

    /// Rescale [0, 1] floats to an owned 8-bit buffer, clamping out-of-range
    /// values.
    pub fn to_u8(&self) -> GrayImageU8 {
        let mut bytes = Vec::with_capacity(self.w * self.h);
        for y in 0..self.h {
            for &px in self.row(y) {
                bytes.push((px * 255.0).clamp(0.0, 255.0) as u8);
            }
        }
        GrayImageU8::new(self.w, self.h, bytes)
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [f32]> {
        (self.stride == self.w).then(|| &mut self.data[..])
    }
}
