//! Forward and inverse 2-D discrete Fourier transforms.
//!
//! The 2-D transform is composed from 1-D FFTs: one pass over the rows, a
//! transposition, one pass over the columns, and a transposition back so the
//! buffer stays row-major. The forward transform is unnormalized; the inverse
//! applies the standard `1/(rows·cols)` scale and keeps the real component.

use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

use crate::error::CoreError;
use crate::image::ImageF32;

/// Full complex spectrum of a `w × h` image, row-major, real and imaginary
/// planes interleaved as `Complex<f32>`.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub w: usize,
    pub h: usize,
    pub data: Vec<Complex<f32>>,
}

impl Spectrum {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Complex<f32> {
        self.data[y * self.w + x]
    }

    /// Swap diagonally-opposite quadrants in place, moving the
    /// zero-frequency bin between corner and center. Self-inverse.
    pub fn swap_quadrants(&mut self) {
        super::shift::swap_quadrants(self.w, self.h, &mut self.data);
    }
}

/// Forward DFT of a real-valued image into a full complex spectrum of the
/// same dimensions.
///
/// Inputs converted from 8-bit should be pre-scaled to [0, 1] (see
/// [`ImageF32::from_u8`]) to keep transform magnitudes in a stable range.
pub fn forward_dft(image: &ImageF32) -> Result<Spectrum, CoreError> {
    let (w, h) = (image.w, image.h);
    if w == 0 || h == 0 {
        return Err(CoreError::DegenerateImage {
            width: w,
            height: h,
        });
    }

    let mut data: Vec<Complex<f32>> = image.data.iter().map(|&v| Complex::new(v, 0.0)).collect();
    fft_2d_in_place(w, h, &mut data, FftDirection::Forward);
    Ok(Spectrum { w, h, data })
}

/// Inverse DFT back to a real spatial image, scaled by `1/(w·h)`; the
/// imaginary component is discarded.
pub fn inverse_dft(spectrum: &Spectrum) -> Result<ImageF32, CoreError> {
    let (w, h) = (spectrum.w, spectrum.h);
    if w == 0 || h == 0 {
        return Err(CoreError::DegenerateImage {
            width: w,
            height: h,
        });
    }

    let mut data = spectrum.data.clone();
    fft_2d_in_place(w, h, &mut data, FftDirection::Inverse);

    let scale = 1.0 / (w * h) as f32;
    let real: Vec<f32> = data.iter().map(|c| c.re * scale).collect();
    Ok(ImageF32 {
        w,
        h,
        stride: w,
        data: real,
    })
}

fn fft_2d_in_place(
    width: usize,
    height: usize,
    buffer: &mut [Complex<f32>],
    direction: FftDirection,
) {
    let mut planner = FftPlanner::new();

    // Rows.
    let fft_width = planner.plan_fft(width, direction);
    let mut scratch = vec![Complex::default(); fft_width.get_inplace_scratch_len()];
    for row in buffer.chunks_exact_mut(width) {
        fft_width.process_with_scratch(row, &mut scratch);
    }

    // Columns, processed as rows of the transposed buffer.
    let mut transposed = transpose(width, height, buffer);
    let fft_height = planner.plan_fft(height, direction);
    scratch.resize(fft_height.get_inplace_scratch_len(), Complex::default());
    for column in transposed.chunks_exact_mut(height) {
        fft_height.process_with_scratch(column, &mut scratch);
    }

    // Transpose back so the result stays row-major.
    let restored = transpose(height, width, &transposed);
    buffer.copy_from_slice(&restored);
}

fn transpose<T: Copy + Default>(width: usize, height: usize, matrix: &[T]) -> Vec<T> {
    let mut transposed = vec![T::default(); matrix.len()];
    for y in 0..height {
        let row = &matrix[y * width..(y + 1) * width];
        for (x, &v) in row.iter().enumerate() {
            transposed[x * height + y] = v;
        }
    }
    transposed
}
