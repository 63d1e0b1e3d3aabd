mod common;

use common::synthetic_image::gradient_f32;
use impulse_denoise::image::ImageF32;
use impulse_denoise::{forward_dft, inverse_dft, magnitude_image};

fn gradient_image(w: usize, h: usize) -> ImageF32 {
    ImageF32 {
        w,
        h,
        stride: w,
        data: gradient_f32(w, h),
    }
}

#[test]
fn uniform_image_concentrates_energy_in_zero_bin() {
    let (w, h) = (8, 8);
    let mut img = ImageF32::new(w, h);
    img.data.fill(0.5);

    let spectrum = forward_dft(&img).unwrap();

    // Unnormalized DC bin holds the full sum; it sits at the corner before
    // any recentering.
    let dc = spectrum.get(0, 0);
    assert!((dc.re - 0.5 * (w * h) as f32).abs() < 1e-3, "dc={dc}");
    assert!(dc.im.abs() < 1e-3);
    for y in 0..h {
        for x in 0..w {
            if (x, y) != (0, 0) {
                assert!(
                    spectrum.get(x, y).norm() < 1e-3,
                    "bin ({x},{y}) carries energy: {}",
                    spectrum.get(x, y)
                );
            }
        }
    }

    // After the quadrant swap the zero-frequency bin is at the exact center.
    let mut centered = spectrum.clone();
    centered.swap_quadrants();
    assert!((centered.get(w / 2, h / 2).re - dc.re).abs() < 1e-6);
    assert!(centered.get(0, 0).norm() < 1e-3);
}

#[test]
fn forward_inverse_round_trip() {
    let img = gradient_image(16, 12);
    let spectrum = forward_dft(&img).unwrap();
    let restored = inverse_dft(&spectrum).unwrap();

    assert_eq!(restored.w, img.w);
    assert_eq!(restored.h, img.h);
    let max_err = img
        .data
        .iter()
        .zip(&restored.data)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    assert!(max_err < 1e-4, "max abs error {max_err}");
}

#[test]
fn magnitude_of_uniform_image_is_a_single_center_peak() {
    let (w, h) = (8, 6);
    let mut img = ImageF32::new(w, h);
    img.data.fill(1.0);

    let spectrum = forward_dft(&img).unwrap();
    let mag = magnitude_image(&spectrum);

    // Normalization stretches the DC bin to 1 and everything else to ~0; the
    // swap puts the peak at the center.
    assert!((mag.get(w / 2, h / 2) - 1.0).abs() < 1e-6);
    let total: f32 = mag.data.iter().sum();
    assert!((total - 1.0).abs() < 1e-3, "total={total}");
}

#[test]
fn magnitude_of_flat_spectrum_is_all_zeros() {
    // An all-zero image has a zero spectrum; the min/max stretch must not
    // divide by the zero span.
    let img = ImageF32::new(4, 4);
    let spectrum = forward_dft(&img).unwrap();
    let mag = magnitude_image(&spectrum);
    assert!(mag.data.iter().all(|&v| v == 0.0));
}

#[test]
fn round_trip_after_denoise_pipeline() {
    // The analysis path used by the tools: u8 image -> [0,1] floats ->
    // spectrum -> back. Exercises the 255 scaling contract end to end.
    use impulse_denoise::image::GrayImageU8;

    let mut gray = GrayImageU8::filled(10, 10, 100);
    gray.set(5, 5, 200);
    let float = ImageF32::from_u8(&gray);
    let restored = inverse_dft(&forward_dft(&float).unwrap()).unwrap();
    let max_err = float
        .data
        .iter()
        .zip(&restored.data)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    assert!(max_err < 1e-4, "max abs error {max_err}");
}
