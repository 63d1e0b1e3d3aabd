mod common;

use common::synthetic_image::salt_pepper_u8;
use impulse_denoise::image::GrayImageU8;
use impulse_denoise::{denoised_copy, remove_impulse_noise, OutlierThresholds};

#[test]
fn single_impulse_in_uniform_image_is_restored() {
    let _ = env_logger::builder().is_test(true).try_init();

    // 4x4 of value 100 with one bright impulse at the top-left corner.
    let mut noisy = GrayImageU8::filled(4, 4, 100);
    noisy.set(0, 0, 255);

    let mut clean = noisy.clone();
    let report = remove_impulse_noise(
        &noisy.as_view(),
        &mut clean,
        OutlierThresholds { min: 0, max: 200 },
    )
    .unwrap();

    assert_eq!(report.replaced, 1);
    // Corner estimate: mean of (1,0), (0,1), (1,1) = 100.
    assert_eq!(clean, GrayImageU8::filled(4, 4, 100));
}

#[test]
fn denoising_is_deterministic() {
    let (w, h) = (64, 48);
    let noisy = GrayImageU8::new(w, h, salt_pepper_u8(w, h, 120, 53));
    let thresholds = OutlierThresholds { min: 40, max: 210 };

    let (first, first_report) = denoised_copy(&noisy, thresholds).unwrap();
    let (second, second_report) = denoised_copy(&noisy, thresholds).unwrap();

    assert!(first_report.replaced > 0, "synthetic impulses were placed");
    assert_eq!(first_report.replaced, second_report.replaced);
    assert_eq!(first, second, "same inputs must give bit-exact outputs");
}

#[test]
fn estimates_read_only_from_source() {
    // Two adjacent impulses: if the pass read from the destination, the
    // second estimate would see the first replacement. Both must be computed
    // over the original source values.
    let mut noisy = GrayImageU8::filled(5, 5, 100);
    noisy.set(2, 2, 255);
    noisy.set(3, 2, 255);

    let (clean, report) =
        denoised_copy(&noisy, OutlierThresholds { min: 0, max: 200 }).unwrap();

    assert_eq!(report.replaced, 2);
    // (2,2) interior ring over the source: seven 100s and the raw 255 at
    // (3,2): (700 + 255) / 8 = 119.
    assert_eq!(clean.get(2, 2), 119);
    // Symmetric for (3,2).
    assert_eq!(clean.get(3, 2), 119);
}

#[test]
fn rerun_on_clean_output_is_a_no_op() {
    let mut noisy = GrayImageU8::filled(8, 8, 100);
    noisy.set(0, 0, 255);
    noisy.set(7, 7, 3);
    let thresholds = OutlierThresholds { min: 50, max: 200 };

    let (clean, _) = denoised_copy(&noisy, thresholds).unwrap();
    // All replacements landed on 100; every pixel is now in range.
    let (rerun, report) = denoised_copy(&clean, thresholds).unwrap();
    assert_eq!(report.replaced, 0);
    assert_eq!(rerun, clean);
}

#[test]
fn pepper_and_salt_both_trigger_replacement() {
    let mut noisy = GrayImageU8::filled(3, 3, 128);
    noisy.set(0, 1, 0); // below min
    noisy.set(2, 1, 255); // above max

    let (clean, report) =
        denoised_copy(&noisy, OutlierThresholds { min: 50, max: 185 }).unwrap();

    assert_eq!(report.replaced, 2);
    // Left edge (0,1): neighbors (0,0), (0,2), (1,0), (1,1), (1,2) = all 128.
    assert_eq!(clean.get(0, 1), 128);
    // Right edge (2,1): neighbors (2,0), (2,2), (1,0), (1,1), (1,2) = all 128.
    assert_eq!(clean.get(2, 1), 128);
}
