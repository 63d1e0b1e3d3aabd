use impulse_denoise::image::GrayImageU8;
use impulse_denoise::{denoised_copy, OutlierThresholds};

fn main() {
    // Demo stub: builds a mid-gray buffer peppered with impulses and scrubs it
    let w = 640usize;
    let h = 480usize;
    let mut noisy = GrayImageU8::filled(w, h, 128);
    for i in (0..w * h).step_by(97) {
        let v = if i % 2 == 0 { 255 } else { 0 };
        noisy.set(i % w, i / w, v);
    }

    match denoised_copy(&noisy, OutlierThresholds::default()) {
        Ok((_, report)) => println!(
            "replaced={} elapsed_ms={:.3}",
            report.replaced, report.elapsed_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
