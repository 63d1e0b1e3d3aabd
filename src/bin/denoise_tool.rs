use impulse_denoise::config::denoise::DenoiseToolConfig;
use impulse_denoise::config::load_config;
use impulse_denoise::denoise::{denoised_copy, OutlierThresholds};
use impulse_denoise::image::io::{load_grayscale_image, save_grayscale_f32, save_grayscale_u8, write_json_file};
use impulse_denoise::image::{GrayImageU8, ImageF32};
use impulse_denoise::spectrum::{forward_dft, magnitude_image};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: DenoiseToolConfig = load_config(Path::new(&config_path))?;

    let noisy = load_grayscale_image(&config.input)?;
    let (clean, report) =
        denoised_copy(&noisy, config.thresholds).map_err(|e| e.to_string())?;

    save_grayscale_u8(&clean, &config.output.denoised_image)?;
    println!(
        "Denoised {} ({}x{}): replaced {} pixels in {:.3} ms",
        config.input.display(),
        noisy.width(),
        noisy.height(),
        report.replaced,
        report.elapsed_ms
    );

    if let Some(path) = &config.output.noisy_spectrum {
        save_spectrum(&noisy, path)?;
        println!("Saved noisy spectrum to {}", path.display());
    }
    if let Some(path) = &config.output.denoised_spectrum {
        save_spectrum(&clean, path)?;
        println!("Saved denoised spectrum to {}", path.display());
    }
    if let Some(path) = &config.output.summary_json {
        let summary = DenoiseSummary {
            width: noisy.width(),
            height: noisy.height(),
            thresholds: config.thresholds,
            replaced_pixels: report.replaced,
            elapsed_ms: report.elapsed_ms,
        };
        write_json_file(path, &summary)?;
        println!("Saved summary to {}", path.display());
    }

    Ok(())
}

fn save_spectrum(gray: &GrayImageU8, path: &Path) -> Result<(), String> {
    let float = ImageF32::from_u8(gray);
    let spectrum = forward_dft(&float).map_err(|e| e.to_string())?;
    save_grayscale_f32(&magnitude_image(&spectrum), path)
}

fn usage() -> String {
    "Usage: denoise_tool <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DenoiseSummary {
    width: usize,
    height: usize,
    thresholds: OutlierThresholds,
    replaced_pixels: usize,
    elapsed_ms: f64,
}
