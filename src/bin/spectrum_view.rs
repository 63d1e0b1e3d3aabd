use image::imageops;
use image::{GrayImage, ImageBuffer};
use impulse_denoise::config::load_config;
use impulse_denoise::config::spectrum::SpectrumToolConfig;
use impulse_denoise::image::io::{load_grayscale_image, save_grayscale_f32};
use impulse_denoise::image::{GrayImageU8, ImageF32};
use impulse_denoise::spectrum::{forward_dft, magnitude_image};
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
    let config: SpectrumToolConfig = load_config(Path::new(&config_path))?;

    let mut gray = load_grayscale_image(&config.input)?;
    if let Some(sigma) = config.gaussian_blur_sigma {
        gray = gaussian_blur(gray, sigma)?;
        println!("Applied library Gaussian blur with sigma={sigma}");
    }

    let float = ImageF32::from_u8(&gray);
    let spectrum = forward_dft(&float).map_err(|e| e.to_string())?;
    save_grayscale_f32(&magnitude_image(&spectrum), &config.spectrum_image)?;
    println!(
        "Saved {}x{} magnitude spectrum to {}",
        gray.width(),
        gray.height(),
        config.spectrum_image.display()
    );

    Ok(())
}

/// Black-box library blur: round-trips through the `image` crate's buffer.
fn gaussian_blur(gray: GrayImageU8, sigma: f32) -> Result<GrayImageU8, String> {
    let (w, h) = (gray.width(), gray.height());
    let buffer: GrayImage = ImageBuffer::from_raw(w as u32, h as u32, gray.into_raw())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    let blurred = imageops::blur(&buffer, sigma);
    Ok(GrayImageU8::new(w, h, blurred.into_raw()))
}

fn usage() -> String {
    "Usage: spectrum_view <config.json>".to_string()
}
