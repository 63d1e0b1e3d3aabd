use serde::Deserialize;
use std::path::PathBuf;

use crate::denoise::OutlierThresholds;

/// Config for the `denoise_tool` binary.
#[derive(Debug, Deserialize)]
pub struct DenoiseToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub thresholds: OutlierThresholds,
    pub output: DenoiseOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DenoiseOutputConfig {
    /// Destination for the cleaned 8-bit raster.
    pub denoised_image: PathBuf,
    /// Optional magnitude-spectrum raster of the noisy input.
    #[serde(default)]
    pub noisy_spectrum: Option<PathBuf>,
    /// Optional magnitude-spectrum raster of the cleaned output.
    #[serde(default)]
    pub denoised_spectrum: Option<PathBuf>,
    /// Optional JSON run summary.
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}
