use serde::Deserialize;
use std::path::PathBuf;

/// Config for the `spectrum_view` binary.
#[derive(Debug, Deserialize)]
pub struct SpectrumToolConfig {
    pub input: PathBuf,
    /// When set, apply a library Gaussian blur with this sigma before the
    /// transform (the blur itself is an external `image`-crate operation).
    #[serde(default)]
    pub gaussian_blur_sigma: Option<f32>,
    /// Destination for the recentered log-magnitude raster.
    pub spectrum_image: PathBuf,
}
