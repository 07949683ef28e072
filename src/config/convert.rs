//! `outline_demo` configuration: input/output paths, pipeline parameters and
//! optional debug artifacts.
use crate::params::PixelArtParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Tool config consumed by `outline_demo`.
#[derive(Debug, Deserialize)]
pub struct ConvertToolConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub params: PixelArtParams,
    #[serde(default)]
    pub debug: DebugOutputConfig,
}

/// Optional intermediate artifacts; each is skipped when absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DebugOutputConfig {
    /// Pixelized image before outlines are drawn.
    pub pixelized_image: Option<PathBuf>,
    /// Dilated outline mask as a black/white PNG.
    pub edge_mask: Option<PathBuf>,
    /// JSON summary with counters and timings.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ConvertToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<ConvertToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a bare `PixelArtParams` object; missing fields keep their defaults.
pub fn load_params(path: &Path) -> Result<PixelArtParams, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read params {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse params {}: {e}", path.display()))
}
