//! Timings and counters collected while converting an image.
use crate::image::{ImageRgbF32, Mask};
use crate::params::PixelArtParams;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one conversion.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

/// Everything `convert_with_report` learned along the way. The intermediate
/// buffers are skipped when serializing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub width: usize,
    pub height: usize,
    pub params: PixelArtParams,
    pub blocks_x: usize,
    pub blocks_y: usize,
    /// Edge pixels right after thresholding
    pub edge_pixels_raw: usize,
    /// Edge pixels after dilation (= blacked-out pixels)
    pub edge_pixels: usize,
    pub timings: TimingBreakdown,
    #[serde(skip)]
    pub pixelized: ImageRgbF32,
    #[serde(skip)]
    pub edge_mask: Mask,
}

impl ConversionReport {
    /// Share of the image covered by outline, in [0, 1].
    pub fn edge_coverage(&self) -> f32 {
        let total = self.width * self.height;
        if total == 0 {
            0.0
        } else {
            self.edge_pixels as f32 / total as f32
        }
    }
}
