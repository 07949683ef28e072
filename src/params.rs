//! Parameters controlling the conversion pipeline.
//!
//! `Default` mirrors the command-line defaults (kernel 4, block 8, threshold
//! 128). [`PixelArtParams::reference`] gives a coarser, heavier-outlined
//! look (kernel 10, block 16, threshold 112). Both keep
//! four intensity buckets and a 3×3 outline dilation.

use crate::error::{PixelArtError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_KERNEL_SIZE: usize = 4;
pub const DEFAULT_BLOCK_SIZE: usize = 8;
pub const DEFAULT_EDGE_THRESHOLD: f32 = 128.0;
pub const DEFAULT_NUM_BINS: usize = 4;
pub const DEFAULT_EDGE_DILATE_SIZE: usize = 3;

/// Bucket indices are stored as `u8`.
pub const MAX_NUM_BINS: usize = 256;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelArtParams {
    /// Edge length of the box window averaged into each block. Larger values
    /// give smoother color transitions between blocks.
    pub kernel_size: usize,
    /// Edge length of one output "pixel" block.
    pub block_size: usize,
    /// Sobel response (0–255 scale) above which a pixel counts as an edge.
    /// Lower values draw more outline.
    pub edge_threshold: f32,
    /// Number of intensity buckets a block's pixels are split into.
    pub num_bins: usize,
    /// Box size of the outline dilation; 1 keeps the raw edge mask.
    pub edge_dilate_size: usize,
}

impl Default for PixelArtParams {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_KERNEL_SIZE,
            block_size: DEFAULT_BLOCK_SIZE,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            num_bins: DEFAULT_NUM_BINS,
            edge_dilate_size: DEFAULT_EDGE_DILATE_SIZE,
        }
    }
}

impl PixelArtParams {
    /// Kernel 10, block 16, threshold 112.
    pub fn reference() -> Self {
        Self {
            kernel_size: 10,
            block_size: 16,
            edge_threshold: 112.0,
            ..Self::default()
        }
    }

    pub fn with_kernel_size(mut self, kernel_size: usize) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_edge_threshold(mut self, edge_threshold: f32) -> Self {
        self.edge_threshold = edge_threshold;
        self
    }

    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    pub fn with_edge_dilate_size(mut self, edge_dilate_size: usize) -> Self {
        self.edge_dilate_size = edge_dilate_size;
        self
    }

    /// Check every field; the first offending one is reported.
    pub fn validate(&self) -> Result<()> {
        validate_pixelize(self.num_bins, self.kernel_size, self.block_size)?;
        validate_threshold(self.edge_threshold)?;
        validate_dilate_size(self.edge_dilate_size)
    }
}

pub(crate) fn validate_pixelize(num_bins: usize, kernel_size: usize, block_size: usize) -> Result<()> {
    if num_bins == 0 {
        return Err(PixelArtError::invalid("num_bins", num_bins, "must be positive"));
    }
    if num_bins > MAX_NUM_BINS {
        return Err(PixelArtError::invalid("num_bins", num_bins, "must be at most 256"));
    }
    if kernel_size == 0 {
        return Err(PixelArtError::invalid("kernel_size", kernel_size, "must be positive"));
    }
    if block_size == 0 {
        return Err(PixelArtError::invalid("block_size", block_size, "must be positive"));
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold: f32) -> Result<()> {
    if threshold.is_nan() {
        return Err(PixelArtError::invalid("edge_threshold", threshold, "must not be NaN"));
    }
    Ok(())
}

pub(crate) fn validate_dilate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(PixelArtError::invalid("edge_dilate_size", size, "must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_and_reference_presets() {
        let d = PixelArtParams::default();
        assert_eq!((d.kernel_size, d.block_size, d.edge_threshold), (4, 8, 128.0));
        let r = PixelArtParams::reference();
        assert_eq!((r.kernel_size, r.block_size, r.edge_threshold), (10, 16, 112.0));
        assert_eq!((r.num_bins, r.edge_dilate_size), (4, 3));
    }

    #[test]
    fn validation_names_the_offending_parameter() {
        let cases = [
            (PixelArtParams::default().with_num_bins(0), "num_bins"),
            (PixelArtParams::default().with_num_bins(300), "num_bins"),
            (PixelArtParams::default().with_kernel_size(0), "kernel_size"),
            (PixelArtParams::default().with_block_size(0), "block_size"),
            (PixelArtParams::default().with_edge_threshold(f32::NAN), "edge_threshold"),
            (PixelArtParams::default().with_edge_dilate_size(0), "edge_dilate_size"),
        ];
        for (params, expected) in cases {
            match params.validate() {
                Err(PixelArtError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected error for {expected}, got {other:?}"),
            }
        }
        assert!(PixelArtParams::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let params: PixelArtParams =
            serde_json::from_str(r#"{ "block_size": 12, "edge_threshold": 90 }"#).unwrap();
        assert_eq!(params.block_size, 12);
        assert_eq!(params.edge_threshold, 90.0);
        assert_eq!(params.kernel_size, DEFAULT_KERNEL_SIZE);
        assert_eq!(params.edge_dilate_size, DEFAULT_EDGE_DILATE_SIZE);
    }
}
