//! Conversion entry points chaining pixelization, outline detection and
//! compositing.
//!
//! Every call allocates its own buffers and keeps nothing afterwards, so the
//! functions here can be called concurrently on independent images.
use crate::composite::composite_unchecked;
use crate::diagnostics::{ConversionReport, TimingBreakdown};
use crate::edges::outline_unchecked;
use crate::error::Result;
use crate::image::ImageRgbF32;
use crate::params::PixelArtParams;
use crate::pixelize::{pixelize_unchecked, BlockGrid};
use log::debug;
use std::time::Instant;

/// Convert `image` with explicit kernel/block/threshold values and the default
/// bucket count and dilation size.
pub fn convert(
    image: &ImageRgbF32,
    kernel_size: usize,
    block_size: usize,
    edge_threshold: f32,
) -> Result<ImageRgbF32> {
    let params = PixelArtParams::default()
        .with_kernel_size(kernel_size)
        .with_block_size(block_size)
        .with_edge_threshold(edge_threshold);
    convert_with_params(image, &params)
}

pub fn convert_with_params(image: &ImageRgbF32, params: &PixelArtParams) -> Result<ImageRgbF32> {
    convert_with_report(image, params).map(|(out, _)| out)
}

/// Convert and return the intermediate buffers, counters and timings.
///
/// Parameters and the image are validated once here; the stages then run on
/// trusted inputs.
pub fn convert_with_report(
    image: &ImageRgbF32,
    params: &PixelArtParams,
) -> Result<(ImageRgbF32, ConversionReport)> {
    params.validate()?;
    image.validate()?;

    let total_start = Instant::now();
    let mut timings = TimingBreakdown::default();

    let stage_start = Instant::now();
    let pixelized = pixelize_unchecked(
        image,
        params.num_bins,
        params.kernel_size,
        params.block_size,
    );
    timings.push("pixelize", stage_start.elapsed().as_secs_f64() * 1000.0);

    let outline = outline_unchecked(&pixelized, params.edge_threshold, params.edge_dilate_size);
    timings.push("edgeResponse", outline.gradient_ms);
    timings.push("edgeDilate", outline.dilate_ms);

    let stage_start = Instant::now();
    let result = composite_unchecked(&pixelized, &outline.mask);
    timings.push("composite", stage_start.elapsed().as_secs_f64() * 1000.0);
    timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

    let grid = BlockGrid::new(image.w, image.h, params.kernel_size, params.block_size);
    let report = ConversionReport {
        width: image.w,
        height: image.h,
        params: params.clone(),
        blocks_x: grid.cols,
        blocks_y: grid.rows,
        edge_pixels_raw: outline.raw.count(),
        edge_pixels: outline.mask.count(),
        timings,
        pixelized,
        edge_mask: outline.mask,
    };
    debug!(
        "convert: {}x{} blocks={}x{} edges={} (raw {}) total_ms={:.3}",
        report.width,
        report.height,
        report.blocks_x,
        report.blocks_y,
        report.edge_pixels,
        report.edge_pixels_raw,
        report.timings.total_ms
    );
    Ok((result, report))
}
