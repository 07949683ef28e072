//! Outline detection: Sobel response, threshold, dilation.
//!
//! The outline is computed on the pixelized image, so edges mostly follow
//! block boundaries where the dominant tone changes.
//!
//! - [`grad::sobel_response`] averages `max(|Sobel_h|, |Sobel_v|)` over the
//!   RGB channels (reflect padding).
//! - [`dilate::threshold_response`] keeps pixels strictly above the threshold.
//! - [`dilate::dilate_box`] thickens the mask into a band about
//!   `dilate_size` pixels wide.

pub mod dilate;
pub mod grad;

pub use dilate::{dilate_box, threshold_response};
use dilate::dilate_unchecked;
pub use grad::{sobel_response, SOBEL_KERNEL_H, SOBEL_KERNEL_V};

use crate::error::Result;
use crate::image::{ImageF32, ImageRgbF32, Mask};
use crate::params::{validate_dilate_size, validate_threshold};
use log::debug;
use std::time::Instant;

/// Outline masks with the intermediate response and stage timings.
pub struct OutlineResult {
    /// Channel-averaged Sobel response
    pub response: ImageF32,
    /// Thresholded mask before dilation
    pub raw: Mask,
    /// Final (dilated) mask
    pub mask: Mask,
    pub gradient_ms: f64,
    pub dilate_ms: f64,
}

/// Edge mask of `image`: `response > threshold`, dilated by a
/// `dilate_size × dilate_size` box. Output is `w × h`.
pub fn detect_edges(image: &ImageRgbF32, threshold: f32, dilate_size: usize) -> Result<Mask> {
    detect_outline(image, threshold, dilate_size).map(|r| r.mask)
}

/// Same as [`detect_edges`] but keeps the undilated mask, the response plane
/// and timings.
pub fn detect_outline(
    image: &ImageRgbF32,
    threshold: f32,
    dilate_size: usize,
) -> Result<OutlineResult> {
    validate_threshold(threshold)?;
    validate_dilate_size(dilate_size)?;
    image.validate()?;
    Ok(outline_unchecked(image, threshold, dilate_size))
}

/// [`detect_outline`] for an image and parameters that were already
/// validated.
pub(crate) fn outline_unchecked(
    image: &ImageRgbF32,
    threshold: f32,
    dilate_size: usize,
) -> OutlineResult {
    let gradient_start = Instant::now();
    let response = sobel_response(image);
    let raw = threshold_response(&response, threshold);
    let gradient_ms = gradient_start.elapsed().as_secs_f64() * 1000.0;

    let dilate_start = Instant::now();
    let mask = dilate_unchecked(&raw, dilate_size);
    let dilate_ms = dilate_start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "detect_outline: threshold={threshold} dilate={dilate_size} raw={} dilated={} max_response={:.1}",
        raw.count(),
        mask.count(),
        response.max_value()
    );

    OutlineResult {
        response,
        raw,
        mask,
        gradient_ms,
        dilate_ms,
    }
}
