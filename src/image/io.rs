//! I/O helpers for RGB images, masks and JSON.
//!
//! - `load_rgb_image`: decode any format the `image` crate reads into an
//!   `ImageRgbF32` with samples in [0, 255].
//! - `save_rgb_f32`: write an `ImageRgbF32` as 8-bit RGB (format from extension).
//! - `save_mask`: write a `Mask` as a black/white grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgbF32, ImageView, Mask};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, drop any alpha channel and widen to f32.
pub fn load_rgb_image(path: &Path) -> Result<ImageRgbF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let samples: Vec<f32> = img.into_raw().into_iter().map(f32::from).collect();
    ImageRgbF32::from_interleaved(w, h, samples)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Quantize a float image to 8 bits. Samples are clamped to [0, 255] and then
/// truncated, not rounded.
pub fn to_rgb8(image: &ImageRgbF32) -> RgbImage {
    let mut out = RgbImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, px) in row.iter().enumerate() {
            let q = px.map(|v| v.clamp(0.0, 255.0) as u8);
            out.put_pixel(x as u32, y as u32, Rgb(q));
        }
    }
    out
}

/// Save a float RGB image; the container format follows the file extension.
pub fn save_rgb_f32(image: &ImageRgbF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    to_rgb8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a mask as grayscale: set pixels are white (255), others black.
pub fn save_mask(mask: &Mask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &on) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([if on { 255 } else { 0 }]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
