//! Intensity quantization into a fixed number of buckets.
use crate::image::{ImageRgbF32, ImageView, Rgb};
use crate::parallel::for_each_row_mut;

/// Per-pixel bucket index in `0..num_bins`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketMap {
    pub w: usize,
    pub h: usize,
    pub num_bins: usize,
    pub data: Vec<u8>,
}

impl BucketMap {
    /// Quantize every pixel of `image`. `num_bins` must be in `1..=256`.
    pub fn from_image(image: &ImageRgbF32, num_bins: usize) -> Self {
        let mut data = vec![0u8; image.w * image.h];
        for_each_row_mut(&mut data, image.w, |y, row| {
            for (dst, px) in row.iter_mut().zip(image.row(y)) {
                *dst = quantize_intensity(*px, num_bins);
            }
        });
        Self {
            w: image.w,
            h: image.h,
            num_bins,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        self.data[y * self.w + x] as usize
    }
}

/// `floor(mean(r, g, b) / 256 * num_bins)`, clamped into `0..num_bins`.
///
/// Means of 256 and above land in the top bucket, negative means in bucket 0.
#[inline]
pub fn quantize_intensity(px: Rgb, num_bins: usize) -> u8 {
    debug_assert!((1..=256).contains(&num_bins), "num_bins out of range");
    let mean = (px[0] + px[1] + px[2]) / 3.0;
    let bucket = (mean / 256.0 * num_bins as f32).floor();
    if !(bucket > 0.0) {
        return 0;
    }
    (bucket as usize).min(num_bins - 1) as u8
}
