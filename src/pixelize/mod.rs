//! Block pixelization by dominant intensity cluster.
//!
//! Every pixel is assigned an intensity bucket. Each
//! `block_size × block_size` tile of the output is then painted with the mean
//! color of the most populated bucket inside the tile's box window. The effect is a posterized, blocky image in which a block
//! takes the color of its majority tone rather than a muddy average of all
//! of its pixels.
//!
//! Boundary policies
//! - Bucket indices clamp into `0..num_bins`.
//! - Ties between buckets go to the lowest index.
//! - A block with zero weight renders [`ZERO_WEIGHT_COLOR`] (unreachable for
//!   valid parameters, kept as an explicit fallback).
//! - Image sizes that are not multiples of `block_size` get a trailing
//!   partial block per row/column; the expansion is cropped to the input size.

mod aggregate;
mod bucket;

pub use aggregate::ZERO_WEIGHT_COLOR;
pub(crate) use aggregate::BlockGrid;

use crate::error::Result;
use crate::image::{ImageRgbF32, ImageView};
use crate::params::validate_pixelize;
use crate::parallel::for_each_row_mut;
use aggregate::BlockAggregate;
use bucket::BucketMap;
use log::debug;

/// Pixelize `image`, returning a new buffer of identical shape.
///
/// Fails on `num_bins` outside `1..=256`, zero `kernel_size` or `block_size`,
/// and on malformed images, before allocating anything.
pub fn pixelize(
    image: &ImageRgbF32,
    num_bins: usize,
    kernel_size: usize,
    block_size: usize,
) -> Result<ImageRgbF32> {
    validate_pixelize(num_bins, kernel_size, block_size)?;
    image.validate()?;
    Ok(pixelize_unchecked(image, num_bins, kernel_size, block_size))
}

/// [`pixelize`] for parameters and an image that were already validated.
pub(crate) fn pixelize_unchecked(
    image: &ImageRgbF32,
    num_bins: usize,
    kernel_size: usize,
    block_size: usize,
) -> ImageRgbF32 {
    let blocks = block_colors(image, num_bins, kernel_size, block_size);
    expand_nearest(&blocks, block_size, image.w, image.h)
}

/// One color per block, as a `cols × rows` image.
fn block_colors(
    image: &ImageRgbF32,
    num_bins: usize,
    kernel_size: usize,
    block_size: usize,
) -> ImageRgbF32 {
    let grid = BlockGrid::new(image.w, image.h, kernel_size, block_size);
    let buckets = BucketMap::from_image(image, num_bins);
    let aggregate = BlockAggregate::build(image, &buckets, grid);
    debug!(
        "pixelize: {}x{} image -> {}x{} blocks (kernel={} pad={} bins={})",
        image.w, image.h, grid.cols, grid.rows, kernel_size, grid.pad, num_bins
    );
    aggregate.block_colors()
}

/// Nearest-neighbour upscale: block `(bx, by)` fills pixels
/// `[bx * block_size, (bx + 1) * block_size)` × the same range in y, cropped to
/// `w × h`. Blocks missing from a short grid repeat the last one.
fn expand_nearest(blocks: &ImageRgbF32, block_size: usize, w: usize, h: usize) -> ImageRgbF32 {
    let mut out = ImageRgbF32::new(w, h);
    if blocks.w == 0 || blocks.h == 0 {
        return out;
    }
    let (last_bx, last_by) = (blocks.w - 1, blocks.h - 1);
    for_each_row_mut(&mut out.data, w, |y, row| {
        let src = blocks.row((y / block_size).min(last_by));
        for (x, px) in row.iter_mut().enumerate() {
            *px = src[(x / block_size).min(last_bx)];
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixelArtError;

    #[test]
    fn flat_image_stays_flat() {
        let img = ImageRgbF32::filled(16, 16, [128.0; 3]);
        let out = pixelize(&img, 4, 4, 8).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn parameter_errors_win_over_shape_errors() {
        let empty = ImageRgbF32::new(0, 0);
        for (bins, kernel, block, name) in [
            (0, 4, 8, "num_bins"),
            (4, 0, 8, "kernel_size"),
            (4, 4, 0, "block_size"),
        ] {
            match pixelize(&empty, bins, kernel, block) {
                Err(PixelArtError::InvalidParameter { name: got, .. }) => assert_eq!(got, name),
                other => panic!("expected parameter error, got {other:?}"),
            }
        }
        assert!(matches!(
            pixelize(&empty, 4, 4, 8),
            Err(PixelArtError::EmptyImage { .. })
        ));
    }

    #[test]
    fn out_of_range_bins_and_zero_block_are_errors_not_panics() {
        let img = ImageRgbF32::filled(4, 4, [255.0; 3]);
        for (bins, block, name) in [(257, 4, "num_bins"), (1000, 4, "num_bins"), (4, 0, "block_size")] {
            match pixelize(&img, bins, 4, block) {
                Err(PixelArtError::InvalidParameter { name: got, .. }) => assert_eq!(got, name),
                other => panic!("expected {name} error, got {other:?}"),
            }
        }
        // the largest bucket count still resolves the top bucket
        assert_eq!(pixelize(&img, 256, 4, 4).unwrap(), img);
    }

    #[test]
    fn expansion_crops_partial_blocks() {
        let blocks = ImageRgbF32::from_fn(2, 2, |x, y| [x as f32, y as f32, 0.0]);
        let out = expand_nearest(&blocks, 3, 5, 4);
        assert_eq!((out.w, out.h), (5, 4));
        assert_eq!(out.get(2, 2), [0.0, 0.0, 0.0]);
        assert_eq!(out.get(3, 0), [1.0, 0.0, 0.0]);
        assert_eq!(out.get(4, 3), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn block_takes_majority_tone_not_average() {
        // 4x4 block: 12 dark pixels at 40, a bright 4-pixel column at 240.
        let img = ImageRgbF32::from_fn(4, 4, |x, _| if x == 3 { [240.0; 3] } else { [40.0; 3] });
        let out = pixelize(&img, 4, 4, 4).unwrap();
        // kernel 4, pad 1: window covers columns 0..3 only, all dark.
        assert!(out.data.iter().all(|px| *px == [40.0; 3]));

        let wide = pixelize(&img, 4, 8, 4).unwrap();
        // kernel 8, pad 3: window spans the whole block, still dark-majority.
        assert!(wide.data.iter().all(|px| *px == [40.0; 3]));
    }

    #[test]
    fn single_pixel_image_is_preserved() {
        let img = ImageRgbF32::filled(1, 1, [12.0, 34.0, 56.0]);
        assert_eq!(pixelize(&img, 4, 10, 16).unwrap(), img);
    }
}
