//! Per-block, per-bucket box sums.
//!
//! This is the histogram form of "one-hot bucket volume, grouped all-ones
//! convolution with stride `block_size`": for each block and bucket it stores
//! how many pixels of that bucket fall inside the block's box window and the
//! sum of their colors.
//!
//! Window geometry follows a strided convolution with symmetric zero padding
//! `pad = (kernel_size - 1) / 2`: block `(bx, by)` sums the rows
//! `[by * block_size - pad, by * block_size - pad + kernel_size)` (columns
//! likewise), clipped to the image. The grid is `ceil(w / block_size) ×
//! ceil(h / block_size)`, so a trailing partial tile gets a block of its own.
//! Every window contains its block's origin pixel, hence no block is empty
//! for a non-empty image.
use super::bucket::BucketMap;
use crate::image::{ImageRgbF32, ImageView, Rgb};
use crate::padding::clip_window;
use crate::parallel::for_each_row_mut;
use std::ops::Range;

/// Color assigned to a block whose dominant bucket has zero weight.
pub const ZERO_WEIGHT_COLOR: Rgb = [0.0; 3];

/// Block layout over an image of a given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockGrid {
    pub block_size: usize,
    pub kernel_size: usize,
    pub pad: usize,
    /// Blocks per row
    pub cols: usize,
    /// Blocks per column
    pub rows: usize,
    pub image_w: usize,
    pub image_h: usize,
}

impl BlockGrid {
    pub fn new(image_w: usize, image_h: usize, kernel_size: usize, block_size: usize) -> Self {
        Self {
            block_size,
            kernel_size,
            pad: kernel_size.saturating_sub(1) / 2,
            cols: image_w.div_ceil(block_size),
            rows: image_h.div_ceil(block_size),
            image_w,
            image_h,
        }
    }

    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    /// Image rows summed into blocks of grid row `by`.
    #[inline]
    pub fn window_rows(&self, by: usize) -> Range<usize> {
        self.window(by, self.image_h)
    }

    /// Image columns summed into blocks of grid column `bx`.
    #[inline]
    pub fn window_cols(&self, bx: usize) -> Range<usize> {
        self.window(bx, self.image_w)
    }

    #[inline]
    fn window(&self, b: usize, n: usize) -> Range<usize> {
        let start = (b * self.block_size) as isize - self.pad as isize;
        clip_window(start, self.kernel_size, n)
    }
}

/// Summed weight and color of one bucket inside one block window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BucketSum {
    pub weight: f32,
    pub rgb: Rgb,
}

/// Winning bucket of a block: lowest index among those with maximum weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DominantBucket {
    pub index: usize,
    pub weight: f32,
}

#[derive(Clone, Debug)]
pub struct BlockAggregate {
    pub grid: BlockGrid,
    pub num_bins: usize,
    /// `grid.rows × grid.cols × num_bins`, bucket index fastest.
    pub sums: Vec<BucketSum>,
}

impl BlockAggregate {
    pub fn build(image: &ImageRgbF32, buckets: &BucketMap, grid: BlockGrid) -> Self {
        let num_bins = buckets.num_bins;
        let mut sums = vec![BucketSum::default(); grid.len() * num_bins];
        for_each_row_mut(&mut sums, grid.cols * num_bins, |by, block_row| {
            let rows = grid.window_rows(by);
            for (bx, cell) in block_row.chunks_exact_mut(num_bins).enumerate() {
                let cols = grid.window_cols(bx);
                for y in rows.clone() {
                    let px_row = &image.row(y)[cols.clone()];
                    for (x, px) in cols.clone().zip(px_row) {
                        let slot = &mut cell[buckets.get(x, y)];
                        slot.weight += 1.0;
                        slot.rgb[0] += px[0];
                        slot.rgb[1] += px[1];
                        slot.rgb[2] += px[2];
                    }
                }
            }
        });
        Self {
            grid,
            num_bins,
            sums,
        }
    }

    /// Bucket sums of block `(bx, by)`, indexed by bucket.
    #[inline]
    pub fn cell(&self, bx: usize, by: usize) -> &[BucketSum] {
        let start = (by * self.grid.cols + bx) * self.num_bins;
        &self.sums[start..start + self.num_bins]
    }

    pub fn dominant(&self, bx: usize, by: usize) -> DominantBucket {
        dominant_bucket(self.cell(bx, by))
    }

    /// Average color of the dominant bucket, or [`ZERO_WEIGHT_COLOR`].
    pub fn block_color(&self, bx: usize, by: usize) -> Rgb {
        let dom = self.dominant(bx, by);
        if dom.weight <= 0.0 {
            return ZERO_WEIGHT_COLOR;
        }
        let rgb = self.cell(bx, by)[dom.index].rgb;
        [rgb[0] / dom.weight, rgb[1] / dom.weight, rgb[2] / dom.weight]
    }

    /// One color per block, as a `cols × rows` image.
    pub fn block_colors(&self) -> ImageRgbF32 {
        ImageRgbF32::from_fn(self.grid.cols, self.grid.rows, |bx, by| {
            self.block_color(bx, by)
        })
    }
}

/// Argmax over bucket weights. Only a strictly larger weight replaces the
/// current best, so ties keep the lowest bucket index.
pub fn dominant_bucket(cell: &[BucketSum]) -> DominantBucket {
    let mut best = DominantBucket {
        index: 0,
        weight: cell.first().map_or(0.0, |s| s.weight),
    };
    for (index, sum) in cell.iter().enumerate().skip(1) {
        if sum.weight > best.weight {
            best = DominantBucket {
                index,
                weight: sum.weight,
            };
        }
    }
    best
}
