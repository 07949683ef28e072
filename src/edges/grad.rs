//! Per-pixel Sobel edge response on an RGB image.
//!
//! - Pads by one pixel with mirror reflection (edge sample not repeated).
//! - Convolves each channel independently with the horizontal and vertical
//!   3×3 Sobel kernels.
//! - Keeps `max(|h|, |v|)` per channel and averages it over the three
//!   channels, so the response stays on the 0–255-derived scale of the input
//!   (a hard 0→255 step in every channel yields 1020).
//!
//! Complexity: O(W·H) with one output plane; rows are independent.
use crate::image::{ImageF32, ImageRgbF32, ImageView};
use crate::padding::reflect_neighbors;
use crate::parallel::for_each_row_mut;

type Kernel3 = [[f32; 3]; 3];

pub const SOBEL_KERNEL_H: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
pub const SOBEL_KERNEL_V: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Channel-averaged Sobel response, same `w × h` as `image`.
pub fn sobel_response(image: &ImageRgbF32) -> ImageF32 {
    let (w, h) = (image.w, image.h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for_each_row_mut(&mut out.data, w, |y, out_row| {
        let y_idx = reflect_neighbors(y, h);
        let rows = [image.row(y_idx[0]), image.row(y_idx[1]), image.row(y_idx[2])];
        for (x, dst) in out_row.iter_mut().enumerate() {
            let x_idx = reflect_neighbors(x, w);
            let mut total = 0.0;
            for c in 0..3 {
                let mut sum_h = 0.0;
                let mut sum_v = 0.0;
                for (ky, src_row) in rows.iter().enumerate() {
                    let kh = &SOBEL_KERNEL_H[ky];
                    let kv = &SOBEL_KERNEL_V[ky];
                    let (a, b, d) = (src_row[x_idx[0]][c], src_row[x_idx[1]][c], src_row[x_idx[2]][c]);
                    sum_h += a * kh[0] + b * kh[1] + d * kh[2];
                    sum_v += a * kv[0] + b * kv[1] + d * kv[2];
                }
                total += sum_h.abs().max(sum_v.abs());
            }
            *dst = total / 3.0;
        }
    });
    out
}
