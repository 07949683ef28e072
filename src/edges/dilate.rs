//! Binary thresholding and box dilation of edge masks.
//!
//! Dilation is a `size × size` max-pool with stride 1. The window spans
//! `size / 2` pixels before the centre and `size - 1 - size / 2` after it,
//! which is symmetric for odd sizes and leans towards lower indices for even
//! sizes. Out-of-image positions never set a pixel. The box is separable, so
//! it runs as a horizontal pass followed by a vertical pass.
use crate::error::Result;
use crate::image::{ImageF32, ImageView, Mask};
use crate::params::validate_dilate_size;
use crate::padding::clip_window;
use crate::parallel::for_each_row_mut;

/// `response > threshold`, per pixel.
pub fn threshold_response(response: &ImageF32, threshold: f32) -> Mask {
    let mut mask = Mask::new(response.w, response.h);
    for_each_row_mut(&mut mask.data, response.w, |y, row| {
        for (dst, &v) in row.iter_mut().zip(response.row(y)) {
            *dst = v > threshold;
        }
    });
    mask
}

/// Dilate `mask` with a `size × size` box. A size of 1 returns an identical
/// mask; a size of 0 is rejected.
pub fn dilate_box(mask: &Mask, size: usize) -> Result<Mask> {
    validate_dilate_size(size)?;
    Ok(dilate_unchecked(mask, size))
}

/// [`dilate_box`] for a size already known to be positive.
pub(crate) fn dilate_unchecked(mask: &Mask, size: usize) -> Mask {
    if size <= 1 || mask.w == 0 || mask.h == 0 {
        return mask.clone();
    }
    let before = (size / 2) as isize;
    let (w, h) = (mask.w, mask.h);

    let mut horizontal = Mask::new(w, h);
    for_each_row_mut(&mut horizontal.data, w, |y, row| {
        let src = mask.row(y);
        for (x, dst) in row.iter_mut().enumerate() {
            let span = clip_window(x as isize - before, size, w);
            *dst = src[span].iter().any(|&b| b);
        }
    });

    let mut out = Mask::new(w, h);
    for_each_row_mut(&mut out.data, w, |y, row| {
        let span = clip_window(y as isize - before, size, h);
        for yy in span {
            for (dst, &src) in row.iter_mut().zip(horizontal.row(yy)) {
                *dst |= src;
            }
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixelArtError;

    fn single_pixel(w: usize, h: usize, x: usize, y: usize) -> Mask {
        let mut m = Mask::new(w, h);
        m.set(x, y, true);
        m
    }

    #[test]
    fn threshold_is_strict() {
        let resp = ImageF32::from_fn(3, 1, |x, _| [10.0, 20.0, 30.0][x]);
        let mask = threshold_response(&resp, 20.0);
        assert_eq!(mask.data, vec![false, false, true]);
    }

    #[test]
    fn odd_box_grows_symmetrically() {
        let out = dilate_box(&single_pixel(7, 7, 3, 3), 3).unwrap();
        assert_eq!(out.count(), 9);
        for y in 2..=4 {
            for x in 2..=4 {
                assert!(out.get(x, y));
            }
        }
    }

    #[test]
    fn even_box_leans_towards_lower_indices() {
        let out = dilate_box(&single_pixel(6, 6, 3, 3), 2).unwrap();
        // window [c - 1, c]: the pixel spreads to +x/+y neighbours
        let set: Vec<(usize, usize)> = (0..6)
            .flat_map(|y| (0..6).map(move |x| (x, y)))
            .filter(|&(x, y)| out.get(x, y))
            .collect();
        assert_eq!(set, vec![(3, 3), (4, 3), (3, 4), (4, 4)]);
    }

    #[test]
    fn corner_dilation_is_clipped() {
        let out = dilate_box(&single_pixel(4, 4, 0, 0), 3).unwrap();
        assert_eq!(out.count(), 4);
        assert_eq!((out.w, out.h), (4, 4));
    }

    #[test]
    fn size_one_is_identity() {
        let m = single_pixel(5, 3, 4, 2);
        assert_eq!(dilate_box(&m, 1).unwrap(), m);
    }

    #[test]
    fn size_zero_is_a_parameter_error() {
        let m = single_pixel(5, 3, 4, 2);
        assert!(matches!(
            dilate_box(&m, 0),
            Err(PixelArtError::InvalidParameter {
                name: "edge_dilate_size",
                ..
            })
        ));
    }
}
