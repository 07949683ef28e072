//! Paint outline pixels black.
use crate::error::{PixelArtError, Result};
use crate::image::{ImageRgbF32, ImageView, Mask, Rgb};
use crate::parallel::for_each_row_mut;

pub const OUTLINE_COLOR: Rgb = [0.0; 3];

/// Copy of `image` with every pixel under `mask` set to black.
pub fn composite(image: &ImageRgbF32, mask: &Mask) -> Result<ImageRgbF32> {
    image.validate()?;
    if mask.dims() != image.dims() || mask.data.len() != mask.w * mask.h {
        return Err(PixelArtError::ShapeMismatch {
            what: "edge mask",
            expected: image.dims(),
            actual: mask.dims(),
        });
    }
    Ok(composite_unchecked(image, mask))
}

/// [`composite`] for an image and mask already known to share a valid shape.
pub(crate) fn composite_unchecked(image: &ImageRgbF32, mask: &Mask) -> ImageRgbF32 {
    let mut out = ImageRgbF32::new(image.w, image.h);
    for_each_row_mut(&mut out.data, image.w, |y, row| {
        for ((dst, &src), &edge) in row.iter_mut().zip(image.row(y)).zip(mask.row(y)) {
            *dst = if edge { OUTLINE_COLOR } else { src };
        }
    });
    out
}
