//! Owned RGB float image, the buffer type every pipeline stage consumes and
//! produces.
//!
//! Pixels are stored row-major as `[r, g, b]` triples with samples on the
//! `[0, 255]` scale. Constructors that accept caller data validate the shape;
//! [`ImageRgbF32::validate`] re-checks an already built value (the fields are
//! public, so a buffer can be tampered with after construction).
use super::traits::ImageView;
use crate::error::{PixelArtError, Result};

/// One RGB sample triple.
pub type Rgb = [f32; 3];

/// Number of color channels carried by [`ImageRgbF32`].
pub const CHANNELS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageRgbF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgb>,
}

impl ImageRgbF32 {
    /// Black image of size `w × h`. No shape validation: used for buffers the
    /// pipeline allocates itself.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, [0.0; CHANNELS])
    }

    /// Image of size `w × h` with every pixel set to `color`.
    pub fn filled(w: usize, h: usize, color: Rgb) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![color; w * h],
        }
    }

    /// Build an image by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Wrap a pixel vector, checking that it holds exactly `w * h` triples.
    pub fn from_pixels(w: usize, h: usize, data: Vec<Rgb>) -> Result<Self> {
        check_dims(w, h)?;
        if data.len() != w * h {
            return Err(PixelArtError::BufferLength {
                width: w,
                height: h,
                channels: CHANNELS,
                expected: w * h * CHANNELS,
                actual: data.len() * CHANNELS,
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Wrap an interleaved `R,G,B,R,G,B,...` sample vector of length `w * h * 3`.
    pub fn from_interleaved(w: usize, h: usize, samples: Vec<f32>) -> Result<Self> {
        check_dims(w, h)?;
        let expected = w * h * CHANNELS;
        if samples.len() != expected {
            return Err(PixelArtError::BufferLength {
                width: w,
                height: h,
                channels: CHANNELS,
                expected,
                actual: samples.len(),
            });
        }
        let data = samples
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Flatten back into interleaved `R,G,B` samples.
    pub fn to_interleaved(&self) -> Vec<f32> {
        self.data.iter().flat_map(|px| px.iter().copied()).collect()
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Rgb) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Check the invariants every stage relies on: non-empty, a backing buffer
    /// of exactly `w * h` pixels, and finite samples only.
    pub fn validate(&self) -> Result<()> {
        check_dims(self.w, self.h)?;
        if self.stride != self.w || self.data.len() != self.w * self.h {
            return Err(PixelArtError::BufferLength {
                width: self.w,
                height: self.h,
                channels: CHANNELS,
                expected: self.w * self.h * CHANNELS,
                actual: self.data.len() * CHANNELS,
            });
        }
        if let Some(i) = self
            .data
            .iter()
            .position(|px| px.iter().any(|v| !v.is_finite()))
        {
            return Err(PixelArtError::NonFiniteSample {
                x: i % self.w,
                y: i / self.w,
            });
        }
        Ok(())
    }
}

fn check_dims(w: usize, h: usize) -> Result<()> {
    if w == 0 || h == 0 {
        return Err(PixelArtError::EmptyImage {
            width: w,
            height: h,
        });
    }
    Ok(())
}

impl ImageView for ImageRgbF32 {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
