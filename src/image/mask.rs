//! Binary per-pixel mask (row-major, stride == width).
use super::traits::ImageView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: Vec<bool>,
}

impl Mask {
    /// All-false mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![false; w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: bool) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.rows().map(|row| row.iter().filter(|&&b| b).count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&b| b)
    }

    /// True when every pixel set in `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &Mask) -> bool {
        self.dims() == other.dims()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| !a || b)
    }
}

impl ImageView for Mask {
    type Pixel = bool;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
