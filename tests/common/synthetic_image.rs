use photo2pixel::image::{ImageRgbF32, Rgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const RED: Rgb = [255.0, 0.0, 0.0];
pub const BLUE: Rgb = [0.0, 0.0, 255.0];
pub const BLACK: Rgb = [0.0, 0.0, 0.0];

/// Uniform image.
pub fn flat_rgb(width: usize, height: usize, color: Rgb) -> ImageRgbF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    ImageRgbF32::filled(width, height, color)
}

/// `left` for columns `< split_x`, `right` from `split_x` on.
pub fn split_rgb(width: usize, height: usize, split_x: usize, left: Rgb, right: Rgb) -> ImageRgbF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    ImageRgbF32::from_fn(width, height, |x, _| if x < split_x { left } else { right })
}

/// Checkerboard of `cell × cell` squares alternating between `a` and `b`.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize, a: Rgb, b: Rgb) -> ImageRgbF32 {
    assert!(cell > 0, "cell size must be positive");
    ImageRgbF32::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            a
        } else {
            b
        }
    })
}

/// Seeded "photo-like" image: smooth color ramps plus uniform noise.
pub fn noisy_photo_rgb(width: usize, height: usize, seed: u64) -> ImageRgbF32 {
    let mut rng = StdRng::seed_from_u64(seed);
    let (wf, hf) = (width.max(2) as f32 - 1.0, height.max(2) as f32 - 1.0);
    ImageRgbF32::from_fn(width, height, |x, y| {
        let base = [
            255.0 * x as f32 / wf,
            255.0 * y as f32 / hf,
            255.0 * (1.0 - x as f32 / wf),
        ];
        base.map(|v| (v + rng.random_range(-40.0f32..40.0)).clamp(0.0, 255.0))
    })
}

/// Fully random samples in [0, 255].
pub fn random_rgb(width: usize, height: usize, seed: u64) -> ImageRgbF32 {
    let mut rng = StdRng::seed_from_u64(seed);
    ImageRgbF32::from_fn(width, height, |_, _| {
        [
            rng.random_range(0.0f32..=255.0),
            rng.random_range(0.0f32..=255.0),
            rng.random_range(0.0f32..=255.0),
        ]
    })
}
