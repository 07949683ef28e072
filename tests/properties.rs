mod common;

use common::synthetic_image::{noisy_photo_rgb, random_rgb, BLACK};
use photo2pixel::edges::{dilate_box, detect_outline, sobel_response, threshold_response};
use photo2pixel::image::ImageRgbF32;
use photo2pixel::{composite, convert_with_params, convert_with_report, pixelize, PixelArtParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// (width, height, kernel, block) combinations drawn from a fixed seed,
/// including sizes that are not multiples of the block.
fn random_cases(seed: u64, n: usize) -> Vec<(usize, usize, usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                rng.random_range(1..48),
                rng.random_range(1..40),
                rng.random_range(1..12),
                rng.random_range(1..17),
            )
        })
        .collect()
}

fn bits(image: &ImageRgbF32) -> Vec<u32> {
    image.to_interleaved().iter().map(|v| v.to_bits()).collect()
}

#[test]
fn every_stage_preserves_extent() {
    for (i, (w, h, kernel, block)) in random_cases(11, 40).into_iter().enumerate() {
        let image = random_rgb(w, h, i as u64);
        let pixelized = pixelize(&image, 4, kernel, block).unwrap();
        assert_eq!((pixelized.w, pixelized.h), (w, h));

        let outline = detect_outline(&pixelized, 64.0, 3).unwrap();
        assert_eq!((outline.mask.w, outline.mask.h), (w, h));
        assert_eq!((outline.raw.w, outline.raw.h), (w, h));

        let out = composite(&pixelized, &outline.mask).unwrap();
        assert_eq!((out.w, out.h), (w, h));
    }
}

#[test]
fn conversion_is_bit_for_bit_deterministic() {
    let image = noisy_photo_rgb(53, 41, 99);
    for params in [PixelArtParams::default(), PixelArtParams::reference()] {
        let a = convert_with_params(&image, &params).unwrap();
        let b = convert_with_params(&image, &params).unwrap();
        assert_eq!(bits(&a), bits(&b));
    }
}

#[test]
fn concurrent_conversions_match_sequential_ones() {
    let images: Vec<ImageRgbF32> = (0..4).map(|s| noisy_photo_rgb(40, 30, s)).collect();
    let params = PixelArtParams::default();
    let sequential: Vec<Vec<u32>> = images
        .iter()
        .map(|img| bits(&convert_with_params(img, &params).unwrap()))
        .collect();

    let concurrent: Vec<Vec<u32>> = std::thread::scope(|scope| {
        let handles: Vec<_> = images
            .iter()
            .map(|img| scope.spawn(|| bits(&convert_with_params(img, &params).unwrap())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, concurrent);
}

#[test]
fn pixelized_tiles_are_uniform() {
    for (i, (w, h, kernel, block)) in random_cases(23, 40).into_iter().enumerate() {
        let image = noisy_photo_rgb(w, h, 1000 + i as u64);
        let out = pixelize(&image, 4, kernel, block).unwrap();
        for ty in (0..h).step_by(block) {
            for tx in (0..w).step_by(block) {
                let origin = out.get(tx, ty);
                for y in ty..(ty + block).min(h) {
                    for x in tx..(tx + block).min(w) {
                        assert_eq!(
                            out.get(x, y),
                            origin,
                            "tile ({tx}, {ty}) not uniform at ({x}, {y}) for {w}x{h} k={kernel} b={block}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn block_colors_stay_within_input_range() {
    let image = random_rgb(30, 30, 5);
    let out = pixelize(&image, 4, 6, 5).unwrap();
    for px in &out.data {
        for &v in px {
            assert!((0.0..=255.0 + 1e-3).contains(&v), "sample {v} out of range");
        }
    }
}

#[test]
fn lower_threshold_never_loses_edges() {
    let image = noisy_photo_rgb(64, 48, 17);
    let pixelized = pixelize(&image, 4, 4, 8).unwrap();
    let response = sobel_response(&pixelized);

    let thresholds = [400.0, 250.0, 128.0, 64.0, 10.0, 0.0];
    let masks: Vec<_> = thresholds
        .iter()
        .map(|&t| threshold_response(&response, t))
        .collect();
    for pair in masks.windows(2) {
        assert!(pair[0].is_subset_of(&pair[1]));
        assert!(pair[0].count() <= pair[1].count());
    }
}

#[test]
fn dilation_is_a_superset_for_every_size() {
    let image = random_rgb(33, 27, 8);
    let raw = detect_outline(&image, 200.0, 1).unwrap().raw;
    assert!(!raw.is_empty());
    let mut previous = raw.clone();
    for size in 1..=7 {
        let dilated = dilate_box(&raw, size).unwrap();
        assert!(raw.is_subset_of(&dilated), "size {size} lost pixels");
        assert!(previous.count() <= dilated.count());
        previous = dilated;
    }
}

#[test]
fn composited_pixels_are_black_exactly_under_the_mask() {
    let image = noisy_photo_rgb(45, 35, 4);
    let params = PixelArtParams::default().with_edge_threshold(60.0);
    let (out, report) = convert_with_report(&image, &params).unwrap();
    assert!(report.edge_pixels > 0);

    for y in 0..out.h {
        for x in 0..out.w {
            if report.edge_mask.get(x, y) {
                assert_eq!(out.get(x, y), BLACK);
            } else {
                assert_eq!(out.get(x, y), report.pixelized.get(x, y));
            }
        }
    }
}
