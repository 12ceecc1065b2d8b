//! Test sample generation
//!
//! Provides sample sets for round-trip and parity evaluation.

use chromaconv_core::{Rgb8, Vector3, to_vector};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample set types
#[derive(Debug, Clone, Copy)]
pub enum Sample {
    /// RGB color cube corners except black (7 colors)
    ColorCube,
    /// Every 8-bit gray except black
    Grayscale,
    /// Uniform random RGB in (0, 1] with seed
    Random(u64),
    /// Every channel at 8-bit steps of 17 (16³ colors minus black)
    Grid,
}

/// Generate samples as 0-1 vectors
///
/// Black is never produced: its chromaticity is undefined.
pub fn generate_samples(sample: Sample, count: usize) -> Vec<Vector3> {
    match sample {
        Sample::ColorCube => [
            [255u8, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 255, 255],
        ]
        .into_iter()
        .map(|c| to_vector(Rgb8::from(c)))
        .collect(),
        Sample::Grayscale => (1..=255u8)
            .map(|v| to_vector(Rgb8::new(v, v, v)))
            .collect(),
        Sample::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    Vector3::new(
                        rng.gen_range(f64::EPSILON..=1.0),
                        rng.gen_range(f64::EPSILON..=1.0),
                        rng.gen_range(f64::EPSILON..=1.0),
                    )
                })
                .collect()
        }
        Sample::Grid => {
            let steps: Vec<u8> = (0..=15).map(|i| i * 17).collect();
            let mut out = Vec::with_capacity(steps.len().pow(3));
            for &r in &steps {
                for &g in &steps {
                    for &b in &steps {
                        if (r, g, b) != (0, 0, 0) {
                            out.push(to_vector(Rgb8::new(r, g, b)));
                        }
                    }
                }
            }
            out
        }
    }
}

/// Generate samples as display colors
pub fn generate_colors(sample: Sample, count: usize) -> Vec<Rgb8> {
    generate_samples(sample, count)
        .into_iter()
        .map(chromaconv_core::to_color)
        .collect()
}
