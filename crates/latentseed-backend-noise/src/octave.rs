//! Multi-octave approximate Perlin noise.
//!
//! Coarse Gaussian grids are upsampled bicubically to full latent size and
//! blended with halving weights, then a faint full-resolution layer restores
//! per-cell detail. Much cheaper than gradient noise and close enough in look
//! for seeding a latent.

use latentseed_spec::LatentShape;

use crate::field::NoiseField;
use crate::resample::resize_bicubic;
use crate::rng::DeterministicRng;

/// One octave: synthesize at `1 / factor` linear resolution, blend at `weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octave {
    /// Linear downscale factor.
    pub factor: usize,
    /// Blend weight.
    pub weight: f64,
}

/// Octave table, coarsest last. Drawn in this order.
pub const OCTAVES: [Octave; 4] = [
    Octave { factor: 2, weight: 0.5 },
    Octave { factor: 4, weight: 0.25 },
    Octave { factor: 8, weight: 0.125 },
    Octave { factor: 16, weight: 0.0625 },
];

/// Weight of the full-resolution detail layer.
pub const FINE_TEXTURE_WEIGHT: f64 = 0.05;

impl Octave {
    /// Size of this octave's coarse grid for a full-size `shape`.
    pub fn coarse_shape(&self, shape: LatentShape) -> LatentShape {
        LatentShape::new(
            shape.batch,
            shape.channels,
            (shape.height / self.factor).max(1),
            (shape.width / self.factor).max(1),
        )
    }
}

/// Upsample every plane of `coarse` to `shape`'s spatial size.
fn upsample(coarse: &NoiseField, shape: LatentShape) -> NoiseField {
    let small = coarse.shape();
    let mut data = Vec::with_capacity(shape.len());
    for plane in coarse.planes() {
        data.extend(resize_bicubic(
            plane,
            small.height,
            small.width,
            shape.height,
            shape.width,
        ));
    }
    NoiseField::from_parts(shape, data)
}

/// Generate approximate Perlin noise at `shape`.
pub fn perlin_noise(shape: LatentShape, rng: &mut DeterministicRng) -> NoiseField {
    let mut acc = NoiseField::zeros(shape);
    if shape.is_empty() {
        return acc;
    }

    for octave in OCTAVES {
        let coarse = NoiseField::standard_normal(octave.coarse_shape(shape), rng);
        acc.add_scaled(&upsample(&coarse, shape), octave.weight);
    }

    let fine = NoiseField::standard_normal(shape, rng);
    acc.add_scaled(&fine, FINE_TEXTURE_WEIGHT);
    acc
}
