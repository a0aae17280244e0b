//! Power-law spectral noise (pink, brown, plasma).
//!
//! White noise is transformed to the frequency domain, every bin is scaled by
//! `1 / |f|^(alpha / 2)`, and the result is transformed back. The power
//! spectrum therefore falls off as `1 / |f|^alpha`. The DC bin is forced to
//! zero so every plane comes out with zero mean.

use latentseed_spec::LatentShape;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::fft::{fft2_in_place, fftfreq, FftDirection};
use crate::field::NoiseField;
use crate::rng::DeterministicRng;

/// Added to every frequency magnitude so the DC bin never divides by zero.
pub const FREQUENCY_EPSILON: f64 = 1e-8;

/// Per-bin amplitude scale for a `height x width` spectrum.
///
/// Row-major like the spectrum it multiplies. Entry `[0]` (the DC bin) is
/// always exactly zero.
pub fn power_law_scale(height: usize, width: usize, alpha: f64) -> Vec<f64> {
    let fy = fftfreq(height);
    let fx = fftfreq(width);
    let exponent = alpha / 2.0;

    let mut scale = Vec::with_capacity(height * width);
    for &dy in &fy {
        for &dx in &fx {
            let magnitude = (dy * dy + dx * dx).sqrt() + FREQUENCY_EPSILON;
            scale.push(1.0 / magnitude.powf(exponent));
        }
    }
    if let Some(dc) = scale.first_mut() {
        *dc = 0.0;
    }
    scale
}

/// Reshape every plane of `field` to a `1 / |f|^alpha` power spectrum.
///
/// Keeps only the real part of the inverse transform.
pub fn apply_power_law(field: &mut NoiseField, alpha: f64, planner: &mut FftPlanner<f64>) {
    let shape = field.shape();
    if shape.is_empty() {
        return;
    }
    let (height, width) = (shape.height, shape.width);
    let scale = power_law_scale(height, width, alpha);
    let mut spectrum = vec![Complex::new(0.0, 0.0); height * width];

    for plane in field.planes_mut() {
        for (bin, &v) in spectrum.iter_mut().zip(plane.iter()) {
            *bin = Complex::new(v, 0.0);
        }

        fft2_in_place(planner, &mut spectrum, height, width, FftDirection::Forward);
        for (bin, &s) in spectrum.iter_mut().zip(scale.iter()) {
            *bin *= s;
        }
        fft2_in_place(planner, &mut spectrum, height, width, FftDirection::Inverse);

        for (v, bin) in plane.iter_mut().zip(spectrum.iter()) {
            *v = bin.re;
        }
    }
}

/// Draw white noise at `shape` and shape it to a `1 / |f|^alpha` spectrum.
pub fn power_law_noise(
    shape: LatentShape,
    alpha: f64,
    rng: &mut DeterministicRng,
    planner: &mut FftPlanner<f64>,
) -> NoiseField {
    let mut field = NoiseField::standard_normal(shape, rng);
    apply_power_law(&mut field, alpha, planner);
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mean absolute difference between horizontal neighbours, relative to std.
    fn roughness(field: &NoiseField) -> f64 {
        let shape = field.shape();
        let mut total = 0.0;
        let mut count = 0usize;
        for plane in field.planes() {
            for row in plane.chunks_exact(shape.width) {
                for pair in row.windows(2) {
                    total += (pair[1] - pair[0]).abs();
                    count += 1;
                }
            }
        }
        (total / count as f64) / field.std()
    }

    #[test]
    fn test_scale_grid_dc_is_zero() {
        let scale = power_law_scale(8, 8, 2.0);
        assert_eq!(scale.len(), 64);
        assert_eq!(scale[0], 0.0);
        assert!(scale[1..].iter().all(|&s| s > 0.0 && s.is_finite()));
    }

    #[test]
    fn test_scale_grid_falls_with_frequency() {
        let scale = power_law_scale(16, 16, 1.0);
        // Bins (0,1) and (0,4) along the first row.
        assert!(scale[1] > scale[4]);
        // alpha = 1 => scale = 1 / sqrt(|f|)
        let expected = 1.0 / (1.0f64 / 16.0 + FREQUENCY_EPSILON).sqrt();
        assert!((scale[1] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_alpha_keeps_white_except_dc() {
        let scale = power_law_scale(4, 4, 0.0);
        assert_eq!(scale[0], 0.0);
        assert!(scale[1..].iter().all(|&s| s == 1.0));
    }

    #[test]
    fn test_planes_have_zero_mean() {
        let shape = LatentShape::new(2, 4, 16, 24);
        let mut planner = FftPlanner::new();
        let field = power_law_noise(shape, 2.0, &mut DeterministicRng::new(3), &mut planner);

        for plane in field.planes() {
            let mean = plane.iter().sum::<f64>() / plane.len() as f64;
            assert!(mean.abs() < 1e-10, "plane mean {}", mean);
        }
    }

    #[test]
    fn test_higher_alpha_is_smoother() {
        let shape = LatentShape::new(1, 4, 32, 32);
        let mut planner = FftPlanner::new();
        let pink = power_law_noise(shape, 1.0, &mut DeterministicRng::new(11), &mut planner);
        let plasma = power_law_noise(shape, 3.0, &mut DeterministicRng::new(11), &mut planner);

        assert!(roughness(&plasma) < roughness(&pink));
    }

    #[test]
    fn test_single_cell_plane_becomes_zero() {
        let shape = LatentShape::new(1, 1, 1, 1);
        let mut planner = FftPlanner::new();
        let field = power_law_noise(shape, 1.0, &mut DeterministicRng::new(1), &mut planner);
        assert_eq!(field.data(), &[0.0]);
    }
}
