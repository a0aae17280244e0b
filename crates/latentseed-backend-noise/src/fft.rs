//! 2-D discrete Fourier transforms over field planes.
//!
//! A plane transform runs a 1-D FFT across every row, then across every
//! column. The inverse is normalized by `1 / (height * width)` so
//! `inverse(forward(x)) == x` up to rounding.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftDirection {
    /// Spatial to frequency domain.
    Forward,
    /// Frequency to spatial domain (normalized).
    Inverse,
}

/// Transform a row-major `height x width` plane in place.
pub fn fft2_in_place(
    planner: &mut FftPlanner<f64>,
    plane: &mut [Complex<f64>],
    height: usize,
    width: usize,
    direction: FftDirection,
) {
    debug_assert_eq!(plane.len(), height * width);
    if height == 0 || width == 0 {
        return;
    }

    let (row_fft, col_fft) = match direction {
        FftDirection::Forward => (
            planner.plan_fft_forward(width),
            planner.plan_fft_forward(height),
        ),
        FftDirection::Inverse => (
            planner.plan_fft_inverse(width),
            planner.plan_fft_inverse(height),
        ),
    };

    // Rows are contiguous, so one call covers all of them.
    row_fft.process(plane);

    let mut column = vec![Complex::new(0.0, 0.0); height];
    for x in 0..width {
        for (y, slot) in column.iter_mut().enumerate() {
            *slot = plane[y * width + x];
        }
        col_fft.process(&mut column);
        for (y, value) in column.iter().enumerate() {
            plane[y * width + x] = *value;
        }
    }

    if direction == FftDirection::Inverse {
        let norm = 1.0 / (height * width) as f64;
        for v in plane.iter_mut() {
            *v *= norm;
        }
    }
}

/// Sample frequencies of an `n`-point DFT, in cycles per sample.
///
/// Bin `k` maps to `k / n` for the first half and `(k - n) / n` for the
/// second, so the result reads `[0, 1, ..., -2, -1] / n`.
pub fn fftfreq(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let positive = (n - 1) / 2 + 1;
    let len = n as f64;
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 / len
            } else {
                (k as f64 - len) / len
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fftfreq_even() {
        assert_eq!(fftfreq(4), vec![0.0, 0.25, -0.5, -0.25]);
    }

    #[test]
    fn test_fftfreq_odd() {
        assert_eq!(fftfreq(5), vec![0.0, 0.2, 0.4, -0.4, -0.2]);
    }

    #[test]
    fn test_fftfreq_tiny() {
        assert_eq!(fftfreq(1), vec![0.0]);
        assert_eq!(fftfreq(2), vec![0.0, -0.5]);
        assert!(fftfreq(0).is_empty());
    }

    #[test]
    fn test_round_trip() {
        let (h, w) = (6, 10);
        let original: Vec<Complex<f64>> = (0..h * w)
            .map(|i| Complex::new((i as f64 * 0.37).sin(), 0.0))
            .collect();

        let mut planner = FftPlanner::new();
        let mut plane = original.clone();
        fft2_in_place(&mut planner, &mut plane, h, w, FftDirection::Forward);
        fft2_in_place(&mut planner, &mut plane, h, w, FftDirection::Inverse);

        for (a, b) in plane.iter().zip(original.iter()) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!(a.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_dc_bin_is_sum() {
        let (h, w) = (3, 4);
        let mut plane: Vec<Complex<f64>> = (0..h * w)
            .map(|i| Complex::new(i as f64, 0.0))
            .collect();
        let mut planner = FftPlanner::new();
        fft2_in_place(&mut planner, &mut plane, h, w, FftDirection::Forward);
        assert!((plane[0].re - 66.0).abs() < 1e-9);
        assert!(plane[0].im.abs() < 1e-9);
    }
}
