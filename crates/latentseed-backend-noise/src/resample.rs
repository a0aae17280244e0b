//! Bicubic plane resampling.
//!
//! Uses the Keys cubic convolution kernel with `A = -0.75` and half-pixel
//! centres: output sample `i` reads from source coordinate
//! `(i + 0.5) * in / out - 0.5`. Taps that fall outside the source are
//! clamped to the nearest edge sample.

/// Keys kernel parameter.
pub const CUBIC_A: f64 = -0.75;

#[inline]
fn cubic_near(x: f64) -> f64 {
    ((CUBIC_A + 2.0) * x - (CUBIC_A + 3.0)) * x * x + 1.0
}

#[inline]
fn cubic_far(x: f64) -> f64 {
    ((CUBIC_A * x - 5.0 * CUBIC_A) * x + 8.0 * CUBIC_A) * x - 4.0 * CUBIC_A
}

/// The four tap weights for fractional offset `t` in `[0, 1)`.
#[inline]
pub fn cubic_weights(t: f64) -> [f64; 4] {
    [
        cubic_far(t + 1.0),
        cubic_near(t),
        cubic_near(1.0 - t),
        cubic_far(2.0 - t),
    ]
}

/// Precomputed taps for resampling one axis.
struct AxisTaps {
    indices: Vec<[usize; 4]>,
    weights: Vec<[f64; 4]>,
}

impl AxisTaps {
    fn new(src_len: usize, dst_len: usize) -> Self {
        let scale = src_len as f64 / dst_len as f64;
        let last = src_len as isize - 1;

        let mut indices = Vec::with_capacity(dst_len);
        let mut weights = Vec::with_capacity(dst_len);
        for i in 0..dst_len {
            let real = scale * (i as f64 + 0.5) - 0.5;
            let base = real.floor();
            let t = real - base;
            let base = base as isize;

            let mut idx = [0usize; 4];
            for (k, slot) in idx.iter_mut().enumerate() {
                *slot = (base - 1 + k as isize).clamp(0, last) as usize;
            }
            indices.push(idx);
            weights.push(cubic_weights(t));
        }
        Self { indices, weights }
    }
}

/// Resample a row-major `src_h x src_w` plane to `dst_h x dst_w`.
///
/// Axes whose size does not change are copied through unchanged.
pub fn resize_bicubic(
    src: &[f64],
    src_h: usize,
    src_w: usize,
    dst_h: usize,
    dst_w: usize,
) -> Vec<f64> {
    debug_assert_eq!(src.len(), src_h * src_w);
    if src_h == 0 || src_w == 0 || dst_h == 0 || dst_w == 0 {
        return vec![0.0; dst_h * dst_w];
    }

    // Horizontal pass: src_h x dst_w
    let horizontal = if src_w == dst_w {
        src.to_vec()
    } else {
        let taps = AxisTaps::new(src_w, dst_w);
        let mut out = Vec::with_capacity(src_h * dst_w);
        for row in src.chunks_exact(src_w) {
            for (idx, w) in taps.indices.iter().zip(taps.weights.iter()) {
                out.push(
                    row[idx[0]] * w[0] + row[idx[1]] * w[1] + row[idx[2]] * w[2] + row[idx[3]] * w[3],
                );
            }
        }
        out
    };

    // Vertical pass: dst_h x dst_w
    if src_h == dst_h {
        return horizontal;
    }
    let taps = AxisTaps::new(src_h, dst_h);
    let mut out = Vec::with_capacity(dst_h * dst_w);
    for (idx, w) in taps.indices.iter().zip(taps.weights.iter()) {
        for x in 0..dst_w {
            let at = |y: usize| horizontal[y * dst_w + x];
            out.push(at(idx[0]) * w[0] + at(idx[1]) * w[1] + at(idx[2]) * w[2] + at(idx[3]) * w[3]);
        }
    }
    out
}
