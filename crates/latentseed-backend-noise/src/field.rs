//! Latent noise field storage.

use latentseed_spec::{FieldStats, LatentShape};

use crate::rng::DeterministicRng;

/// A 4-D real field indexed `[batch, channel, row, column]`.
///
/// Storage is contiguous and row-major, so each `(batch, channel)` pair owns
/// one `height * width` plane and planes follow each other in batch-major
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    shape: LatentShape,
    data: Vec<f64>,
}

impl NoiseField {
    /// Create a field filled with a value.
    pub fn new(shape: LatentShape, fill: f64) -> Self {
        Self {
            shape,
            data: vec![fill; shape.len()],
        }
    }

    /// Create a zero-filled field.
    pub fn zeros(shape: LatentShape) -> Self {
        Self::new(shape, 0.0)
    }

    /// Create a field of standard-normal samples drawn in storage order.
    pub fn standard_normal(shape: LatentShape, rng: &mut DeterministicRng) -> Self {
        let mut field = Self::zeros(shape);
        rng.fill_normal(&mut field.data);
        field
    }

    /// Wrap data whose length is known to match `shape`.
    pub(crate) fn from_parts(shape: LatentShape, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), shape.len());
        Self { shape, data }
    }

    /// Wrap existing data. Returns `None` if the length does not match.
    pub fn from_vec(shape: LatentShape, data: Vec<f64>) -> Option<Self> {
        (data.len() == shape.len()).then_some(Self { shape, data })
    }

    /// Field dimensions.
    pub fn shape(&self) -> LatentShape {
        self.shape
    }

    /// All elements in storage order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn index(&self, b: usize, c: usize, y: usize, x: usize) -> usize {
        ((b * self.shape.channels + c) * self.shape.height + y) * self.shape.width + x
    }

    /// Iterate over the `(batch, channel)` planes in storage order.
    pub fn planes(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.shape.plane_len().max(1))
    }

    /// Iterate mutably over the `(batch, channel)` planes in storage order.
    pub fn planes_mut(&mut self) -> std::slice::ChunksExactMut<'_, f64> {
        let len = self.shape.plane_len().max(1);
        self.data.chunks_exact_mut(len)
    }

    /// Borrow one plane.
    pub fn plane(&self, b: usize, c: usize) -> &[f64] {
        let start = self.index(b, c, 0, 0);
        &self.data[start..start + self.shape.plane_len()]
    }

    /// Add `other * weight` element-wise. Shapes must match.
    pub fn add_scaled(&mut self, other: &NoiseField, weight: f64) {
        debug_assert_eq!(self.shape, other.shape);
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b * weight;
        }
    }

    /// Multiply every element by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in self.data.iter_mut() {
            *v *= factor;
        }
    }

    /// Divide every element by `divisor`.
    pub fn divide(&mut self, divisor: f64) {
        for v in self.data.iter_mut() {
            *v /= divisor;
        }
    }

    /// Arithmetic mean. Zero for an empty field.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Sample standard deviation with an `N - 1` denominator.
    ///
    /// Zero when the field has fewer than two elements.
    pub fn std(&self) -> f64 {
        let n = self.data.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.data.iter().map(|v| (v - mean) * (v - mean)).sum();
        (sum_sq / (n - 1) as f64).sqrt()
    }

    /// Mean, standard deviation, min, and max in one report.
    pub fn stats(&self) -> FieldStats {
        let (min, max) = if self.data.is_empty() {
            (0.0, 0.0)
        } else {
            self.data
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                })
        };
        FieldStats {
            mean: self.mean(),
            std: self.std(),
            min,
            max,
        }
    }

    /// Elements narrowed to `f32`, in storage order.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.data.iter().map(|&v| v as f32).collect()
    }
}
