//! Core determinism verification.

use latentseed_backend_noise::NoiseField;
use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical fields.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Number of samples in the reference field.
    pub samples: usize,
    /// BLAKE3 hash of the reference field's bytes.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first sample that differed between runs.
#[derive(Debug, Clone)]
pub struct DiffInfo {
    /// Flat sample index (`None` when the shapes differ).
    pub index: Option<usize>,
    /// Reference value or shape.
    pub expected: String,
    /// Value or shape from the differing run.
    pub actual: String,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(
                f,
                "Difference at sample {}: expected {}, got {} (run {})",
                index, self.expected, self.actual, self.run_index
            ),
            None => write!(
                f,
                "Shape differs: expected {}, got {} (run {})",
                self.expected, self.actual, self.run_index
            ),
        }
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Samples: {}\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.samples, self.hash, diff
            );
        }
    }
}

/// Little-endian bytes of every sample, in storage order.
pub fn field_bytes(field: &NoiseField) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(field.data().len() * 8);
    for v in field.data() {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}

fn first_difference(
    expected: &NoiseField,
    actual: &NoiseField,
    run_index: usize,
) -> Option<DiffInfo> {
    if expected.shape() != actual.shape() {
        return Some(DiffInfo {
            index: None,
            expected: expected.shape().to_string(),
            actual: actual.shape().to_string(),
            run_index,
        });
    }

    expected
        .data()
        .iter()
        .zip(actual.data())
        .position(|(e, a)| e.to_bits() != a.to_bits())
        .map(|index| DiffInfo {
            index: Some(index),
            expected: format!("{:e}", expected.data()[index]),
            actual: format!("{:e}", actual.data()[index]),
            run_index,
        })
}

/// Run `generate_fn` `runs` times and check every field matches the first.
///
/// # Example
///
/// ```rust,ignore
/// let result = verify_determinism(|| synthesize_noise(&request).unwrap(), 3);
/// assert!(result.is_deterministic);
/// ```
pub fn verify_determinism<F>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> NoiseField,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let hash = blake3::hash(&field_bytes(&reference)).to_hex().to_string();
    let samples = reference.data().len();

    let diff_info = (1..runs).find_map(|run_index| {
        let output = generate_fn();
        first_difference(&reference, &output, run_index)
    });

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        samples,
        hash,
        diff_info,
    }
}
