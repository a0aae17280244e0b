//! Batch determinism checks over many requests.

use latentseed_backend_noise::{synthesize_noise, NoiseField};
use latentseed_spec::{NoiseFamily, NoiseRequest};
use std::fmt;

use super::core::{verify_determinism, DeterminismResult};

/// Error type for determinism testing.
#[derive(Debug, Clone)]
pub enum DeterminismError {
    /// The request was rejected before any field was produced.
    GenerationFailed(String),
}

impl fmt::Display for DeterminismError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerationFailed(e) => write!(f, "Generation failed: {}", e),
        }
    }
}

impl std::error::Error for DeterminismError {}

/// Result for one named request.
#[derive(Debug)]
pub struct DeterminismReportEntry {
    /// Fixture name.
    pub name: String,
    /// Outcome of the check.
    pub result: Result<DeterminismResult, DeterminismError>,
}

impl DeterminismReportEntry {
    /// Check if this entry passed determinism verification.
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(r) if r.is_deterministic)
    }
}

/// Results across a set of requests.
#[derive(Debug, Default)]
pub struct DeterminismReport {
    /// One entry per request, in insertion order.
    pub entries: Vec<DeterminismReportEntry>,
}

impl DeterminismReport {
    /// Check if every request passed.
    pub fn all_deterministic(&self) -> bool {
        self.entries.iter().all(|e| e.passed())
    }

    /// Number of passing requests.
    pub fn passed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.passed()).count()
    }

    /// Entries that failed or errored.
    pub fn failures(&self) -> Vec<&DeterminismReportEntry> {
        self.entries.iter().filter(|e| !e.passed()).collect()
    }
}

impl fmt::Display for DeterminismReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Determinism: {}/{} passed",
            self.passed_count(),
            self.entries.len()
        )?;
        for entry in self.failures() {
            match &entry.result {
                Ok(result) => match &result.diff_info {
                    Some(diff) => writeln!(f, "  FAIL {}: {}", entry.name, diff)?,
                    None => writeln!(f, "  FAIL {}", entry.name)?,
                },
                Err(e) => writeln!(f, "  ERROR {}: {}", entry.name, e)?,
            }
        }
        Ok(())
    }
}

/// A set of requests checked together.
#[derive(Debug, Clone)]
pub struct DeterminismFixture {
    requests: Vec<(String, NoiseRequest)>,
    runs: usize,
}

impl Default for DeterminismFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl DeterminismFixture {
    /// Create an empty fixture with three runs per request.
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
            runs: 3,
        }
    }

    /// Add a named request.
    pub fn add_request(mut self, name: impl Into<String>, request: NoiseRequest) -> Self {
        self.requests.push((name.into(), request));
        self
    }

    /// Add one request per noise family at the given size and seed.
    pub fn add_all_families(mut self, width: u32, height: u32, seed: u64) -> Self {
        for family in NoiseFamily::ALL {
            let name = format!("{}_{}x{}_seed{}", family, width, height, seed);
            self.requests
                .push((name, NoiseRequest::new(width, height, family, seed)));
        }
        self
    }

    /// Set the number of runs per request (minimum 2).
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs.max(2);
        self
    }

    /// Number of requests in the fixture.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if the fixture has no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Check every request.
    pub fn run(&self) -> DeterminismReport {
        let entries = self
            .requests
            .iter()
            .map(|(name, request)| DeterminismReportEntry {
                name: name.clone(),
                result: check_request(request, self.runs),
            })
            .collect();
        DeterminismReport { entries }
    }
}

fn check_request(
    request: &NoiseRequest,
    runs: usize,
) -> Result<DeterminismResult, DeterminismError> {
    synthesize_noise(request).map_err(|e| DeterminismError::GenerationFailed(e.to_string()))?;

    let shape = request.latent_shape();
    Ok(verify_determinism(
        || synthesize_noise(request).unwrap_or_else(|_| NoiseField::zeros(shape)),
        runs,
    ))
}
