//! Report types for synthesis runs.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::request::{LatentShape, NoiseRequest};

/// Current report format version.
pub const REPORT_VERSION: u32 = 1;

/// Summary statistics of a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Arithmetic mean of all elements.
    pub mean: f64,
    /// Sample standard deviation (N - 1 denominator).
    pub std: f64,
    /// Smallest element.
    pub min: f64,
    /// Largest element.
    pub max: f64,
}

/// Report describing one synthesis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseReport {
    /// Report format version.
    pub report_version: u32,
    /// Canonical BLAKE3 hash of the request.
    pub request_hash: String,
    /// The request that was synthesized.
    pub request: NoiseRequest,
    /// Output dimensions.
    pub shape: LatentShape,
    /// Output statistics.
    pub stats: FieldStats,
    /// Where the field was written, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Output encoding ("f32le" or "json"), if written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    /// Wall-clock synthesis time in milliseconds.
    pub duration_ms: u64,
}

impl NoiseReport {
    /// Creates a report for a finished run.
    pub fn new(
        request_hash: impl Into<String>,
        request: NoiseRequest,
        shape: LatentShape,
        stats: FieldStats,
        duration_ms: u64,
    ) -> Self {
        Self {
            report_version: REPORT_VERSION,
            request_hash: request_hash.into(),
            request,
            shape,
            stats,
            output_path: None,
            output_format: None,
            duration_ms,
        }
    }

    /// Records where and how the field was written.
    pub fn with_output(mut self, path: impl Into<String>, format: impl Into<String>) -> Self {
        self.output_path = Some(path.into());
        self.output_format = Some(format.into());
        self
    }

    /// Serializes the report to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
