//! JSON output types for machine-readable CLI output.
//!
//! Every command's `--json` mode prints exactly one of these documents to
//! stdout so scripts can consume results without scraping colored text.

use latentseed_spec::{NoiseReport, ResolutionTable, ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Stable; validation errors pass their own `E0xx` codes through and
/// backend failures pass their `NOISE_0xx` codes through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Unknown noise label
    pub const UNKNOWN_LABEL: &str = "CLI_003";
    /// Unknown model name
    pub const UNKNOWN_MODEL: &str = "CLI_004";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "NOISE_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Canonical hash of the request (when it parsed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<String>,
    /// Latent shape `[b, c, h, w]` the request would produce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<[usize; 4]>,
}

impl ValidateOutput {
    /// Creates a validate output from collected diagnostics.
    pub fn new(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        request_hash: Option<String>,
        shape: Option<[usize; 4]>,
    ) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
            warnings,
            request_hash,
            shape,
        }
    }
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Run report (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<NoiseReport>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(report: NoiseReport, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            report: Some(report),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            report: None,
        }
    }
}

/// JSON output for the `resolve` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveOutput {
    /// Model name as given
    pub model: String,
    /// Preset name as given
    pub resolution: String,
    /// Resolved pixel width
    pub width: u32,
    /// Resolved pixel height
    pub height: u32,
    /// Whether a preset supplied the size (false means the manual size)
    pub from_preset: bool,
}

/// JSON output for the `resolutions` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionsOutput {
    /// Whether the lookup succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The (possibly filtered) table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<ResolutionTable>,
}

/// Converts an input error to a JsonError.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::UnknownLabel { .. } => error_codes::UNKNOWN_LABEL,
    };
    let error = JsonError::new(code, err.to_string());
    match file {
        Some(f) => error.with_file(f),
        None => error,
    }
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Serializes any output document for printing.
pub fn to_pretty<T: Serialize>(output: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}
