//! Error types for request validation and processing.

use thiserror::Error;

/// Error codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Width or height too small to produce a latent of at least 1x1
    LatentTooSmall,
    /// E002: Batch size is zero
    InvalidBatchSize,
    /// E003: Channel count is not a supported latent layout
    UnsupportedChannels,
    /// E004: Intensity is negative or not finite
    InvalidIntensity,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::LatentTooSmall => "E001",
            ErrorCode::InvalidBatchSize => "E002",
            ErrorCode::UnsupportedChannels => "E003",
            ErrorCode::InvalidIntensity => "E004",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Dimension below the recommended minimum of 64 pixels
    BelowRecommendedSize,
    /// W002: Dimension is not a multiple of 8 and will be floored
    NotMultipleOfEight,
    /// W003: Value lies outside the host node's input limits
    OutsideHostLimits,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::BelowRecommendedSize => "W001",
            WarningCode::NotMultipleOfEight => "W002",
            WarningCode::OutsideHostLimits => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "width").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for request operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A host label did not map to any known variant.
    #[error("unknown {kind} label: '{label}'")]
    UnknownLabel {
        /// What the label was meant to select ("noise type", "model").
        kind: &'static str,
        /// The label as received.
        label: String,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result of request validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so callers can report
/// failures with a stable code and category regardless of which backend
/// produced them.
///
/// ```ignore
/// use latentseed_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Stable error code, e.g. "NOISE_001".
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping, e.g. "noise".
    fn category(&self) -> &'static str;
}

/// A unified error that can wrap any backend error.
///
/// Lets front ends handle failures uniformly without depending on each
/// backend's concrete error enum.
#[derive(Debug)]
pub struct GenerationError {
    /// The error code (e.g., "NOISE_001").
    pub code: &'static str,
    /// The human-readable error message.
    pub message: String,
    /// The error category (e.g., "noise").
    pub category: &'static str,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenerationError {
    /// Create a `GenerationError` from any `BackendError` implementor.
    pub fn from_backend<E: BackendError + Send + Sync + 'static>(err: E) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            category: err.category(),
            source: Some(Box::new(err)),
        }
    }

    /// Create a `GenerationError` with explicit values.
    pub fn new(code: &'static str, message: impl Into<String>, category: &'static str) -> Self {
        Self {
            code,
            message: message.into(),
            category,
            source: None,
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
