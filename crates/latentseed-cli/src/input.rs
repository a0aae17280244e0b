//! Request loading for CLI commands.
//!
//! A request comes either from a JSON document on disk or from individual
//! command-line flags. Flag-built requests go through the same clamping and
//! label resolution the host node applies.

use latentseed_spec::{InputLimits, ModelType, NodeInputs, NoiseRequest, SpecError};
use std::path::{Path, PathBuf};

/// A request loaded from disk, with provenance.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed request.
    pub request: NoiseRequest,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while building a request.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// A noise label did not name any family.
    UnknownLabel { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => write!(f, "JSON parse error: {}", message),
            InputError::UnknownLabel { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a request from a JSON file.
pub fn load_request(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let request = NoiseRequest::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        request,
        source_hash,
    })
}

/// Request fields given as individual flags.
#[derive(Debug, Clone)]
pub struct RequestFlags {
    pub width: u32,
    pub height: u32,
    pub batch_size: u32,
    /// Model label; ignored when `channels` is set.
    pub model_type: Option<String>,
    /// Explicit channel count (4 or 16).
    pub channels: Option<u32>,
    pub noise: String,
    pub intensity: f64,
    pub seed: u64,
}

impl Default for RequestFlags {
    fn default() -> Self {
        let inputs = NodeInputs::default();
        Self {
            width: inputs.width,
            height: inputs.height,
            batch_size: inputs.batch_size,
            model_type: None,
            channels: None,
            noise: inputs.noise_type,
            intensity: inputs.intensity,
            seed: inputs.seed,
        }
    }
}

impl RequestFlags {
    /// Build a request the way the host node would.
    ///
    /// An unsupported `channels` value is kept as-is so validation can
    /// report it instead of silently picking a model.
    pub fn to_request(&self) -> Result<NoiseRequest, InputError> {
        let model_label = match (self.channels, self.model_type.as_deref()) {
            (Some(channels), _) => ModelType::from_channels(channels)
                .unwrap_or(ModelType::FourChannel)
                .label()
                .to_string(),
            (None, Some(label)) => label.to_string(),
            (None, None) => ModelType::FourChannel.label().to_string(),
        };

        let inputs = NodeInputs {
            width: self.width,
            height: self.height,
            batch_size: self.batch_size,
            model_type: model_label,
            noise_type: self.noise.clone(),
            intensity: self.intensity,
            seed: self.seed,
        };

        let request = NoiseRequest::from_node_inputs_with_limits(&inputs, &InputLimits::default())
            .map_err(|e| match e {
                SpecError::UnknownLabel { .. } => InputError::UnknownLabel {
                    message: e.to_string(),
                },
                other => InputError::JsonParse {
                    message: other.to_string(),
                },
            })?;

        match self.channels {
            Some(channels) if ModelType::from_channels(channels).is_none() => {
                Ok(request.with_channels(channels))
            }
            _ => Ok(request),
        }
    }
}
