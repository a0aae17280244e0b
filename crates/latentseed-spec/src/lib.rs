//! latentseed request library
//!
//! This crate provides types, validation, and hashing for latent noise
//! requests. A request describes one batch of noise used to seed an image
//! generation model's latent: pixel size, channel layout, noise family,
//! intensity, and seed.
//!
//! # Example
//!
//! ```
//! use latentseed_spec::{ModelType, NoiseFamily, NoiseRequest};
//! use latentseed_spec::validation::validate_request;
//! use latentseed_spec::hash::canonical_request_hash;
//!
//! let request = NoiseRequest::new(1024, 1024, NoiseFamily::Brown, 7)
//!     .with_model_type(ModelType::SixteenChannel)
//!     .with_intensity(1.5);
//!
//! assert!(validate_request(&request).is_ok());
//! assert_eq!(request.latent_shape().dims(), [1, 16, 128, 128]);
//!
//! let hash = canonical_request_hash(&request).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`request`]: Request, family, model type, and shape types
//! - [`node`]: Host node inputs and widget range enforcement
//! - [`validation`]: Request validation
//! - [`hash`]: Canonical request hashing
//! - [`resolution`]: Model resolution preset table
//! - [`report`]: Report types for synthesis runs

pub mod error;
pub mod hash;
pub mod node;
pub mod report;
pub mod request;
pub mod resolution;
pub mod validation;

pub use error::{
    BackendError, ErrorCode, GenerationError, SpecError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use hash::canonical_request_hash;
pub use node::{InputLimits, NodeInputs};
pub use report::{FieldStats, NoiseReport, REPORT_VERSION};
pub use request::{LatentShape, ModelType, NoiseFamily, NoiseRequest, LATENT_SCALE};
pub use resolution::{ResolutionPreset, ResolutionTable, CUSTOM_RESOLUTION};
pub use validation::validate_request;
