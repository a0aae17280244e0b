//! Main entry point for noise synthesis.
//!
//! [`synthesize`] turns a [`NoiseRequest`] into a [`NoiseField`]:
//!
//! 1. Validate the request (shape, channels, intensity) and bound its size.
//! 2. Seed a request-scoped PCG32 stream from `request.seed`.
//! 3. Generate the raw field for the requested family.
//! 4. Normalize to unit sample standard deviation.
//! 5. Multiply by `request.intensity`.

use rustfft::FftPlanner;
use thiserror::Error;

use latentseed_spec::validation::validate_request;
use latentseed_spec::{BackendError, ErrorCode, LatentShape, NoiseFamily, NoiseRequest};

use crate::field::NoiseField;
use crate::octave::perlin_noise;
use crate::rng::DeterministicRng;
use crate::spectral::power_law_noise;

/// Fields whose standard deviation is at or below this are left unnormalized.
pub const NORMALIZATION_THRESHOLD: f64 = 1e-6;

/// Largest field, in samples, a single call will allocate.
///
/// Equals the biggest field the host's input limits allow: batch 64,
/// 16 channels, 8192x8192 pixels.
pub const MAX_FIELD_SAMPLES: usize = 64 * 16 * 1024 * 1024;

/// Errors from noise synthesis.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("invalid latent shape {shape} for {family} noise: {reason}")]
    InvalidShape {
        shape: LatentShape,
        family: NoiseFamily,
        reason: String,
    },

    #[error("invalid parameter for {family} noise at shape {shape}: {reason}")]
    InvalidParameter {
        shape: LatentShape,
        family: NoiseFamily,
        reason: String,
    },
}

impl BackendError for SynthesisError {
    fn code(&self) -> &'static str {
        match self {
            SynthesisError::InvalidShape { .. } => "NOISE_001",
            SynthesisError::InvalidParameter { .. } => "NOISE_002",
        }
    }

    fn category(&self) -> &'static str {
        "noise"
    }
}

/// Execution context passed into every synthesis call.
///
/// Holds the FFT plan cache so repeated calls at one latent size plan their
/// transforms once. The context never changes the numbers a call produces;
/// two calls with equal requests return equal fields whether they share a
/// context or not.
pub struct SynthesisContext {
    planner: FftPlanner<f64>,
}

impl SynthesisContext {
    /// Create a context with an empty plan cache.
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// The FFT planner used by the spectral families.
    pub fn planner(&mut self) -> &mut FftPlanner<f64> {
        &mut self.planner
    }
}

impl Default for SynthesisContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SynthesisContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesisContext").finish_non_exhaustive()
    }
}

/// Check a request before any allocation.
fn check_request(request: &NoiseRequest) -> Result<(), SynthesisError> {
    let shape = request.latent_shape();
    let family = request.noise_family;

    let result = validate_request(request);
    let Some(error) = result.errors.into_iter().next() else {
        return check_size(shape, family);
    };

    let reason = error.to_string();
    match error.code {
        ErrorCode::LatentTooSmall | ErrorCode::InvalidBatchSize => {
            Err(SynthesisError::InvalidShape {
                shape,
                family,
                reason,
            })
        }
        ErrorCode::UnsupportedChannels | ErrorCode::InvalidIntensity => {
            Err(SynthesisError::InvalidParameter {
                shape,
                family,
                reason,
            })
        }
    }
}

/// Reject shapes whose sample count overflows or exceeds [`MAX_FIELD_SAMPLES`].
fn check_size(shape: LatentShape, family: NoiseFamily) -> Result<(), SynthesisError> {
    let reason = match shape.checked_len() {
        Some(len) if len <= MAX_FIELD_SAMPLES => return Ok(()),
        Some(len) => format!(
            "{} samples exceeds the maximum of {}",
            len, MAX_FIELD_SAMPLES
        ),
        None => "sample count overflows".to_string(),
    };
    Err(SynthesisError::InvalidShape {
        shape,
        family,
        reason,
    })
}

/// Generate the unnormalized field for a family.
fn raw_field(
    family: NoiseFamily,
    shape: LatentShape,
    rng: &mut DeterministicRng,
    ctx: &mut SynthesisContext,
) -> NoiseField {
    match family {
        NoiseFamily::White => NoiseField::standard_normal(shape, rng),
        NoiseFamily::Perlin => perlin_noise(shape, rng),
        NoiseFamily::Pink | NoiseFamily::Brown | NoiseFamily::Plasma => {
            let alpha = family.spectral_exponent().unwrap_or(0.0);
            power_law_noise(shape, alpha, rng, ctx.planner())
        }
    }
}

/// Scale `field` to unit sample standard deviation, then by `intensity`.
pub fn normalize(field: &mut NoiseField, intensity: f64) {
    let std = field.std();
    if std > NORMALIZATION_THRESHOLD {
        field.divide(std);
    }
    field.scale(intensity);
}

/// Synthesize one batch of latent noise.
///
/// # Example
/// ```
/// use latentseed_backend_noise::{synthesize, SynthesisContext};
/// use latentseed_spec::{NoiseFamily, NoiseRequest};
///
/// let request = NoiseRequest::new(512, 512, NoiseFamily::Pink, 42);
/// let mut ctx = SynthesisContext::new();
/// let field = synthesize(&request, &mut ctx).unwrap();
/// assert_eq!(field.shape().dims(), [1, 4, 64, 64]);
/// ```
pub fn synthesize(
    request: &NoiseRequest,
    ctx: &mut SynthesisContext,
) -> Result<NoiseField, SynthesisError> {
    check_request(request)?;

    let shape = request.latent_shape();
    let mut rng = DeterministicRng::new(request.seed);
    let mut field = raw_field(request.noise_family, shape, &mut rng, ctx);
    normalize(&mut field, request.intensity);
    Ok(field)
}

/// Synthesize with a fresh [`SynthesisContext`].
pub fn synthesize_noise(request: &NoiseRequest) -> Result<NoiseField, SynthesisError> {
    synthesize(request, &mut SynthesisContext::new())
}
