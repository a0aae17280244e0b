//! latentseed Noise Synthesis Backend
//!
//! This crate generates batches of latent noise for seeding image generation
//! models. Output is bit-identical given the same request, and every family
//! is normalized to unit standard deviation before intensity is applied, so
//! intensity means the same thing whichever family is chosen.
//!
//! # Families
//!
//! - **White**: independent standard-normal samples
//! - **Pink / Brown / Plasma**: white noise reshaped in the frequency domain
//!   to a `1/f`, `1/f^2`, or `1/f^3` power spectrum with the DC bin removed
//! - **Perlin**: four bicubically upsampled Gaussian octaves plus a faint
//!   full-resolution detail layer
//!
//! # Example
//!
//! ```
//! use latentseed_backend_noise::synthesize_noise;
//! use latentseed_spec::{NoiseFamily, NoiseRequest};
//!
//! let request = NoiseRequest::new(256, 256, NoiseFamily::White, 7)
//!     .with_batch_size(2)
//!     .with_channels(16)
//!     .with_intensity(2.0);
//!
//! let field = synthesize_noise(&request).unwrap();
//! assert_eq!(field.shape().dims(), [2, 16, 32, 32]);
//! assert!((field.std() - 2.0).abs() < 1e-9);
//! ```
//!
//! # Determinism
//!
//! - One PCG32 stream per request, seeded from the full 64-bit seed
//! - No global random state is read or written
//! - Fields above [`MAX_FIELD_SAMPLES`] are rejected before allocation
//! - Gaussian fields are drawn in `[batch, channel, row, column]` order; the
//!   Perlin family draws its octaves coarsest-last, then the detail layer

pub mod fft;
pub mod field;
pub mod octave;
pub mod resample;
pub mod rng;
pub mod spectral;
pub mod synthesize;

pub use field::NoiseField;
pub use octave::{Octave, FINE_TEXTURE_WEIGHT, OCTAVES};
pub use rng::DeterministicRng;
pub use synthesize::{
    normalize, synthesize, synthesize_noise, SynthesisContext, SynthesisError,
    MAX_FIELD_SAMPLES, NORMALIZATION_THRESHOLD,
};
