//! Request validation.
//!
//! Validation collects every problem in one pass so callers can report them
//! together. Errors block synthesis; warnings describe inputs that are legal
//! but differ from what the host node would have produced.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::node::InputLimits;
use crate::request::{ModelType, NoiseRequest, LATENT_SCALE};

/// Smallest pixel size the synthesizer accepts (one latent cell).
pub const MIN_PIXEL_SIZE: u32 = LATENT_SCALE;

/// Smallest pixel size the host node recommends.
pub const RECOMMENDED_PIXEL_SIZE: u32 = 64;

/// Validates a noise request.
///
/// # Example
/// ```
/// use latentseed_spec::{NoiseFamily, NoiseRequest};
/// use latentseed_spec::validation::validate_request;
///
/// let request = NoiseRequest::new(512, 512, NoiseFamily::Pink, 42);
/// assert!(validate_request(&request).is_ok());
/// ```
pub fn validate_request(request: &NoiseRequest) -> ValidationResult {
    let mut result = ValidationResult::success();
    let limits = InputLimits::default();

    validate_dimension(request.width, "width", &limits, &mut result);
    validate_dimension(request.height, "height", &limits, &mut result);

    if request.batch_size == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidBatchSize,
            "batch_size must be at least 1",
            "batch_size",
        ));
    } else if !limits.batch_in_range(request.batch_size) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::OutsideHostLimits,
            format!(
                "batch_size {} is outside the host range [{}, {}]",
                request.batch_size, limits.batch_min, limits.batch_max
            ),
            "batch_size",
        ));
    }

    if ModelType::from_channels(request.channels).is_none() {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedChannels,
            format!("channels must be 4 or 16, got {}", request.channels),
            "channels",
        ));
    }

    if !request.intensity.is_finite() || request.intensity < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidIntensity,
            format!(
                "intensity must be a finite non-negative number, got {}",
                request.intensity
            ),
            "intensity",
        ));
    } else if !limits.intensity_in_range(request.intensity) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::OutsideHostLimits,
            format!(
                "intensity {} is outside the host range [{}, {}]",
                request.intensity, limits.intensity_min, limits.intensity_max
            ),
            "intensity",
        ));
    }

    result
}

fn validate_dimension(
    value: u32,
    name: &'static str,
    limits: &InputLimits,
    result: &mut ValidationResult,
) {
    if value < MIN_PIXEL_SIZE {
        result.add_error(ValidationError::with_path(
            ErrorCode::LatentTooSmall,
            format!(
                "{} must be at least {} pixels to produce a latent, got {}",
                name, MIN_PIXEL_SIZE, value
            ),
            name,
        ));
        return;
    }

    if value < RECOMMENDED_PIXEL_SIZE {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::BelowRecommendedSize,
            format!(
                "{} {} is below the recommended {} pixels",
                name, value, RECOMMENDED_PIXEL_SIZE
            ),
            name,
        ));
    } else if !limits.size_in_range(value) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::OutsideHostLimits,
            format!(
                "{} {} is outside the host range [{}, {}]",
                name, value, limits.size_min, limits.size_max
            ),
            name,
        ));
    }

    if value % LATENT_SCALE != 0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NotMultipleOfEight,
            format!(
                "{} {} is not a multiple of {}; latent size is floored to {}",
                name,
                value,
                LATENT_SCALE,
                value / LATENT_SCALE
            ),
            name,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::NoiseFamily;

    fn codes(result: &ValidationResult) -> Vec<&'static str> {
        result.errors.iter().map(|e| e.code.code()).collect()
    }

    fn warning_codes(result: &ValidationResult) -> Vec<&'static str> {
        result.warnings.iter().map(|w| w.code.code()).collect()
    }

    #[test]
    fn test_valid_request_passes_clean() {
        let request = NoiseRequest::new(512, 512, NoiseFamily::Pink, 42);
        let result = validate_request(&request);
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_tiny_dimensions_fail() {
        let request = NoiseRequest::new(7, 0, NoiseFamily::White, 0);
        let result = validate_request(&request);
        assert!(!result.is_ok());
        assert_eq!(codes(&result), vec!["E001", "E001"]);
        assert_eq!(result.errors[0].path.as_deref(), Some("width"));
        assert_eq!(result.errors[1].path.as_deref(), Some("height"));
    }

    #[test]
    fn test_small_but_legal_dimensions_warn() {
        let request = NoiseRequest::new(8, 16, NoiseFamily::White, 0);
        let result = validate_request(&request);
        assert!(result.is_ok());
        assert_eq!(warning_codes(&result), vec!["W001", "W001"]);
    }

    #[test]
    fn test_non_multiple_of_eight_warns() {
        let request = NoiseRequest::new(520, 515, NoiseFamily::White, 0);
        let result = validate_request(&request);
        assert!(result.is_ok());
        assert_eq!(warning_codes(&result), vec!["W002"]);
        assert!(result.warnings[0].message.contains("floored to 64"));
    }

    #[test]
    fn test_zero_batch_fails() {
        let request = NoiseRequest::new(512, 512, NoiseFamily::White, 0).with_batch_size(0);
        assert_eq!(codes(&validate_request(&request)), vec!["E002"]);
    }

    #[test]
    fn test_unsupported_channels_fail() {
        let request = NoiseRequest::new(512, 512, NoiseFamily::White, 0).with_channels(3);
        assert_eq!(codes(&validate_request(&request)), vec!["E003"]);
    }

    #[test]
    fn test_bad_intensity_fails() {
        for intensity in [-0.5, f64::NAN, f64::INFINITY] {
            let request =
                NoiseRequest::new(512, 512, NoiseFamily::White, 0).with_intensity(intensity);
            assert_eq!(codes(&validate_request(&request)), vec!["E004"]);
        }
    }

    #[test]
    fn test_outside_host_limits_warns() {
        let request = NoiseRequest::new(16384, 512, NoiseFamily::White, 0)
            .with_batch_size(128)
            .with_intensity(20.0);
        let result = validate_request(&request);
        assert!(result.is_ok());
        assert_eq!(warning_codes(&result), vec!["W003", "W003", "W003"]);
    }
}
