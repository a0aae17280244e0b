//! Property-based tests for request validation, host clamping and synthesis.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p latentseed-tests --test proptest_validation
//! ```

use proptest::prelude::*;

use latentseed_backend_noise::synthesize_noise;
use latentseed_spec::validation::{MIN_PIXEL_SIZE, RECOMMENDED_PIXEL_SIZE};
use latentseed_spec::{
    validate_request, ErrorCode, InputLimits, NodeInputs, NoiseFamily, NoiseRequest, WarningCode,
};

fn any_family() -> impl Strategy<Value = NoiseFamily> {
    prop::sample::select(NoiseFamily::ALL.to_vec())
}

fn any_request() -> impl Strategy<Value = NoiseRequest> {
    (
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any_family(),
        any::<f64>(),
        any::<u64>(),
    )
        .prop_map(
            |(width, height, batch_size, channels, noise_family, intensity, seed)| NoiseRequest {
                width,
                height,
                batch_size,
                channels,
                noise_family,
                intensity,
                seed,
            },
        )
}

// ============================================================================
// 1. Validation
// ============================================================================

proptest! {
    /// Arbitrary requests never panic when validated.
    #[test]
    fn validation_never_panics(request in any_request()) {
        let _ = validate_request(&request);
    }

    /// `ok` is exactly "no errors".
    #[test]
    fn ok_flag_matches_error_list(request in any_request()) {
        let result = validate_request(&request);
        prop_assert_eq!(result.is_ok(), result.errors.is_empty());
    }

    /// Dimensions below one latent cell are always E001.
    #[test]
    fn tiny_dimensions_are_errors(width in 0u32..MIN_PIXEL_SIZE, seed in any::<u64>()) {
        let request = NoiseRequest::new(width, 512, NoiseFamily::White, seed);
        let result = validate_request(&request);
        prop_assert!(result.errors.iter().any(|e| e.code == ErrorCode::LatentTooSmall));
    }

    /// Small but usable dimensions only warn.
    #[test]
    fn small_dimensions_warn(side in MIN_PIXEL_SIZE..RECOMMENDED_PIXEL_SIZE) {
        let request = NoiseRequest::new(side, side, NoiseFamily::Pink, 0);
        let result = validate_request(&request);
        prop_assert!(result.is_ok());
        prop_assert!(result
            .warnings
            .iter()
            .any(|w| w.code == WarningCode::BelowRecommendedSize));
    }

    /// Only 4 and 16 channels are accepted.
    #[test]
    fn channel_support(channels in any::<u32>()) {
        let request = NoiseRequest::new(512, 512, NoiseFamily::White, 0).with_channels(channels);
        let rejected = validate_request(&request)
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::UnsupportedChannels);
        prop_assert_eq!(rejected, channels != 4 && channels != 16);
    }

    /// Negative or non-finite intensities are rejected.
    #[test]
    fn intensity_support(intensity in any::<f64>()) {
        let request = NoiseRequest::new(512, 512, NoiseFamily::White, 0).with_intensity(intensity);
        let rejected = validate_request(&request)
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::InvalidIntensity);
        prop_assert_eq!(rejected, !(intensity.is_finite() && intensity >= 0.0));
    }
}

// ============================================================================
// 2. Host clamping
// ============================================================================

proptest! {
    /// Clamped inputs always land inside the widget ranges and on the size grid.
    #[test]
    fn clamped_inputs_are_in_range(
        width in any::<u32>(),
        height in any::<u32>(),
        batch_size in any::<u32>(),
        intensity in any::<f64>(),
    ) {
        let limits = InputLimits::default();
        let inputs = NodeInputs {
            width,
            height,
            batch_size,
            intensity,
            ..NodeInputs::default()
        };
        let clamped = limits.clamp(&inputs);

        prop_assert!(limits.size_in_range(clamped.width));
        prop_assert!(limits.size_in_range(clamped.height));
        prop_assert_eq!((clamped.width - limits.size_min) % limits.size_step, 0);
        prop_assert_eq!((clamped.height - limits.size_min) % limits.size_step, 0);
        prop_assert!(limits.batch_in_range(clamped.batch_size));
        prop_assert!(limits.intensity_in_range(clamped.intensity));
    }

    /// Node-built requests always validate.
    #[test]
    fn node_requests_always_validate(
        width in any::<u32>(),
        height in any::<u32>(),
        batch_size in any::<u32>(),
        intensity in any::<f64>(),
        family in any_family(),
        sixteen in any::<bool>(),
    ) {
        let model_type = if sixteen { "Flux (16ch)" } else { "SDXL (4ch)" };
        let inputs = NodeInputs {
            width,
            height,
            batch_size,
            model_type: model_type.to_string(),
            noise_type: family.label().to_string(),
            intensity,
            seed: 0,
        };
        let request = NoiseRequest::from_node_inputs(&inputs).unwrap();
        prop_assert!(validate_request(&request).is_ok());
        prop_assert_eq!(request.channels, if sixteen { 16 } else { 4 });
        prop_assert_eq!(request.noise_family, family);
    }
}

// ============================================================================
// 3. Synthesis on small fields
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Intensity scales every element exactly.
    #[test]
    fn intensity_linearity(
        family in any_family(),
        seed in any::<u64>(),
        k in 0.0f64..10.0,
        w in 1u32..9,
        h in 1u32..9,
    ) {
        let base = NoiseRequest::new(w * 8, h * 8, family, seed);
        let unit = synthesize_noise(&base).unwrap();
        let scaled = synthesize_noise(&base.clone().with_intensity(k)).unwrap();
        for (s, u) in scaled.data().iter().zip(unit.data()) {
            prop_assert_eq!(*s, k * u);
        }
    }

    /// Shape is always floor(pixels / 8).
    #[test]
    fn shape_contract(
        family in any_family(),
        width in 8u32..200,
        height in 8u32..200,
        batch in 1u32..3,
    ) {
        let request = NoiseRequest::new(width, height, family, 0).with_batch_size(batch);
        let field = synthesize_noise(&request).unwrap();
        prop_assert_eq!(
            field.shape().dims(),
            [batch as usize, 4, (height / 8) as usize, (width / 8) as usize]
        );
    }

    /// Every sample is finite for every family.
    #[test]
    fn samples_are_finite(
        family in any_family(),
        seed in any::<u64>(),
        width in 8u32..160,
        height in 8u32..160,
    ) {
        let field = synthesize_noise(&NoiseRequest::new(width, height, family, seed)).unwrap();
        prop_assert!(field.data().iter().all(|v| v.is_finite()));
    }
}
