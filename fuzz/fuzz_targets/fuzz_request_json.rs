//! Arbitrary bytes through request parsing, validation and hashing.
//!
//! Requests that validate are synthesized when their latent is small enough
//! to keep each iteration fast.

#![no_main]

use latentseed_backend_noise::synthesize_noise;
use latentseed_spec::{canonical_request_hash, validate_request, BackendError, NoiseRequest};
use libfuzzer_sys::fuzz_target;

const MAX_FUZZ_SAMPLES: usize = 1 << 14;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(request) = NoiseRequest::from_json(text) else {
        return;
    };

    let _ = canonical_request_hash(&request);
    let result = validate_request(&request);

    let samples = request.latent_shape().checked_len();

    if result.is_ok() && samples.is_some_and(|n| n <= MAX_FUZZ_SAMPLES) {
        let field = synthesize_noise(&request).expect("validated request must synthesize");
        assert_eq!(field.shape(), request.latent_shape());
    } else if result.is_ok() && samples.is_none() {
        let err = synthesize_noise(&request).expect_err("overflowing shape must be rejected");
        assert_eq!(err.code(), "NOISE_001");
    }
});
