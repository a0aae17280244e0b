//! Arbitrary host inputs must always clamp into a valid request.

#![no_main]

use latentseed_spec::{validate_request, NodeInputs, NoiseFamily, NoiseRequest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u32, u32, u32, f64, u64, u8, bool)| {
    let (width, height, batch_size, intensity, seed, family, sixteen) = data;
    let family = NoiseFamily::ALL[family as usize % NoiseFamily::ALL.len()];

    let inputs = NodeInputs {
        width,
        height,
        batch_size,
        model_type: if sixteen { "(16ch)" } else { "(4ch)" }.to_string(),
        noise_type: family.label().to_string(),
        intensity,
        seed,
    };

    let request = NoiseRequest::from_node_inputs(&inputs).expect("family labels always parse");
    assert!(validate_request(&request).is_ok());
});
