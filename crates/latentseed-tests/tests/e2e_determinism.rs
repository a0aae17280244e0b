//! Determinism tests: equal requests give bit-identical fields.

use latentseed_backend_noise::{synthesize, synthesize_noise, SynthesisContext};
use latentseed_spec::{NoiseFamily, NoiseRequest};
use latentseed_tests::determinism::{verify_determinism, DeterminismFixture};
use latentseed_tests::{field_bytes, fixtures, test_determinism};

test_determinism!(white_seed_0, {
    synthesize_noise(&NoiseRequest::new(256, 256, NoiseFamily::White, 0)).unwrap()
});

test_determinism!(pink_scenario, {
    synthesize_noise(&fixtures::pink_scenario()).unwrap()
});

test_determinism!(brown_batch, {
    synthesize_noise(&NoiseRequest::new(192, 128, NoiseFamily::Brown, 77).with_batch_size(3))
        .unwrap()
});

test_determinism!(perlin_scenario, runs = 4, {
    synthesize_noise(&fixtures::perlin_scenario()).unwrap()
});

test_determinism!(plasma_sixteen_channel, {
    synthesize_noise(&NoiseRequest::new(128, 128, NoiseFamily::Plasma, u64::MAX).with_channels(16))
        .unwrap()
});

#[test]
fn every_family_at_two_sizes() {
    let report = DeterminismFixture::new()
        .add_all_families(256, 256, 42)
        .add_all_families(520, 136, 3)
        .run();
    assert!(report.all_deterministic(), "{}", report);
}

#[test]
fn shared_context_does_not_leak_state() {
    let requests = fixtures::every_family(128, 128, 5);

    let fresh: Vec<Vec<u8>> = requests
        .iter()
        .map(|r| field_bytes(&synthesize_noise(r).unwrap()))
        .collect();

    // Same requests in reverse order through one context.
    let mut ctx = SynthesisContext::new();
    let mut shared: Vec<Vec<u8>> = requests
        .iter()
        .rev()
        .map(|r| field_bytes(&synthesize(r, &mut ctx).unwrap()))
        .collect();
    shared.reverse();

    assert_eq!(fresh, shared);
}

#[test]
fn generation_is_thread_independent() {
    let request = fixtures::pink_scenario();
    let local = field_bytes(&synthesize_noise(&request).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let request = request.clone();
            std::thread::spawn(move || field_bytes(&synthesize_noise(&request).unwrap()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), local);
    }
}

#[test]
fn different_seeds_differ() {
    for family in NoiseFamily::ALL {
        let a = synthesize_noise(&NoiseRequest::new(128, 128, family, 1)).unwrap();
        let b = synthesize_noise(&NoiseRequest::new(128, 128, family, 2)).unwrap();
        assert_ne!(field_bytes(&a), field_bytes(&b), "{}", family);
    }
}

#[test]
fn verify_determinism_hash_is_stable() {
    let request = NoiseRequest::new(64, 64, NoiseFamily::Perlin, 12);
    let first = verify_determinism(|| synthesize_noise(&request).unwrap(), 2);
    let second = verify_determinism(|| synthesize_noise(&request).unwrap(), 2);
    assert!(first.is_deterministic);
    assert_eq!(first.hash, second.hash);
}
