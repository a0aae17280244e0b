//! Statistical and structural properties of every noise family.

use latentseed_backend_noise::{synthesize_noise, NoiseField};
use latentseed_spec::{NoiseFamily, NoiseRequest};
use latentseed_tests::fixtures;

/// Lag-1 horizontal autocorrelation, averaged over all rows of all planes.
fn neighbour_correlation(field: &NoiseField) -> f64 {
    let width = field.shape().width;
    let mean = field.mean();
    let mut num = 0.0;
    let mut den = 0.0;
    for plane in field.planes() {
        for row in plane.chunks_exact(width) {
            for pair in row.windows(2) {
                num += (pair[0] - mean) * (pair[1] - mean);
                den += (pair[0] - mean) * (pair[0] - mean);
            }
        }
    }
    num / den
}

#[test]
fn unit_std_at_intensity_one() {
    for request in fixtures::every_family(512, 512, 42) {
        let field = synthesize_noise(&request).unwrap();
        assert!(
            (field.std() - 1.0).abs() < 1e-9,
            "{}: std {}",
            request.noise_family,
            field.std()
        );
    }
}

#[test]
fn unit_std_holds_for_batches_and_sixteen_channels() {
    for request in fixtures::every_family(320, 192, 8) {
        let request = request.with_batch_size(2).with_channels(16);
        let field = synthesize_noise(&request).unwrap();
        assert!((field.std() - 1.0).abs() < 1e-9, "{}", request.noise_family);
    }
}

#[test]
fn intensity_is_exactly_linear() {
    for family in NoiseFamily::ALL {
        let base_request = NoiseRequest::new(256, 128, family, 99);
        let base = synthesize_noise(&base_request).unwrap();

        for k in [0.0, 0.25, 1.0, 3.5, 10.0] {
            let scaled = synthesize_noise(&base_request.clone().with_intensity(k)).unwrap();
            for (s, b) in scaled.data().iter().zip(base.data()) {
                assert_eq!(*s, k * b, "{} k={}", family, k);
            }
        }
    }
}

#[test]
fn spectral_families_have_zero_mean_planes() {
    for family in [NoiseFamily::Pink, NoiseFamily::Brown, NoiseFamily::Plasma] {
        let request = NoiseRequest::new(512, 384, family, 21).with_batch_size(2);
        let field = synthesize_noise(&request).unwrap();
        for plane in field.planes() {
            let mean = plane.iter().sum::<f64>() / plane.len() as f64;
            assert!(mean.abs() < 1e-9, "{}: plane mean {}", family, mean);
        }
    }
}

#[test]
fn white_noise_is_uncorrelated() {
    let field = synthesize_noise(&NoiseRequest::new(512, 512, NoiseFamily::White, 4)).unwrap();
    assert!(neighbour_correlation(&field).abs() < 0.05);
    assert!(field.mean().abs() < 0.05);
}

#[test]
fn smoothness_increases_with_spectral_exponent() {
    let corr = |family| {
        let field = synthesize_noise(&NoiseRequest::new(512, 512, family, 13)).unwrap();
        neighbour_correlation(&field)
    };

    let white = corr(NoiseFamily::White);
    let pink = corr(NoiseFamily::Pink);
    let brown = corr(NoiseFamily::Brown);
    let plasma = corr(NoiseFamily::Plasma);

    assert!(white < pink, "white {} pink {}", white, pink);
    assert!(pink < brown, "pink {} brown {}", pink, brown);
    assert!(brown < plasma, "brown {} plasma {}", brown, plasma);
}

#[test]
fn perlin_is_spatially_correlated() {
    let field = synthesize_noise(&fixtures::perlin_scenario()).unwrap();
    assert!(neighbour_correlation(&field) > 0.5);
}

#[test]
fn stats_match_field() {
    let field = synthesize_noise(&fixtures::white_batch_scenario()).unwrap();
    let stats = field.stats();
    assert_eq!(stats.mean, field.mean());
    assert_eq!(stats.std, field.std());
    assert!(stats.min < 0.0 && stats.max > 0.0);
    assert!(field.data().iter().all(|&v| v >= stats.min && v <= stats.max));
}
