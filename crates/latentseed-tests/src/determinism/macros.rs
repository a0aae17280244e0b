//! Macros for determinism testing.

/// Generate a test that builds a field several times and checks every run
/// matches the first bit for bit.
///
/// The expression must evaluate to a `NoiseField`. Three runs by default.
///
/// # Example
///
/// ```rust,ignore
/// use latentseed_tests::test_determinism;
///
/// test_determinism!(pink_seed_42, {
///     synthesize_noise(&NoiseRequest::new(512, 512, NoiseFamily::Pink, 42)).unwrap()
/// });
///
/// test_determinism!(perlin_batch, runs = 5, {
///     synthesize_noise(&perlin_request()).unwrap()
/// });
/// ```
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, $generate:expr) => {
        $crate::test_determinism!($name, runs = 3, $generate);
    };

    ($name:ident, runs = $runs:expr, $generate:expr) => {
        #[test]
        fn $name() {
            let run_count: usize = $runs;
            $crate::determinism::verify_determinism(|| $generate, run_count)
                .assert_deterministic();
        }
    };
}
