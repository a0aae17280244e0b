//! latentseed End-to-End Test Infrastructure
//!
//! Integration tests for the request -> field pipeline:
//!
//! - Generation: request -> field shape, statistics, CLI output files
//! - **Determinism**: bit-identical fields across runs for every family
//! - Validation: codes and warnings for arbitrary requests (proptest)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p latentseed-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use latentseed_tests::determinism::verify_determinism;
//! use latentseed_tests::test_determinism;
//!
//! let result = verify_determinism(|| synthesize_noise(&request).unwrap(), 3);
//! assert!(result.is_deterministic);
//!
//! test_determinism!(pink_seed_42, {
//!     synthesize_noise(&fixtures::pink_scenario()).unwrap()
//! });
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{
    field_bytes, verify_determinism, DeterminismError, DeterminismFixture, DeterminismReport,
    DeterminismResult,
};
