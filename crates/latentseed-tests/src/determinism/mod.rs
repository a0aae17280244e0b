//! Determinism testing for noise synthesis.
//!
//! A request fixes every random draw, so two calls with equal requests must
//! return fields that agree bit for bit. Fields are compared by the raw bits
//! of each `f64` sample, so `-0.0` vs `0.0` or differing NaN payloads count
//! as differences.
//!
//! # Example
//!
//! ```rust,ignore
//! use latentseed_tests::determinism::DeterminismFixture;
//!
//! let report = DeterminismFixture::new()
//!     .add_all_families(256, 256, 42)
//!     .runs(3)
//!     .run();
//! assert!(report.all_deterministic(), "{}", report);
//! ```

pub mod core;
pub mod fixture;
#[macro_use]
pub mod macros;

pub use self::core::{field_bytes, verify_determinism, DeterminismResult, DiffInfo};
pub use fixture::{DeterminismError, DeterminismFixture, DeterminismReport, DeterminismReportEntry};
