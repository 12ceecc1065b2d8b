//! # chromaconv-tests
//!
//! Reference and property testing for chromaconv.
//!
//! This crate provides:
//! - Seeded sample generation (random colors, gray ramps, cube corners)
//! - Reference conversions through the `palette` crate
//! - Error statistics for comparing vectors
//!
//! ## Test Categories
//!
//! 1. **Round trips**: RGB ⇄ Yxy for every standard space
//! 2. **Derivation**: SMPTE RP 177 against published matrices
//! 3. **Known colors**: primaries, grays, clamping
//! 4. **Parity**: linear-light XYZ and xyY against `palette`
//! 5. **Config**: JSON color space descriptions

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::ErrorStats;
pub use patterns::{Sample, generate_samples};

/// Install a test-friendly tracing subscriber
///
/// Honors `RUST_LOG`. Safe to call from every test; only the first call
/// installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
