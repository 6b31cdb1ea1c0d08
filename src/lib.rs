//! Keyword-based scoring and templated generation of passenger reviews for drivers.
//!
//! [`engine::ReviewEngine`] is the entry point: `analyze` scores review text and
//! derives insights, `generate` produces a deterministic synthetic review.

pub mod config;
pub mod deserializers;
pub mod drivers;
pub mod engine;
pub mod error;
pub mod generator;
pub mod http;
pub mod insights;
pub mod lexicon;
pub mod scorer;
pub mod serializers;

pub use drivers::{Driver, DriverDirectory};
pub use engine::{AnalysisReport, ReviewEngine};
pub use generator::GeneratedReview;
pub use lexicon::{Aspect, Lexicon};
pub use scorer::{ScoreResult, Scorer};

/// Install the fmt subscriber used by the binaries.
/// Honors RUST_LOG, defaulting to info for this crate.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("driver_review=info"));
    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
