//! Error types for the benchmark harness.
//!
//! Translation itself cannot fail; these cover configuration, cross-variant
//! verification and result export.

use crate::geometry::Vector3D;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shape count must be at least 1")]
    ZeroShapes,
    #[error("step count must be at least 1")]
    ZeroSteps,
    #[error("runs per variant must be at least 1")]
    ZeroRuns,
    #[error("suite '{name}' not found (available: {available})")]
    UnknownSuite { name: String, available: String },
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("suite '{suite}' has no variants registered")]
    NoVariants { suite: &'static str },
    #[error("variant '{variant}' holds {actual} shapes, expected {expected}")]
    ShapeCount {
        variant: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error(
        "variant '{variant}' diverged from '{reference}' at shape {index}: expected {expected:?}, got {actual:?}"
    )]
    Diverged {
        variant: &'static str,
        reference: &'static str,
        index: usize,
        expected: Vector3D,
        actual: Vector3D,
    },
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("verification failed: {0}")]
    Verify(#[from] VerifyError),
    #[error("failed to export CSV: {0}")]
    Csv(#[from] std::io::Error),
}
