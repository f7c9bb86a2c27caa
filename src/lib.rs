//! # Dispatch-Bench
//!
//! Micro-benchmarks comparing dispatch mechanisms for one operation:
//! translating a heterogeneous collection of circles and squares by a vector.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod utils;
pub mod workload;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export the suite runners from utils::runner
pub use utils::runner::{run_single_pass, run_statistical};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{Mode, RunConfig};
    pub use crate::dispatch::{DispatchVariant, ShapeCollection};
    pub use crate::error::{BenchError, ConfigError, VerifyError};
    pub use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};
    pub use crate::registry::{build_registry, SuiteRegistry, SuiteRunner};
    pub use crate::workload::Workload;
}
