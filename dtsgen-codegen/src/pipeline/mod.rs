//! Diagnostics collected during a generation run.
//!
//! Nothing in a run is fatal except failing to start it. Problems found
//! along the way are recorded as [`Diagnostic`]s tagged with the phase that
//! produced them and returned in the run report.

mod diagnostic;

pub use diagnostic::{Diagnostic, Severity};

/// Phase names used in diagnostics.
pub mod phase {
    pub const CONFIG: &str = "config";
    pub const SOURCE: &str = "source";
    pub const RESOLVE: &str = "resolve";
    pub const WRITE: &str = "write";
}
