//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod clean;
mod generate;
mod info;
mod output;

pub use check::{CheckReport, UnitState};
pub use clean::CleanReport;
pub use generate::{
    FailedUnit, GenerateReport, GenerationResult, PreviewFile, WrittenFile, WrittenResult,
};
pub use info::InfoReport;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
