//! Results of generation and check runs.

use std::path::PathBuf;

use dtsgen_ir::UnitId;

use crate::pipeline::Diagnostic;

/// What happened to one requested or pulled-in unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    /// Output written to `path` (relative to the sink root).
    Written { path: PathBuf, types: usize },
    /// Skipped by the incremental gate.
    Unchanged,
    /// Nothing to emit; no file written.
    Empty,
    /// Reading the source or writing the output failed.
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct UnitReport {
    pub unit: UnitId,
    pub outcome: UnitOutcome,
}

/// Summary of a generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub units: Vec<UnitReport>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    pub fn push(&mut self, unit: UnitId, outcome: UnitOutcome) {
        self.units.push(UnitReport { unit, outcome });
    }

    pub fn outcome(&self, unit: &UnitId) -> Option<&UnitOutcome> {
        self.units
            .iter()
            .find(|report| report.unit == *unit)
            .map(|report| &report.outcome)
    }

    pub fn written(&self) -> impl Iterator<Item = &UnitReport> {
        self.units
            .iter()
            .filter(|r| matches!(r.outcome, UnitOutcome::Written { .. }))
    }

    pub fn unchanged(&self) -> impl Iterator<Item = &UnitReport> {
        self.units
            .iter()
            .filter(|r| r.outcome == UnitOutcome::Unchanged)
    }

    pub fn failed(&self) -> impl Iterator<Item = &UnitReport> {
        self.units
            .iter()
            .filter(|r| matches!(r.outcome, UnitOutcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Staleness of one unit, as reported by a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    /// The existing output matches the current source.
    Current,
    /// Regeneration needed; `has_output` is false when no marked output exists.
    Stale { has_output: bool },
    /// The source could not be read.
    Unreadable(String),
}

#[derive(Debug, Clone)]
pub struct CheckEntry {
    pub unit: UnitId,
    pub output: PathBuf,
    pub status: UnitStatus,
}
