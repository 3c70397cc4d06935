//! Incremental regeneration gate.

use dtsgen_core::{Fingerprint, Sink};
use dtsgen_ir::UnitId;

use crate::OutputLayout;

/// Outcome of comparing a unit's content with its previous output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The previous output was generated from identical content.
    Unchanged,
    /// The unit must be regenerated.
    Stale {
        previous: Option<Fingerprint>,
        current: Fingerprint,
    },
    /// Incremental mode is off.
    Disabled,
}

/// Decides whether a unit needs regeneration from the fingerprint embedded
/// in the first line of its previous output.
pub struct IncrementalGate<'a> {
    enabled: bool,
    layout: &'a OutputLayout,
    sink: &'a dyn Sink,
}

impl<'a> IncrementalGate<'a> {
    pub fn new(enabled: bool, layout: &'a OutputLayout, sink: &'a dyn Sink) -> Self {
        Self {
            enabled,
            layout,
            sink,
        }
    }

    pub fn check(&self, unit: &UnitId, content: &str) -> GateDecision {
        if !self.enabled {
            return GateDecision::Disabled;
        }
        let current = Fingerprint::of(content);
        let previous = self
            .sink
            .read_first_line(&self.layout.output_path(unit))
            .and_then(|line| Fingerprint::from_marker_line(&line));
        if previous == Some(current) {
            GateDecision::Unchanged
        } else {
            GateDecision::Stale { previous, current }
        }
    }

    pub fn should_skip(&self, unit: &UnitId, content: &str) -> bool {
        let skip = self.check(unit, content) == GateDecision::Unchanged;
        if skip {
            tracing::debug!(unit = %unit, "skipping unchanged unit");
        }
        skip
    }
}
