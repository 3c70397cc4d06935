//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from a staleness check.
#[derive(Debug)]
pub struct CheckReport {
    /// Whether the configuration has incremental generation enabled.
    pub incremental: bool,
    pub units: Vec<UnitState>,
}

/// Staleness of one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitState {
    Current,
    Stale {
        unit: String,
        output: String,
        has_output: bool,
    },
    Unreadable {
        unit: String,
        error: String,
    },
}

impl CheckReport {
    /// Whether every unit's output is current.
    pub fn is_current(&self) -> bool {
        self.units
            .iter()
            .all(|state| matches!(state, UnitState::Current))
    }

    fn current_count(&self) -> usize {
        self.units
            .iter()
            .filter(|state| matches!(state, UnitState::Current))
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.incremental {
            out.warning("incremental generation is disabled; every unit is regenerated on each run");
        }

        for state in &self.units {
            match state {
                UnitState::Unreadable { unit, error } => {
                    out.warning(&format!("cannot read {}: {}", unit, error));
                }
                UnitState::Stale {
                    unit,
                    output,
                    has_output,
                } => {
                    let reason = if *has_output { "changed" } else { "not generated" };
                    out.list_item(&format!("{} -> {} ({})", unit, output, reason));
                }
                UnitState::Current => {}
            }
        }

        if !self.is_current() {
            out.newline();
        }

        if self.is_current() {
            out.preformatted(&format!("✓ {} units up to date", self.units.len()));
        } else {
            out.preformatted(&format!(
                "{} of {} units need regeneration",
                self.units.len() - self.current_count(),
                self.units.len()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_all_current() {
        let report = CheckReport {
            incremental: true,
            units: vec![UnitState::Current],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.is_current());
        assert_eq!(out.lines, vec!["✓ 1 units up to date"]);
    }

    #[test]
    fn test_stale_and_unreadable() {
        let report = CheckReport {
            incremental: true,
            units: vec![
                UnitState::Current,
                UnitState::Stale {
                    unit: "B.cs".into(),
                    output: "B.cs.d.ts".into(),
                    has_output: true,
                },
                UnitState::Stale {
                    unit: "C.cs".into(),
                    output: "C.cs.d.ts".into(),
                    has_output: false,
                },
                UnitState::Unreadable {
                    unit: "D.cs".into(),
                    error: "not found".into(),
                },
            ],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_current());
        assert_eq!(
            out.lines,
            vec![
                "  - B.cs -> B.cs.d.ts (changed)",
                "  - C.cs -> C.cs.d.ts (not generated)",
                "warning: cannot read D.cs: not found",
                "",
                "3 of 4 units need regeneration",
            ]
        );
    }
}
