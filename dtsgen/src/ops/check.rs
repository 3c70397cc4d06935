//! Check operation - report stale declaration files without writing.

use dtsgen_codegen::UnitStatus;
use dtsgen_codegen_typescript::Generator;
use dtsgen_core::FsSink;

use crate::{
    ops::Project,
    reports::{CheckReport, UnitState},
};

/// Execute the check operation.
///
/// Compares each unit's source against the marker of its existing output.
pub fn check(project: &Project) -> CheckReport {
    let generator = Generator::new(&project.model, &project.config);
    let sink = FsSink::new(project.model.root());

    let units = generator
        .check(&sink, &project.units)
        .into_iter()
        .map(|entry| {
            let output = entry.output.to_string_lossy().replace('\\', "/");
            match entry.status {
                UnitStatus::Current => UnitState::Current,
                UnitStatus::Stale { has_output } => UnitState::Stale {
                    unit: entry.unit.to_string(),
                    output,
                    has_output,
                },
                UnitStatus::Unreadable(error) => UnitState::Unreadable {
                    unit: entry.unit.to_string(),
                    error,
                },
            }
        })
        .collect();

    CheckReport {
        incremental: project.config.incremental,
        units,
    }
}
