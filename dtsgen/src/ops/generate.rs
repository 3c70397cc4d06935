//! Generate operation - write declaration files for source units.

use dtsgen_codegen::{LanguageCodegen, RunReport, UnitOutcome, pipeline::Severity};
use dtsgen_codegen_typescript::Generator;
use dtsgen_core::FsSink;

use crate::{
    ops::Project,
    reports::{FailedUnit, GenerateReport, GenerationResult, PreviewFile, WrittenFile, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether unchanged units may be skipped.
    pub incremental: bool,
}

/// Execute the generate operation.
///
/// Per-unit failures are recorded in the report; the other units are still
/// generated.
pub fn generate(project: &Project, opts: GenerateOptions) -> GenerateReport {
    let config = if opts.incremental {
        project.config.clone()
    } else {
        project.config.clone().without_incremental()
    };
    let generator = Generator::new(&project.model, &config);
    let codegen: &dyn LanguageCodegen = &generator;

    if opts.dry_run {
        let files = codegen
            .preview(&project.units)
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        return GenerateReport {
            warnings: Vec::new(),
            result: GenerationResult::Preview(files),
        };
    }

    let mut sink = FsSink::new(project.model.root());
    let run = codegen.generate(&mut sink, &project.units);
    GenerateReport {
        warnings: warnings(&run),
        result: GenerationResult::Written(summarize(run)),
    }
}

fn warnings(run: &RunReport) -> Vec<String> {
    run.diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| match &d.location {
            Some(location) => format!("{} (at {})", d.message, location),
            None => d.message.clone(),
        })
        .collect()
}

fn summarize(run: RunReport) -> WrittenResult {
    let mut result = WrittenResult::default();
    for report in run.units {
        match report.outcome {
            UnitOutcome::Written { path, types } => result.written.push(WrittenFile {
                path: path.to_string_lossy().replace('\\', "/"),
                types,
            }),
            UnitOutcome::Unchanged => result.unchanged += 1,
            UnitOutcome::Empty => result.empty += 1,
            UnitOutcome::Failed { error } => result.failed.push(FailedUnit {
                unit: report.unit.to_string(),
                error,
            }),
        }
    }
    result
}
