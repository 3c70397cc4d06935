//! Generation runs: resolve, write, report.

use dtsgen_codegen::{
    CheckEntry, GateDecision, IncrementalGate, LanguageCodegen, OutputLayout, PreviewFile,
    Resolver, RunReport, TypeSource, UnitOutcome, UnitStatus,
    pipeline::{Diagnostic, phase},
};
use dtsgen_config::NamingConfig;
use dtsgen_core::Sink;
use dtsgen_ir::{SourceUnit, UnitId};

use crate::DeclarationWriter;

/// TypeScript declaration generator over a [`TypeSource`].
///
/// Every call is an independent run with its own visited set; the
/// configuration is only read.
pub struct Generator<'a> {
    source: &'a dyn TypeSource,
    config: &'a NamingConfig,
    layout: OutputLayout,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "d.ts"
    }

    fn preview(&self, units: &[UnitId]) -> Vec<PreviewFile> {
        Generator::preview(self, units)
    }

    fn generate(&self, sink: &mut dyn Sink, units: &[UnitId]) -> RunReport {
        self.run(sink, units)
    }

    fn check(&self, sink: &dyn Sink, units: &[UnitId]) -> Vec<CheckEntry> {
        Generator::check(self, sink, units)
    }
}

impl<'a> Generator<'a> {
    pub fn new(source: &'a dyn TypeSource, config: &'a NamingConfig) -> Self {
        let mut generator = Self {
            source,
            config,
            layout: OutputLayout::default(),
        };
        generator.layout = OutputLayout::new(config.output_path_template.clone())
            .with_extension(generator.file_extension());
        generator
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Regenerate the requested units and everything they pull in.
    ///
    /// Unchanged units are skipped before extraction. A failed write is
    /// reported for its unit and leaves other units unaffected.
    pub fn run(&self, sink: &mut dyn Sink, units: &[UnitId]) -> RunReport {
        let resolution = {
            let gate = IncrementalGate::new(self.config.incremental, &self.layout, &*sink);
            Resolver::new(self.source, self.config)
                .with_gate(&gate)
                .resolve(units)
        };
        let writer = DeclarationWriter::new(self.config, &self.layout);
        let mut report = RunReport {
            diagnostics: resolution.diagnostics,
            ..RunReport::default()
        };

        for unit in &resolution.units {
            let outcome = self.write_unit(sink, &writer, unit, &mut report.diagnostics);
            report.push(unit.identity.clone(), outcome);
        }
        for unit in resolution.skipped {
            report.push(unit, UnitOutcome::Unchanged);
        }
        for (unit, error) in resolution.failed {
            report.push(unit, UnitOutcome::Failed { error });
        }

        tracing::info!(
            written = report.written().count(),
            unchanged = report.unchanged().count(),
            failed = report.failed().count(),
            "generation finished"
        );
        report
    }

    /// Empty units still get a marker-only file in incremental mode so the
    /// next run can skip them.
    fn write_unit(
        &self,
        sink: &mut dyn Sink,
        writer: &DeclarationWriter<'_>,
        unit: &SourceUnit,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> UnitOutcome {
        if unit.is_empty() && !self.config.incremental {
            return UnitOutcome::Empty;
        }
        let path = self.layout.output_path(&unit.identity);
        let text = writer.write(unit);

        match sink.write_unit(&path, &text) {
            Ok(()) if unit.is_empty() => UnitOutcome::Empty,
            Ok(()) => {
                tracing::debug!(unit = %unit.identity, path = %path.display(), "wrote declarations");
                UnitOutcome::Written {
                    path,
                    types: unit.types.len(),
                }
            }
            Err(error) => {
                let message = format!("failed to write '{}': {}", path.display(), error);
                tracing::warn!(unit = %unit.identity, "{}", message);
                diagnostics
                    .push(Diagnostic::error(phase::WRITE, message.clone()).at(unit.identity.as_str()));
                UnitOutcome::Failed { error: message }
            }
        }
    }

    /// Render the requested units without consulting or touching any
    /// previous output. Units with nothing to declare are left out.
    pub fn preview(&self, units: &[UnitId]) -> Vec<PreviewFile> {
        let resolution = Resolver::new(self.source, self.config).resolve(units);
        let writer = DeclarationWriter::new(self.config, &self.layout);
        resolution
            .units
            .iter()
            .filter(|unit| !unit.is_empty())
            .map(|unit| PreviewFile {
                path: self
                    .layout
                    .output_path(&unit.identity)
                    .to_string_lossy()
                    .replace('\\', "/"),
                content: writer.write(unit),
            })
            .collect()
    }

    /// Gate status of each unit, without extracting or writing.
    pub fn check(&self, sink: &dyn Sink, units: &[UnitId]) -> Vec<CheckEntry> {
        let gate = IncrementalGate::new(true, &self.layout, sink);
        units
            .iter()
            .map(|unit| {
                let output = self.layout.output_path(unit);
                let status = match self.source.unit_content(unit) {
                    Err(error) => UnitStatus::Unreadable(error.to_string()),
                    Ok(content) => match gate.check(unit, &content) {
                        GateDecision::Unchanged => UnitStatus::Current,
                        _ => UnitStatus::Stale {
                            has_output: sink.read_first_line(&output).is_some(),
                        },
                    },
                };
                CheckEntry {
                    unit: unit.clone(),
                    output,
                    status,
                }
            })
            .collect()
    }
}
