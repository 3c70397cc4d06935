//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from the run.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of declaration generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    pub written: Vec<WrittenFile>,
    /// Units skipped because their source did not change.
    pub unchanged: usize,
    /// Units with nothing to declare.
    pub empty: usize,
    pub failed: Vec<FailedUnit>,
}

#[derive(Debug)]
pub struct WrittenFile {
    /// Path relative to the project root.
    pub path: String,
    /// Number of declared types.
    pub types: usize,
}

#[derive(Debug)]
pub struct FailedUnit {
    pub unit: String,
    pub error: String,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Number of units that could not be generated.
    pub fn failure_count(&self) -> usize {
        match &self.result {
            GenerationResult::Written(written) => written.failed.len(),
            GenerationResult::Preview(_) => 0,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !written.written.is_empty() {
            out.section("Generated");
            for file in &written.written {
                let plural = if file.types == 1 { "" } else { "s" };
                out.added_item(&format!("{} ({} type{})", file.path, file.types, plural));
            }
        }

        if !written.failed.is_empty() {
            if !written.written.is_empty() {
                out.newline();
            }
            out.section("Failed");
            for failed in &written.failed {
                out.list_item(&format!("! {}: {}", failed.unit, failed.error));
            }
        }

        if !written.written.is_empty() || !written.failed.is_empty() {
            out.newline();
        }
        out.preformatted(&format!(
            "{} written, {} unchanged, {} empty, {} failed",
            written.written.len(),
            written.unchanged,
            written.empty,
            written.failed.len()
        ));
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_written_summary() {
        let report = GenerateReport {
            warnings: vec!["type 'Lib.Money' not found (at Shop.Order.Total)".into()],
            result: GenerationResult::Written(WrittenResult {
                written: vec![WrittenFile {
                    path: "Models/Order.cs.d.ts".into(),
                    types: 2,
                }],
                unchanged: 3,
                empty: 0,
                failed: vec![FailedUnit {
                    unit: "Models/Broken.cs".into(),
                    error: "permission denied".into(),
                }],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            out.lines,
            vec![
                "warning: type 'Lib.Money' not found (at Shop.Order.Total)",
                "Generated:",
                "  + Models/Order.cs.d.ts (2 types)",
                "",
                "Failed:",
                "  - ! Models/Broken.cs: permission denied",
                "",
                "1 written, 3 unchanged, 0 empty, 1 failed",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            warnings: Vec::new(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "Order.cs.d.ts".into(),
                content: "declare module server {\n}".into(),
            }]),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(report.failure_count(), 0);
        assert!(out.text().starts_with("── Order.cs.d.ts ──\ndeclare module server {"));
        assert!(out.text().ends_with("── Summary ──\n1 files would be generated"));
    }
}
