//! Clean operation - remove generated declaration files.

use dtsgen_codegen_typescript::Generator;
use dtsgen_core::FsSink;
use eyre::{Context, Result};

use crate::{ops::Project, reports::CleanReport};

/// Options for the clean operation.
pub struct CleanOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes the output file of every requested unit. Units without output
/// are counted as already clean.
pub fn clean(project: &Project, opts: CleanOptions) -> Result<CleanReport> {
    let generator = Generator::new(&project.model, &project.config);
    let sink = FsSink::new(project.model.root());

    let mut report = CleanReport {
        dry_run: opts.dry_run,
        deleted: Vec::new(),
        already_clean: 0,
    };

    for unit in &project.units {
        let output = generator.layout().output_path(unit);
        let shown = output.to_string_lossy().replace('\\', "/");

        let existed = if opts.dry_run {
            sink.resolve(&output).is_file()
        } else {
            sink.remove(&output)
                .wrap_err_with(|| format!("Failed to remove '{}'", shown))?
        };

        if existed {
            tracing::debug!(unit = %unit, path = %shown, "removed declarations");
            report.deleted.push(shown);
        } else {
            report.already_clean += 1;
        }
    }

    Ok(report)
}
