//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from removing generated files.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Removed declaration files.
    pub deleted: Vec<String>,
    /// Units that had no output to remove.
    pub already_clean: usize,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.deleted.is_empty() {
            out.preformatted("No generated files found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.deleted {
            out.removed_item(path);
        }

        if self.already_clean > 0 {
            out.newline();
            let plural = if self.already_clean == 1 { "" } else { "s" };
            out.preformatted(&format!(
                "{} unit{} had no generated file",
                self.already_clean, plural
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_dry_run() {
        let report = CleanReport {
            dry_run: true,
            deleted: vec!["Order.cs.d.ts".into()],
            already_clean: 1,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "Would delete:",
                "  - Order.cs.d.ts",
                "",
                "1 unit had no generated file",
            ]
        );
    }

    #[test]
    fn test_render_nothing_to_clean() {
        let report = CleanReport {
            dry_run: false,
            deleted: Vec::new(),
            already_clean: 2,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["No generated files found."]);
    }
}
