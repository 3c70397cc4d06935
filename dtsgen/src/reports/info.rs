//! Info command report data structures.

use super::output::{Output, Report};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    /// Project root directory.
    pub root: String,
    /// Project model file.
    pub model_path: String,
    /// Global settings file, if one was read.
    pub settings_path: Option<String>,
    /// Project override file status.
    pub overrides: String,
    /// Number of described types.
    pub type_count: usize,
    /// Effective configuration, in settings-file key order.
    pub settings: Vec<(String, String)>,
    /// Source unit and its output path.
    pub outputs: Vec<(String, String)>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Project", &self.root);
        out.key_value("Model", &self.model_path);
        out.key_value(
            "Settings",
            self.settings_path.as_deref().unwrap_or("(defaults)"),
        );
        out.key_value("Overrides", &self.overrides);
        out.newline();

        out.section("Configuration");
        for (key, value) in &self.settings {
            out.key_value_indented(key, value);
        }
        out.newline();

        out.section(&format!(
            "Units ({}, {} types)",
            self.outputs.len(),
            self.type_count
        ));
        for (unit, output) in &self.outputs {
            out.list_item(&format!("{} -> {}", unit, output));
        }
    }
}
