//! Where generated declaration files go.

use std::path::{Component, Path, PathBuf};

use dtsgen_ir::UnitId;

/// Suffix appended to the source file name by the default layout.
pub const DECLARATION_SUFFIX: &str = ".d.ts";

/// Maps source units to output paths relative to the project root.
///
/// Without a template, the output sits next to its source as
/// `<file>.d.ts`. A template may use `{dir}` (the source directory),
/// `{file}` (the source file name) and `{stem}` (the file name without
/// its extension).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    template: Option<String>,
    suffix: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(None)
    }
}

impl OutputLayout {
    pub fn new(template: Option<String>) -> Self {
        Self {
            template,
            suffix: DECLARATION_SUFFIX.to_string(),
        }
    }

    /// Extension (without the leading dot) of files placed next to their
    /// source when no template is set.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.suffix = format!(".{}", extension.trim_start_matches('.'));
        self
    }

    pub fn output_path(&self, unit: &UnitId) -> PathBuf {
        let rendered = match &self.template {
            Some(template) => template
                .replace("{dir}", unit.dir())
                .replace("{file}", unit.file_name())
                .replace("{stem}", unit.stem()),
            None => format!("{}{}", unit.as_str(), self.suffix),
        };
        rendered
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect()
    }

    /// Module specifier importing `to` from a file at `from`, e.g.
    /// `./Order.cs` or `../shared/Money.cs`.
    pub fn import_specifier(&self, from: &UnitId, to: &UnitId) -> String {
        let from = self.output_path(from);
        let to = self.output_path(to);
        let from_dir = from.parent().unwrap_or_else(|| Path::new(""));
        let relative = relative_path(from_dir, &to);

        let mut specifier = relative.to_string_lossy().replace('\\', "/");
        for suffix in [self.suffix.as_str(), DECLARATION_SUFFIX, ".ts"] {
            if let Some(stripped) = specifier.strip_suffix(suffix) {
                specifier = stripped.to_string();
                break;
            }
        }
        if specifier.starts_with("../") {
            specifier
        } else {
            format!("./{}", specifier)
        }
    }
}

/// Path of `to` relative to directory `from`; both relative to the same root.
fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut path = PathBuf::new();
    for _ in common..from.len() {
        path.push("..");
    }
    for component in &to[common..] {
        path.push(component.as_os_str());
    }
    path
}
