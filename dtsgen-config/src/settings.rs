use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, SourceContext};

/// Default module name used when no namespace applies.
pub const DEFAULT_MODULE_NAME: &str = "server";

/// Default global settings file name.
pub const SETTINGS_FILE_NAME: &str = "dtsgen.toml";

/// Which unit owns a project type reached from several units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ownership {
    /// The unit whose request first reaches the type emits it.
    FirstDiscoverer,
    /// Every type is emitted by the unit that declares it.
    #[default]
    DeclaringUnit,
}

impl Ownership {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ownership::FirstDiscoverer => "first-discoverer",
            Ownership::DeclaringUnit => "declaring-unit",
        }
    }
}

/// Global defaults, read from `dtsgen.toml`.
///
/// Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub camel_case_type_names: bool,
    pub camel_case_property_names: bool,
    pub camel_case_enum_values: bool,
    pub class_instead_of_interface: bool,
    pub string_instead_of_enum: bool,
    pub global_scope: bool,
    pub default_module_name: String,
    pub use_declared_namespace: bool,
    /// Output path relative to the project root. Supports `{dir}`, `{file}`
    /// and `{stem}`.
    pub output_path_template: Option<String>,
    pub incremental: bool,
    pub ownership: Ownership,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camel_case_type_names: true,
            camel_case_property_names: true,
            camel_case_enum_values: true,
            class_instead_of_interface: false,
            string_instead_of_enum: false,
            global_scope: false,
            default_module_name: DEFAULT_MODULE_NAME.to_string(),
            use_declared_namespace: false,
            output_path_template: None,
            incremental: true,
            ownership: Ownership::DeclaringUnit,
        }
    }
}

impl FromStr for Settings {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, SETTINGS_FILE_NAME)
    }
}

impl Settings {
    /// Parse a settings file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse settings with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let settings: Self = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        settings.validate(&ctx)?;
        Ok(settings)
    }

    /// Load from `path` when given; otherwise from `dtsgen.toml` in `dir` if
    /// it exists; otherwise defaults.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let candidate = dir.join(SETTINGS_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(template) = &self.output_path_template {
            validate_template(template, ctx)?;
        }
        Ok(())
    }
}

/// An output template must be relative and must name the source file.
pub(crate) fn validate_template(template: &str, ctx: &SourceContext) -> Result<()> {
    if template.starts_with('/') || template.starts_with('\\') || template.contains(':') {
        return Err(ctx.validation_error(
            format!("output path template '{}' must be relative", template),
            template,
        ));
    }
    if !template.contains("{file}") && !template.contains("{stem}") {
        return Err(ctx.validation_error(
            format!(
                "output path template '{}' must contain '{{file}}' or '{{stem}}'",
                template
            ),
            template,
        ));
    }
    Ok(())
}
