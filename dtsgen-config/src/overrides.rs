use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result, SourceContext, settings::validate_template};

/// Name of the per-project override file. Matched case-insensitively.
pub const OVERRIDE_FILE_NAME: &str = "tsdefgen.json";

/// Per-project overrides, read from `tsdefgen.json`.
///
/// Absent keys fall through to the global [`Settings`](crate::Settings).
/// Keys are camelCase; the PascalCase spellings are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overrides {
    #[serde(alias = "CamelCaseTypeNames")]
    pub camel_case_type_names: Option<bool>,
    #[serde(alias = "CamelCasePropertyNames")]
    pub camel_case_property_names: Option<bool>,
    #[serde(
        alias = "CamelCaseEnumValues",
        alias = "camelCaseEnumerationValues",
        alias = "CamelCaseEnumerationValues"
    )]
    pub camel_case_enum_values: Option<bool>,
    #[serde(alias = "ClassInsteadOfInterface")]
    pub class_instead_of_interface: Option<bool>,
    #[serde(alias = "StringInsteadOfEnum")]
    pub string_instead_of_enum: Option<bool>,
    #[serde(alias = "GlobalScope")]
    pub global_scope: Option<bool>,
    #[serde(alias = "DefaultModuleName")]
    pub default_module_name: Option<String>,
    #[serde(alias = "UseDeclaredNamespace")]
    pub use_declared_namespace: Option<bool>,
    #[serde(alias = "OutputPathTemplate")]
    pub output_path_template: Option<String>,
}

impl Overrides {
    /// Parse an override document with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let overrides: Self = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        if let Some(template) = &overrides.output_path_template {
            validate_template(template, &ctx)?;
        }
        Ok(overrides)
    }

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
}

/// Outcome of looking for a project override file.
#[derive(Debug)]
pub enum OverrideLoad {
    /// No override file in the project.
    Missing,
    Loaded { path: PathBuf, overrides: Overrides },
    /// The file exists but could not be used. Callers fall back to global
    /// settings and report the error.
    Malformed { path: PathBuf, error: Box<Error> },
}

impl OverrideLoad {
    /// The usable overrides, if any.
    pub fn overrides(&self) -> Option<&Overrides> {
        match self {
            OverrideLoad::Loaded { overrides, .. } => Some(overrides),
            _ => None,
        }
    }
}

/// Find the override file directly inside `project_dir`.
pub fn find_override_file(project_dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(project_dir).ok()?;
    entries
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.eq_ignore_ascii_case(OVERRIDE_FILE_NAME))
                && entry.path().is_file()
        })
        .map(|entry| entry.path())
}

/// Read the project's override file, never failing.
pub fn load_overrides(project_dir: &Path) -> OverrideLoad {
    let Some(path) = find_override_file(project_dir) else {
        return OverrideLoad::Missing;
    };
    match Overrides::from_file(&path) {
        Ok(overrides) => {
            tracing::debug!(path = %path.display(), "loaded project overrides");
            OverrideLoad::Loaded { path, overrides }
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "ignoring malformed override file");
            OverrideLoad::Malformed { path, error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_and_pascal_keys() {
        let overrides = Overrides::from_str_with_filename(
            r#"{ "camelCaseTypeNames": false, "GlobalScope": true, "CamelCaseEnumerationValues": false }"#,
            OVERRIDE_FILE_NAME,
        )
        .unwrap();
        assert_eq!(overrides.camel_case_type_names, Some(false));
        assert_eq!(overrides.global_scope, Some(true));
        assert_eq!(overrides.camel_case_enum_values, Some(false));
        assert_eq!(overrides.default_module_name, None);
    }

    #[test]
    fn test_malformed_json_has_span() {
        let err = Overrides::from_str_with_filename("{\n  \"globalScope\": tru\n}", "tsdefgen.json")
            .unwrap_err();
        match *err {
            Error::InvalidOverrides { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_overrides_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_overrides(dir.path()), OverrideLoad::Missing));

        std::fs::write(dir.path().join("TsDefGen.JSON"), r#"{"defaultModuleName":"api"}"#).unwrap();
        let load = load_overrides(dir.path());
        assert_eq!(
            load.overrides().and_then(|o| o.default_module_name.as_deref()),
            Some("api")
        );
    }

    #[test]
    fn test_load_overrides_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(OVERRIDE_FILE_NAME), "{ not json").unwrap();
        let load = load_overrides(dir.path());
        assert!(matches!(load, OverrideLoad::Malformed { .. }));
        assert!(load.overrides().is_none());
    }
}
