use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use dtsgen_ir::{TypeDescriptor, UnitId};
use indexmap::IndexMap;
use serde::Deserialize;

use super::{SourceError, SourceResult, TypeSource};

/// A Type Source backed by a serialized project description.
///
/// The JSON document lists source units and type descriptors:
///
/// ```json
/// {
///   "units": [{ "path": "Models/Order.cs" }],
///   "types": [{ "fullName": "App.Order", "name": "Order", "unit": "Models/Order.cs" }]
/// }
/// ```
///
/// Unit text may be embedded as `content`; otherwise it is read from disk
/// relative to the project root.
#[derive(Debug, Clone, Default)]
pub struct ProjectModel {
    root: PathBuf,
    units: IndexMap<UnitId, Option<String>>,
    types: IndexMap<String, TypeDescriptor>,
    nested: HashSet<String>,
}

#[derive(Debug, Deserialize)]
struct ModelDocument {
    #[serde(default)]
    root: Option<PathBuf>,
    #[serde(default)]
    units: Vec<UnitEntry>,
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

#[derive(Debug, Deserialize)]
struct UnitEntry {
    path: UnitId,
    #[serde(default)]
    content: Option<String>,
}

impl ProjectModel {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Parse a model document. A relative `root` in the document is
    /// resolved against `base`.
    pub fn from_json_str(json: &str, base: impl AsRef<Path>) -> SourceResult<Self> {
        let doc: ModelDocument = serde_json::from_str(json)?;
        let base = base.as_ref();
        let root = match doc.root {
            Some(root) if root.is_absolute() => root,
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        };

        let mut model = Self::new(root);
        for entry in doc.units {
            model.units.insert(entry.path, entry.content);
        }
        for desc in doc.types {
            model.insert_type(desc);
        }
        Ok(model)
    }

    /// Load a model document; the project root defaults to its directory.
    pub fn from_file(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_json_str(&json, base)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Register a unit with embedded text.
    pub fn with_unit(mut self, unit: impl Into<UnitId>, content: impl Into<String>) -> Self {
        self.set_content(unit, content);
        self
    }

    pub fn with_type(mut self, desc: TypeDescriptor) -> Self {
        self.insert_type(desc);
        self
    }

    /// Replace the embedded text of a unit.
    pub fn set_content(&mut self, unit: impl Into<UnitId>, content: impl Into<String>) {
        self.units.insert(unit.into(), Some(content.into()));
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    fn insert_type(&mut self, desc: TypeDescriptor) {
        if let Some(unit) = &desc.unit {
            self.units.entry(unit.clone()).or_insert(None);
        }
        self.nested.extend(desc.nested.iter().cloned());
        self.types.insert(desc.full_name.clone(), desc);
    }

    /// Look up by exact qualified name, then by a unique simple name.
    fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        let name = name.trim();
        let name = name.strip_prefix("global::").unwrap_or(name);
        if let Some(desc) = self.types.get(name) {
            return Some(desc);
        }
        let mut matches = self
            .types
            .values()
            .filter(|d| d.name == name || d.full_name.ends_with(&format!(".{}", name)));
        match (matches.next(), matches.next()) {
            (Some(desc), None) => Some(desc),
            _ => None,
        }
    }
}

impl TypeSource for ProjectModel {
    fn describe(&self, qualified_name: &str) -> SourceResult<Option<TypeDescriptor>> {
        Ok(self.lookup(qualified_name).cloned())
    }

    fn unit_types(&self, unit: &UnitId) -> SourceResult<Vec<String>> {
        if !self.units.contains_key(unit) {
            return Err(SourceError::UnknownUnit(unit.clone()));
        }
        Ok(self
            .types
            .values()
            .filter(|d| d.unit.as_ref() == Some(unit) && !self.nested.contains(&d.full_name))
            .map(|d| d.full_name.clone())
            .collect())
    }

    fn unit_content(&self, unit: &UnitId) -> SourceResult<String> {
        match self.units.get(unit) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => {
                let path = self.root.join(unit.as_path());
                std::fs::read_to_string(&path).map_err(|source| SourceError::Io { path, source })
            }
            None => Err(SourceError::UnknownUnit(unit.clone())),
        }
    }

    fn units(&self) -> Vec<UnitId> {
        self.units.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use dtsgen_ir::MemberDescriptor;

    use super::*;

    fn model() -> ProjectModel {
        let mut outer = TypeDescriptor::class("App", "Outer").in_unit("Outer.cs");
        outer.nested.push("App.Outer.Inner".into());
        ProjectModel::new("/project")
            .with_unit("Outer.cs", "class Outer {}")
            .with_type(outer)
            .with_type(
                TypeDescriptor::class("App.Outer", "Inner")
                    .in_unit("Outer.cs")
                    .member(MemberDescriptor::property("Id", "int")),
            )
            .with_type(TypeDescriptor::class("Lib", "Money").external())
    }

    #[test]
    fn test_describe_by_full_and_simple_name() {
        let model = model();
        assert!(model.describe("App.Outer").unwrap().is_some());
        assert_eq!(
            model.describe("Money").unwrap().map(|d| d.full_name),
            Some("Lib.Money".to_string())
        );
        assert!(model.describe("Nope").unwrap().is_none());
    }

    #[test]
    fn test_unit_types_excludes_nested() {
        let model = model();
        let types = model.unit_types(&UnitId::new("Outer.cs")).unwrap();
        assert_eq!(types, vec!["App.Outer".to_string()]);
        assert!(matches!(
            model.unit_types(&UnitId::new("Missing.cs")),
            Err(SourceError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_generic_argument_guess() {
        let model = model();
        assert_eq!(
            model.resolve_generic_argument("System.Collections.Generic.List<int>"),
            Some("int".to_string())
        );
        assert_eq!(
            model.resolve_generic_argument("List<Inner>"),
            Some("App.Outer.Inner".to_string())
        );
        assert_eq!(model.resolve_generic_argument("List<Money>"), None);
        assert_eq!(model.resolve_generic_argument("Dictionary<string, int>"), None);
    }

    #[test]
    fn test_unit_content_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Models")).unwrap();
        std::fs::write(dir.path().join("Models/Order.cs"), "class Order {}").unwrap();

        let json = r#"{
            "units": [{ "path": "Models/Order.cs" }, { "path": "Inline.cs", "content": "x" }],
            "types": [{ "fullName": "App.Order", "name": "Order", "unit": "Models/Order.cs" }]
        }"#;
        let model = ProjectModel::from_json_str(json, dir.path()).unwrap();
        assert_eq!(
            model.unit_content(&UnitId::new("Models/Order.cs")).unwrap(),
            "class Order {}"
        );
        assert_eq!(model.unit_content(&UnitId::new("Inline.cs")).unwrap(), "x");
        assert_eq!(model.units().len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let model = ProjectModel::new("/nonexistent-root").with_type(
            TypeDescriptor::class("App", "Order").in_unit("Order.cs"),
        );
        assert!(matches!(
            model.unit_content(&UnitId::new("Order.cs")),
            Err(SourceError::Io { .. })
        ));
    }
}
