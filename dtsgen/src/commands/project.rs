use std::path::{Path, PathBuf};

use clap::Args;
use dtsgen_codegen::{ProjectModel, TypeSource};
use dtsgen_config::{NamingConfig, OverrideLoad, SETTINGS_FILE_NAME, Settings, load_overrides};
use dtsgen_ir::UnitId;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::ops::{OverrideStatus, Project};

/// Default name of the serialized project model.
pub const MODEL_FILE_NAME: &str = "dtsgen.model.json";

/// Arguments shared by every command that works on a project.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Path to the project model (defaults to <project>/dtsgen.model.json)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Path to global settings (defaults to <project>/dtsgen.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source units to process, relative to the project root (defaults to all)
    pub units: Vec<String>,
}

impl ProjectArgs {
    pub fn model_path(&self) -> PathBuf {
        self.model
            .clone()
            .unwrap_or_else(|| self.project.join(MODEL_FILE_NAME))
    }

    fn settings_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            let candidate = self.project.join(SETTINGS_FILE_NAME);
            candidate.is_file().then_some(candidate)
        })
    }

    /// Load the model, settings and project overrides.
    ///
    /// A malformed global settings file exits with a rendered diagnostic. A
    /// malformed override file is reported and the run falls back to the
    /// global settings.
    pub fn load(&self) -> Result<Project> {
        let settings = Settings::load(self.config.as_deref(), &self.project).unwrap_or_exit();

        let model_path = self.model_path();
        let model = ProjectModel::from_file(&model_path).wrap_err_with(|| {
            format!("Failed to load project model '{}'", model_path.display())
        })?;

        let load = load_overrides(model.root());
        let config = NamingConfig::resolve(&settings, load.overrides());
        let overrides = match load {
            OverrideLoad::Missing => OverrideStatus::Missing,
            OverrideLoad::Loaded { path, .. } => OverrideStatus::Applied(path),
            OverrideLoad::Malformed { path, error } => {
                eprintln!("warning: ignoring project overrides, using global settings");
                eprintln!("{:?}", miette::Report::new(*error));
                OverrideStatus::Ignored(path)
            }
        };
        let units = select_units(&model, &self.units, model.root());

        Ok(Project {
            model_path,
            settings_path: self.settings_path(),
            model,
            overrides,
            config,
            units,
        })
    }
}

/// Requested units, or every unit of the model when none were named.
///
/// Paths are normalized to forward slashes and made relative to `root`
/// when they were given under it.
fn select_units(model: &ProjectModel, requested: &[String], root: &Path) -> Vec<UnitId> {
    if requested.is_empty() {
        return model.units();
    }
    requested
        .iter()
        .map(|raw| {
            let path = Path::new(raw);
            let relative = path.strip_prefix(root).unwrap_or(path);
            UnitId::new(relative.to_string_lossy().replace('\\', "/"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ProjectModel {
        ProjectModel::new("/shop")
            .with_unit("Models/Order.cs", "class Order {}")
            .with_unit("Models/Line.cs", "class Line {}")
    }

    #[test]
    fn test_select_all_units_when_none_requested() {
        let units = select_units(&model(), &[], Path::new("/shop"));
        assert_eq!(
            units,
            vec![UnitId::new("Models/Order.cs"), UnitId::new("Models/Line.cs")]
        );
    }

    #[test]
    fn test_select_units_relative_to_root() {
        let requested = vec![
            "/shop/Models/Order.cs".to_string(),
            "Models\\Line.cs".to_string(),
        ];
        let units = select_units(&model(), &requested, Path::new("/shop"));
        assert_eq!(
            units,
            vec![UnitId::new("Models/Order.cs"), UnitId::new("Models/Line.cs")]
        );
    }

    #[test]
    fn test_default_model_path() {
        let args = ProjectArgs {
            project: PathBuf::from("web"),
            model: None,
            config: None,
            units: Vec::new(),
        };
        assert_eq!(args.model_path(), PathBuf::from("web").join(MODEL_FILE_NAME));
    }
}
