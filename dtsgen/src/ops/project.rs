//! A project loaded for one command run.

use std::path::PathBuf;

use dtsgen_codegen::ProjectModel;
use dtsgen_config::NamingConfig;
use dtsgen_ir::UnitId;

/// Where the project overrides came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideStatus {
    Missing,
    Applied(PathBuf),
    /// Present but malformed; global settings were used instead.
    Ignored(PathBuf),
}

/// A loaded project: its model and the configuration for this run.
pub struct Project {
    pub model_path: PathBuf,
    pub settings_path: Option<PathBuf>,
    pub model: ProjectModel,
    pub overrides: OverrideStatus,
    pub config: NamingConfig,
    pub units: Vec<UnitId>,
}
