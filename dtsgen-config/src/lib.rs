//! Configuration for dtsgen.
//!
//! Two documents feed a run: global [`Settings`] from `dtsgen.toml` and
//! optional per-project [`Overrides`] from `tsdefgen.json`. They are merged
//! into an immutable [`NamingConfig`] with [`NamingConfig::resolve`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod naming;
mod overrides;
mod settings;

pub use error::{Error, Result, SourceContext};
pub use naming::NamingConfig;
pub use overrides::{OVERRIDE_FILE_NAME, OverrideLoad, Overrides, find_override_file, load_overrides};
pub use settings::{DEFAULT_MODULE_NAME, Ownership, SETTINGS_FILE_NAME, Settings};
