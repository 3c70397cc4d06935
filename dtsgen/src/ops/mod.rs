//! Core operations.
//!
//! This module contains the business logic for dtsgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;
pub mod info;
mod project;

pub use check::check;
pub use clean::clean;
pub use generate::generate;
pub use info::info;
pub use project::{OverrideStatus, Project};
