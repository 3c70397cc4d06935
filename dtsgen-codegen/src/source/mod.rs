//! The Type Source contract.
//!
//! A Type Source answers questions about the source type graph: what a
//! qualified type looks like, which types a source unit declares, and what
//! the unit's text is. [`ProjectModel`] implements it over a serialized
//! project description.

mod project;

use std::path::PathBuf;

use dtsgen_ir::{Primitive, TypeDescriptor, UnitId};
use thiserror::Error;

pub use project::ProjectModel;

use crate::resolve::generic_arguments;

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project model")]
    Model(#[from] serde_json::Error),

    #[error("unknown source unit '{0}'")]
    UnknownUnit(UnitId),

    #[error("{0}")]
    Other(String),
}

/// Read access to an object-oriented source type graph.
pub trait TypeSource {
    /// Describe a type by qualified name. `Ok(None)` when the name is unknown.
    fn describe(&self, qualified_name: &str) -> SourceResult<Option<TypeDescriptor>>;

    /// Best-effort guess of the single generic argument of a collection
    /// signature, as a qualified or primitive type name.
    ///
    /// The default reads the argument's text out of the signature and
    /// accepts it when it is a known primitive or a project type.
    fn resolve_generic_argument(&self, raw_signature: &str) -> Option<String> {
        guess_generic_argument(self, raw_signature)
    }

    /// Qualified names of the top-level types declared in `unit`, in
    /// declaration order.
    fn unit_types(&self, unit: &UnitId) -> SourceResult<Vec<String>>;

    /// Current text of `unit`.
    fn unit_content(&self, unit: &UnitId) -> SourceResult<String>;

    /// All known units.
    fn units(&self) -> Vec<UnitId>;
}

/// Single-argument generic guessing. Multi-argument generics and types
/// outside the project yield `None`.
pub fn guess_generic_argument<S: TypeSource + ?Sized>(
    source: &S,
    raw_signature: &str,
) -> Option<String> {
    let arguments = generic_arguments(raw_signature);
    let [argument] = arguments.as_slice() else {
        return None;
    };
    if Primitive::from_type_name(argument).is_some() {
        return Some(argument.clone());
    }
    match source.describe(argument) {
        Ok(Some(desc)) if desc.is_project() => Some(desc.full_name),
        _ => None,
    }
}
