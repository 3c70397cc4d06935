//! Language-agnostic generator traits.

use dtsgen_core::Sink;
use dtsgen_ir::{MapKey, Primitive, UnitId};

use crate::{CheckEntry, RunReport};

/// A declaration generator for one target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript").
    fn language(&self) -> &'static str;

    /// Extension of generated files (e.g., "d.ts").
    fn file_extension(&self) -> &'static str;

    /// Render the requested units without consulting or touching any output.
    fn preview(&self, units: &[UnitId]) -> Vec<PreviewFile>;

    /// Generate the requested units into `sink`.
    fn generate(&self, sink: &mut dyn Sink, units: &[UnitId]) -> RunReport;

    /// Report which units are stale, without writing.
    fn check(&self, sink: &dyn Sink, units: &[UnitId]) -> Vec<CheckEntry>;
}

/// A generated file for preview.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
}

/// Maps resolved types to target-language type strings.
pub trait TypeMapper {
    fn language(&self) -> &'static str;

    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// Type used for anything that could not be resolved.
    fn any_type(&self) -> &'static str;

    fn map_key(&self, key: MapKey) -> &'static str;
}
