//! Type graph resolution and incremental generation for dtsgen.
//!
//! This crate turns a Type Source into resolved [`SourceUnit`]s ready for a
//! language writer.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`source`] - The Type Source contract and the serialized [`ProjectModel`]
//! - [`extract`] - Conversion of one described type into a node
//! - [`resolve`] - Depth-first dependency resolution and unit ownership
//! - [`gate`] - Fingerprint-based incremental skipping
//! - [`layout`] - Output paths and import specifiers
//! - [`pipeline`] - Diagnostics
//! - [`language`] - Language-specific generator traits
//! - [`testing`] - Test utilities (feature-gated)
//!
//! [`SourceUnit`]: dtsgen_ir::SourceUnit
//! [`ProjectModel`]: source::ProjectModel

pub mod builder;
pub mod extract;
pub mod gate;
pub mod language;
pub mod layout;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod source;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use extract::Extractor;
pub use gate::{GateDecision, IncrementalGate};
pub use language::{LanguageCodegen, PreviewFile, TypeMapper};
pub use layout::OutputLayout;
pub use report::{CheckEntry, RunReport, UnitOutcome, UnitReport, UnitStatus};
pub use resolve::{Resolution, Resolver};
pub use source::{ProjectModel, SourceError, SourceResult, TypeSource};
