//! Core utilities and types for the dtsgen declaration generator.
//!
//! This crate provides the primitives shared by every other dtsgen crate:
//! casing helpers, the content fingerprint used for incremental generation,
//! and the [`Sink`] contract through which generated files leave the core.

mod file;
mod fingerprint;
mod utils;

// File operations
pub use file::{FsSink, Sink, write_file};
// Change detection
pub use fingerprint::{Fingerprint, HASH_MARKER_PREFIX};
// String utilities
pub use utils::{is_identifier, to_camel_case, trim_quotes};
