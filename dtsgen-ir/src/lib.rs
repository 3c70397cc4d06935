//! Object model for the dtsgen declaration generator.
//!
//! This crate holds two families of types:
//!
//! - the **descriptors** a Type Source yields for a qualified type name
//!   ([`TypeDescriptor`], [`MemberDescriptor`], ...), which mirror what an
//!   object-oriented source model knows about a type;
//! - the **object model** produced by extraction and consumed by the
//!   declaration writer ([`TypeNode`], [`PropertyNode`], [`TypeRef`],
//!   [`SourceUnit`]).
//!
//! # Architecture
//!
//! ```text
//! Type Source → descriptors → extraction/resolution → object model → writer
//! ```
//!
//! The model stores untransformed source names. Casing and shape policy are
//! applied only when writing.

mod descriptor;
mod model;
mod unit;

pub use descriptor::{
    Access, Accessor, AttributeArgument, AttributeDescriptor, DocComment, MemberDescriptor,
    MemberKind, Origin, TypeDescriptor, TypeKind, TypeSignature,
};
pub use model::{MapKey, Primitive, PropertyNode, QualifiedName, TypeNode, TypeRef, TypeTarget};
pub use unit::{SourceUnit, UnitId};
