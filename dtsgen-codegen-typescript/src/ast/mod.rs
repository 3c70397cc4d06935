//! TypeScript declaration nodes.
//!
//! Each node renders to [`CodeFragment`](dtsgen_codegen::builder::CodeFragment)s
//! and is positioned by [`CodeFile`](crate::CodeFile) or a [`ModuleBlock`].

mod doc;
mod enums;
mod imports;
mod module;
mod object;

pub use doc::{doc_text, property_key};
pub use enums::{EnumDecl, EnumMember};
pub use imports::Import;
pub use module::ModuleBlock;
pub use object::{Field, ObjectDecl, TypeExpr};
