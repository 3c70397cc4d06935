//! TypeScript declaration writer for dtsgen.
//!
//! Turns resolved [`SourceUnit`](dtsgen_ir::SourceUnit)s into `.d.ts` text
//! and drives whole generation runs over a
//! [`TypeSource`](dtsgen_codegen::TypeSource).
//!
//! # Usage
//!
//! ```ignore
//! use dtsgen_codegen::ProjectModel;
//! use dtsgen_codegen_typescript::Generator;
//! use dtsgen_config::NamingConfig;
//! use dtsgen_core::FsSink;
//!
//! let model = ProjectModel::from_file("project.json")?;
//! let config = NamingConfig::default();
//! let mut sink = FsSink::new(model.root());
//!
//! let report = Generator::new(&model, &config).run(&mut sink, &units);
//! ```
//!
//! # Generated Output
//!
//! One file per source unit, `<file>.d.ts` next to the source unless an
//! output template says otherwise:
//!
//! - `//#hash:<fingerprint>` on the first line in incremental mode
//! - imports of the units that declare referenced types
//! - one `declare module <namespace> { ... }` block per namespace

mod code_file;
mod generator;
mod naming;
mod type_mapper;
mod writer;

pub mod ast;

pub use code_file::CodeFile;
pub use dtsgen_codegen::language::{LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::{DeclarationStyle, EnumStyle, NamingPolicy, ObjectKeyword};
pub use type_mapper::TypeScriptTypeMapper;
pub use writer::DeclarationWriter;
