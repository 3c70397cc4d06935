//! Building blocks for generated text.
//!
//! Declaration nodes implement [`Renderable`] and produce [`CodeFragment`]s;
//! a [`CodeBuilder`] lays them out with an [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
