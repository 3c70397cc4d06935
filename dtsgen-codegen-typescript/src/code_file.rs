//! CodeFile abstraction for structured declaration file generation.
//!
//! A declaration file has three sections rendered in order: an optional
//! fingerprint marker line, imports, and the body.

use dtsgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A structured representation of a declaration file.
///
/// # Example
///
/// ```ignore
/// let text = CodeFile::new()
///     .marker(Some(fingerprint.marker_line()))
///     .import(Import::new("./OrderLine.cs").named("orderLine"))
///     .add(ModuleBlock::new("server").add(order))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    marker: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first line of the file.
    pub fn marker(mut self, marker: Option<String>) -> Self {
        self.marker = marker;
        self
    }

    /// Add an import statement. Duplicate imports are kept once.
    pub fn import(mut self, import: Import) -> Self {
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
        self
    }

    /// Add imports from an iterator.
    pub fn imports(self, imports: impl IntoIterator<Item = Import>) -> Self {
        imports.into_iter().fold(self, Self::import)
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with tab indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::DECLARATION)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(marker) = &self.marker {
            builder.push_line(marker);
        }

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.push_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// True when nothing but the marker would be written.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{Field, ModuleBlock, ObjectDecl, TypeExpr},
        naming::ObjectKeyword,
    };

    fn order() -> ObjectDecl {
        ObjectDecl::new(ObjectKeyword::Interface, "order")
            .field(Field::new("id", TypeExpr::named("number")))
    }

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_marker_only() {
        let file = CodeFile::new().marker(Some("//#hash:AAAAAAAAAAA=".into()));
        assert!(file.is_empty());
        assert_eq!(file.render(), "//#hash:AAAAAAAAAAA=\n");
    }

    #[test]
    fn test_full_file() {
        let file = CodeFile::new()
            .marker(Some("//#hash:AAAAAAAAAAA=".into()))
            .import(Import::new("./OrderLine.cs").named("orderLine"))
            .import(Import::new("./OrderLine.cs").named("orderLine"))
            .add(ModuleBlock::new("server").add(order()));

        assert_eq!(
            file.render(),
            "//#hash:AAAAAAAAAAA=\n\
             import { orderLine } from \"./OrderLine.cs\";\n\
             \n\
             declare module server {\n\
             \texport interface order {\n\
             \t\tid: number;\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_blank_lines_between_modules() {
        let file = CodeFile::new()
            .add(ModuleBlock::new("a").add(order()))
            .add(ModuleBlock::new("b").add(order()));
        assert!(file.render().contains("}\n\ndeclare module b {"));
    }

    #[test]
    fn test_render_with_spaces() {
        let file = CodeFile::new().add(ModuleBlock::new("server").add(order()));
        assert_eq!(
            file.render_with_indent(Indent::Spaces(2)),
            "declare module server {\n  export interface order {\n    id: number;\n  }\n}\n"
        );
    }
}
