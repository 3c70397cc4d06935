//! Indented text assembly.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates lines at a current indentation level.
///
/// ```
/// use dtsgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::declaration();
/// builder.push_fragment(CodeFragment::block(
///     "declare module server {",
///     vec![CodeFragment::line("export type id = number;")],
///     Some("}".into()),
/// ));
///
/// assert_eq!(builder.build(), "declare module server {\n\texport type id = number;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Tab-indented builder for declaration files.
    pub fn declaration() -> Self {
        Self::new(Indent::DECLARATION)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.indent.write_to(&mut self.buffer, self.level);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Emit every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.push_fragment(fragment);
        }
        self
    }

    pub fn push_fragment(&mut self, fragment: CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::JsDoc(text) => {
                self.push_line(&format!("/** {} */", text));
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.level += 1;
                for f in body {
                    self.push_fragment(f);
                }
                self.level -= 1;
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}
