//! TypeScript import builder.

use dtsgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for named import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    fn statement(&self) -> String {
        if self.named.is_empty() {
            format!("import \"{}\";", self.from)
        } else {
            format!(
                "import {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.from
            )
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::declaration();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
