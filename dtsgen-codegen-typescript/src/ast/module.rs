//! Namespace grouping.

use dtsgen_codegen::builder::{CodeFragment, Renderable};

/// Declarations of one namespace, wrapped in `declare module <name> { }`
/// unless built with [`ModuleBlock::global`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleBlock {
    name: Option<String>,
    items: Vec<CodeFragment>,
}

impl ModuleBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            items: Vec::new(),
        }
    }

    pub fn global() -> Self {
        Self {
            name: None,
            items: Vec::new(),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.items.extend(node.to_fragments());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Renderable for ModuleBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.name {
            Some(name) => vec![CodeFragment::block(
                format!("declare module {} {{", name),
                self.items.clone(),
                Some("}".to_string()),
            )],
            None => self.items.clone(),
        }
    }
}
