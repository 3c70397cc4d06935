//! Interface and class declarations.

use dtsgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::property_key;
use crate::naming::ObjectKeyword;

/// A rendered type, possibly spanning lines when it contains an inline shape.
///
/// `head` and `tail` surround the shape body; a type without a shape is just
/// `head` followed by `tail`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpr {
    head: String,
    shape: Option<Vec<Field>>,
    tail: String,
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            head: name.into(),
            shape: None,
            tail: String::new(),
        }
    }

    /// Anonymous inline structure.
    pub fn shape(fields: Vec<Field>) -> Self {
        Self {
            head: "{".to_string(),
            shape: Some(fields),
            tail: "}".to_string(),
        }
    }

    /// Index signature `{ [index: K]: V }`.
    pub fn index(key: &str, value: TypeExpr) -> Self {
        Self {
            head: format!("{{ [index: {}]: {}", key, value.head),
            shape: value.shape,
            tail: format!("{} }}", value.tail),
        }
    }

    /// Append `[]` after the type when `array` is set.
    pub fn array(mut self, array: bool) -> Self {
        if array {
            self.tail.push_str("[]");
        }
        self
    }

    pub fn is_inline(&self) -> bool {
        self.shape.is_none()
    }

    /// Single-line text; only meaningful when [`is_inline`](Self::is_inline).
    pub fn inline_text(&self) -> String {
        format!("{}{}", self.head, self.tail)
    }
}

/// One member of an object declaration or inline shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    ty: TypeExpr,
    array: bool,
    doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            array: false,
            doc: None,
        }
    }

    /// Append `[]` after the type.
    pub fn array(mut self, array: bool) -> Self {
        self.array = array;
        self
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.as_str()));
        }
        let key = property_key(&self.name);
        let array = if self.array { "[]" } else { "" };
        match &self.ty.shape {
            None => fragments.push(CodeFragment::line(format!(
                "{}: {}{};",
                key,
                self.ty.inline_text(),
                array
            ))),
            Some(fields) => fragments.push(CodeFragment::block(
                format!("{}: {}", key, self.ty.head),
                fields.iter().flat_map(Renderable::to_fragments).collect(),
                Some(format!("{}{};", self.ty.tail, array)),
            )),
        }
        fragments
    }
}

/// Builder for `interface` and `class` declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDecl {
    keyword: ObjectKeyword,
    name: String,
    extends: Option<String>,
    fields: Vec<Field>,
    doc: Option<String>,
}

impl ObjectDecl {
    pub fn new(keyword: ObjectKeyword, name: impl Into<String>) -> Self {
        Self {
            keyword,
            name: name.into(),
            extends: None,
            fields: Vec::new(),
            doc: None,
        }
    }

    pub fn extends(mut self, base: Option<String>) -> Self {
        self.extends = base;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::declaration();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ObjectDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.as_str()));
        }
        let extends = self
            .extends
            .as_deref()
            .map(|base| format!(" extends {}", base))
            .unwrap_or_default();
        let header = format!("export {} {}{} {{", self.keyword.as_str(), self.name, extends);

        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("{}}}", header)));
        } else {
            fragments.push(CodeFragment::block(
                header,
                self.fields.iter().flat_map(Renderable::to_fragments).collect(),
                Some("}".to_string()),
            ));
        }
        fragments
    }
}
