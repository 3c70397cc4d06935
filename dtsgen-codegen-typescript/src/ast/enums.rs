//! Enum declarations, as `const enum` or a union of string literals.

use dtsgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::naming::EnumStyle;

/// Normalize a numeric enum initializer for JavaScript.
///
/// Unsigned and long suffixes are dropped. Decimal literals lose their
/// leading zeros so they are not read as octal; a literal that is all zeros
/// becomes `0`. Hex literals are kept as written.
pub fn clean_enum_value(value: &str) -> String {
    let value = value.trim().trim_end_matches(['u', 'U', 'l', 'L']);
    if value.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("0x")) {
        return value.to_string();
    }
    match value.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    name: String,
    value: Option<String>,
    doc: Option<String>,
}

impl EnumMember {
    /// Member with an optional raw numeric initializer.
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(clean_enum_value),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }
}

/// Builder for enum declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    name: String,
    style: EnumStyle,
    members: Vec<EnumMember>,
    doc: Option<String>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>, style: EnumStyle) -> Self {
        Self {
            name: name.into(),
            style,
            members: Vec::new(),
            doc: None,
        }
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::declaration();
        builder.emit(self);
        builder.build()
    }

    fn member_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for member in &self.members {
            if let Some(doc) = &member.doc {
                fragments.push(CodeFragment::jsdoc(doc.as_str()));
            }
            fragments.push(CodeFragment::line(match &member.value {
                Some(value) => format!("{} = {},", member.name, value),
                None => format!("{},", member.name),
            }));
        }
        fragments
    }
}

impl Renderable for EnumDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.as_str()));
        }
        match self.style {
            EnumStyle::ConstEnum => fragments.push(CodeFragment::block(
                format!("export const enum {} {{", self.name),
                self.member_fragments(),
                Some("}".to_string()),
            )),
            EnumStyle::StringUnion => {
                let literals = self
                    .members
                    .iter()
                    .map(|m| format!("'{}'", m.name))
                    .collect::<Vec<_>>()
                    .join(" | ");
                fragments.push(CodeFragment::line(format!(
                    "export type {} = {};",
                    self.name, literals
                )));
            }
        }
        fragments
    }
}
