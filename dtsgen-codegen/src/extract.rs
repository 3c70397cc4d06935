//! Conversion of one described type into an object-model node.
//!
//! The extractor is policy-free with respect to casing: it decides which
//! members exist, what they are called in serialized form, which module a
//! type belongs to, and what documentation it carries.

use std::sync::LazyLock;

use dtsgen_config::NamingConfig;
use dtsgen_core::{is_identifier, trim_quotes};
use dtsgen_ir::{
    Access, DocComment, MemberDescriptor, MemberKind, Origin, PropertyNode, QualifiedName,
    TypeDescriptor, TypeNode,
};
use regex::Regex;

/// Attributes that exclude a member from serialization.
const IGNORE_ATTRIBUTES: &[&str] = &["IgnoreDataMember", "JsonIgnore", "ScriptIgnore"];

/// Serialization-naming attributes and the argument names that carry the
/// serialized name. `""` is the first positional argument.
const NAME_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("DataMember", &["Name"]),
    ("JsonProperty", &["", "PropertyName"]),
    ("JsonPropertyName", &["", "Name"]),
];

const DATA_CONTRACT: &str = "DataContract";
const MODULE_ATTRIBUTE: &str = "TypeScriptModule";

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0[xX][0-9a-fA-F]+|[0-9]+)[uUlL]{0,2}$").expect("numeric literal pattern")
});

/// Type graph extractor for a single run.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    config: &'a NamingConfig,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a NamingConfig) -> Self {
        Self { config }
    }

    /// A member is emitted iff it is a public instance property with a
    /// public getter and no ignore attribute.
    pub fn include_member(&self, member: &MemberDescriptor) -> bool {
        member.kind == MemberKind::Property
            && member.access == Access::Public
            && member
                .getter
                .is_some_and(|getter| getter.access == Access::Public && !getter.is_static)
            && !member
                .attributes
                .iter()
                .any(|attr| IGNORE_ATTRIBUTES.contains(&attr.simple_name()))
    }

    /// Serialized name from the first naming attribute, if it carries one.
    ///
    /// A naming attribute without a usable argument stops the search and
    /// the declared name applies.
    pub fn member_name(&self, member: &MemberDescriptor) -> Option<String> {
        for attr in &member.attributes {
            let Some((_, arguments)) = NAME_ATTRIBUTES
                .iter()
                .find(|(name, _)| *name == attr.simple_name())
            else {
                continue;
            };
            let value = attr.argument(arguments).map(trim_quotes)?;
            return (!value.is_empty()).then(|| value.to_string());
        }
        None
    }

    /// Emitted type name: `DataContract(Name = ...)` or the declared name.
    pub fn type_name(&self, desc: &TypeDescriptor) -> String {
        data_contract_argument(desc, "Name")
            .unwrap_or_else(|| declared_name(&desc.name).to_string())
    }

    /// Target module for a type.
    ///
    /// An explicit attribute wins, then the declared namespace when the
    /// configuration asks for it, then the default module name.
    pub fn resolve_namespace(&self, desc: &TypeDescriptor) -> String {
        let from_attribute = desc
            .attributes
            .iter()
            .filter(|attr| {
                attr.simple_name()
                    .to_ascii_lowercase()
                    .ends_with(&MODULE_ATTRIBUTE.to_ascii_lowercase())
            })
            .flat_map(|attr| attr.arguments.iter())
            .map(|arg| trim_quotes(&arg.value).trim().to_string())
            .find(|value| !value.is_empty())
            .or_else(|| data_contract_argument(desc, "Namespace").filter(|ns| is_module_name(ns)));
        if let Some(namespace) = from_attribute {
            return namespace;
        }
        if self.config.use_declared_namespace && !desc.namespace.is_empty() {
            return desc.namespace.clone();
        }
        self.config.default_module_name.clone()
    }

    /// Name used when another node refers to this type.
    pub fn qualified_name(&self, desc: &TypeDescriptor) -> QualifiedName {
        QualifiedName {
            namespace: self.resolve_namespace(desc),
            name: self.type_name(desc),
            full_name: desc.full_name.clone(),
        }
    }

    /// Documentation summary. Symbols from outside the project never
    /// expose comments.
    pub fn summary(&self, doc: Option<&DocComment>, origin: Origin) -> Option<String> {
        if origin != Origin::Project {
            return None;
        }
        let doc = doc?;
        doc.xml
            .as_deref()
            .and_then(xml_summary)
            .or_else(|| {
                doc.comment
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
            })
    }

    /// Keep an enum initializer only when it is a plain numeric literal.
    pub fn enum_initializer(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw?.trim();
        NUMERIC_LITERAL.is_match(raw).then(|| raw.to_string())
    }

    /// Enum node, or `None` for an enum with no members.
    pub fn extract_enum(&self, desc: &TypeDescriptor) -> Option<TypeNode> {
        let mut node = self.class_shell(desc);
        node.is_enum = true;
        node.properties = desc
            .members
            .iter()
            .filter(|m| m.kind == MemberKind::EnumValue)
            .map(|m| PropertyNode {
                summary: self.summary(m.doc.as_ref(), desc.origin),
                ..PropertyNode::enum_member(
                    declared_name(&m.name),
                    self.enum_initializer(m.init_expression.as_deref()),
                )
            })
            .collect();
        (!node.properties.is_empty()).then_some(node)
    }

    /// Class node without base or properties; those need resolution.
    pub fn class_shell(&self, desc: &TypeDescriptor) -> TypeNode {
        let name = self.qualified_name(desc);
        TypeNode {
            summary: self.summary(desc.doc.as_ref(), desc.origin),
            ..TypeNode::new(name.full_name, name.name, name.namespace)
        }
    }

    /// Property node for an included member; the type is filled by the caller.
    pub fn property_shell(&self, member: &MemberDescriptor, owner_origin: Origin) -> PropertyNode {
        let origin = if owner_origin == Origin::Project {
            member.origin
        } else {
            Origin::External
        };
        PropertyNode {
            name: declared_name(&member.name).to_string(),
            emitted_name: self.member_name(member),
            ty: None,
            summary: self.summary(member.doc.as_ref(), origin),
            init_expression: None,
        }
    }
}

/// Declared name with a leading verbatim sigil removed.
fn declared_name(name: &str) -> &str {
    name.trim_start_matches('@')
}

fn data_contract_argument(desc: &TypeDescriptor, argument: &str) -> Option<String> {
    desc.attributes
        .iter()
        .find(|attr| attr.simple_name() == DATA_CONTRACT)
        .and_then(|attr| attr.argument(&[argument]))
        .map(|value| trim_quotes(value).to_string())
        .filter(|value| !value.is_empty())
}

/// A dotted identifier usable as a module name.
fn is_module_name(name: &str) -> bool {
    name.split('.').all(is_identifier)
}

/// Text of the first `<summary>` element. Doc comments usually hold several
/// top-level elements, so a failed parse is retried inside a wrapper.
fn xml_summary(xml: &str) -> Option<String> {
    let wrapped;
    let doc = match roxmltree::Document::parse(xml) {
        Ok(doc) => doc,
        Err(_) => {
            wrapped = format!("<doc>{}</doc>", xml);
            roxmltree::Document::parse(&wrapped).ok()?
        }
    };
    let summary = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name("summary"))?;
    let text: String = summary
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
