//! Descriptors yielded by a Type Source.
//!
//! These are plain data, deserializable from a JSON project model.

use serde::{Deserialize, Serialize};

use crate::UnitId;

/// Whether a type is a class-like object or an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Enum,
}

/// Where a symbol is defined relative to the traversed source set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Defined inside the project being generated.
    #[default]
    Project,
    /// Defined in a referenced library; opaque apart from its shape.
    External,
}

/// Declared accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

/// Kind of a type member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    #[default]
    Property,
    EnumValue,
    Field,
    Method,
}

/// A property getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    #[serde(default)]
    pub access: Access,
    /// Shared (static) accessor.
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

/// Raw type signature as written in the source model
/// (e.g. `System.Collections.Generic.List<OrderLine>`, `int[]`, `int?`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSignature(pub String);

impl TypeSignature {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element signature of an array type (`T[]` -> `T`).
    pub fn array_element(&self) -> Option<TypeSignature> {
        self.0
            .trim()
            .strip_suffix("[]")
            .map(|element| TypeSignature::new(element.trim_end()))
    }

    /// Unwrap `T?` and `Nullable<T>` to `T`; other signatures are returned as is.
    pub fn unwrap_nullable(&self) -> TypeSignature {
        let raw = self.0.trim();
        if let Some(inner) = raw.strip_suffix('?') {
            return TypeSignature::new(inner.trim_end());
        }
        let generic = raw.strip_prefix("System.").unwrap_or(raw);
        if let Some(inner) = generic
            .strip_prefix("Nullable<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return TypeSignature::new(inner.trim());
        }
        TypeSignature::new(raw)
    }

    /// Local name without namespace or generic arguments
    /// (`System.Collections.Generic.List<X>` -> `List`).
    pub fn local_name(&self) -> &str {
        let head = self.0.split('<').next().unwrap_or_default().trim();
        head.rsplit('.').next().unwrap_or(head)
    }
}

impl From<&str> for TypeSignature {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A positional or named attribute argument.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeArgument {
    /// Argument name; empty for positional arguments.
    #[serde(default)]
    pub name: String,
    /// Argument value as written (string literals keep their quotes).
    pub value: String,
}

/// An attribute applied to a type or member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Name as written, possibly qualified (e.g. `Newtonsoft.Json.JsonIgnore`).
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<AttributeArgument>,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Add a positional argument.
    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.arguments.push(AttributeArgument {
            name: String::new(),
            value: value.into(),
        });
        self
    }

    /// Add a named argument.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push(AttributeArgument {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Simple name without namespace or `Attribute` suffix
    /// (`System.Runtime.Serialization.DataMemberAttribute` -> `DataMember`).
    pub fn simple_name(&self) -> &str {
        let last = self.name.rsplit('.').next().unwrap_or(&self.name);
        last.strip_suffix("Attribute")
            .filter(|s| !s.is_empty())
            .unwrap_or(last)
    }

    /// First argument whose name is one of `names` (`""` matches positional).
    pub fn argument(&self, names: &[&str]) -> Option<&str> {
        self.arguments
            .iter()
            .find(|a| names.contains(&a.name.as_str()))
            .map(|a| a.value.as_str())
    }
}

/// Documentation attached to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocComment {
    /// XML documentation (`<summary>...</summary>`).
    #[serde(default)]
    pub xml: Option<String>,
    /// Plain inline comment.
    #[serde(default)]
    pub comment: Option<String>,
}

/// A member of a described type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeSignature>,
    #[serde(default)]
    pub access: Access,
    /// Absent in a model document means a public instance getter;
    /// `null` means the property cannot be read.
    #[serde(default = "public_getter")]
    pub getter: Option<Accessor>,
    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
    #[serde(default)]
    pub doc: Option<DocComment>,
    /// Enum value initializer as written.
    #[serde(default, alias = "init")]
    pub init_expression: Option<String>,
    #[serde(default)]
    pub origin: Origin,
}

fn public_getter() -> Option<Accessor> {
    Some(Accessor::default())
}

impl MemberDescriptor {
    /// A public instance property with a public getter.
    pub fn property(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
            ty: Some(TypeSignature::new(ty)),
            access: Access::Public,
            getter: Some(Accessor::default()),
            attributes: Vec::new(),
            doc: None,
            init_expression: None,
            origin: Origin::Project,
        }
    }

    /// An enumeration member.
    pub fn enum_value(name: impl Into<String>, init: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::EnumValue,
            ty: None,
            access: Access::Public,
            getter: None,
            attributes: Vec::new(),
            doc: None,
            init_expression: init.map(str::to_string),
            origin: Origin::Project,
        }
    }

    pub fn attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }
}

/// Everything a Type Source knows about one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub full_name: String,
    pub name: String,
    /// Namespace as declared in source.
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub kind: TypeKind,
    /// Qualified name of the declared base type.
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub origin: Origin,
    /// Source unit declaring the type, when it belongs to the project.
    #[serde(default)]
    pub unit: Option<UnitId>,
    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
    #[serde(default)]
    pub doc: Option<DocComment>,
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
    /// Qualified names of types nested in this one.
    #[serde(default)]
    pub nested: Vec<String>,
}

impl TypeDescriptor {
    /// A project class in `namespace`.
    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new(namespace, name, TypeKind::Class)
    }

    /// A project enum in `namespace`.
    pub fn enumeration(namespace: &str, name: &str) -> Self {
        Self::new(namespace, name, TypeKind::Enum)
    }

    fn new(namespace: &str, name: &str, kind: TypeKind) -> Self {
        let full_name = if namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", namespace, name)
        };
        Self {
            full_name,
            name: name.to_string(),
            namespace: namespace.to_string(),
            kind,
            base: None,
            origin: Origin::Project,
            unit: None,
            attributes: Vec::new(),
            doc: None,
            members: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn in_unit(mut self, unit: impl Into<UnitId>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn external(mut self) -> Self {
        self.origin = Origin::External;
        self
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    pub fn attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn is_project(&self) -> bool {
        self.origin == Origin::Project
    }
}
