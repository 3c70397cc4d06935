//! The extracted object model.

/// A qualified type name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
    pub full_name: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        let full_name = if namespace.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", namespace, name)
        };
        Self {
            namespace,
            name,
            full_name,
        }
    }
}

/// A type whose target-language rendering is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Number,
    String,
    Boolean,
    Date,
    /// `object` and `dynamic`.
    Any,
}

impl Primitive {
    /// Classify a bare type name. Accepts keyword and framework spellings
    /// with or without the `System.` prefix.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix("System.").unwrap_or(name);
        let primitive = match name.to_ascii_lowercase().as_str() {
            "byte" | "sbyte" | "short" | "ushort" | "int" | "uint" | "long" | "ulong"
            | "float" | "double" | "decimal" | "int16" | "uint16" | "int32" | "uint32"
            | "int64" | "uint64" | "single" | "numerics.biginteger" => Self::Number,
            "string" | "char" | "guid" | "timespan" => Self::String,
            "bool" | "boolean" => Self::Boolean,
            "datetime" | "datetimeoffset" | "dateonly" => Self::Date,
            "object" | "dynamic" => Self::Any,
            _ => return None,
        };
        Some(primitive)
    }
}

/// Key type of a dictionary. Index signatures only accept these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKey {
    String,
    Number,
}

/// What a [`TypeRef`] points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTarget {
    Primitive(Primitive),
    /// A generated project type.
    Reference(QualifiedName),
    /// An inline object shape built from an external type's members.
    Shape(Vec<PropertyNode>),
    /// A dictionary with a constrained key. The value may itself be an
    /// array or another dictionary.
    Map { key: MapKey, value: Box<TypeRef> },
    /// Could not be resolved; rendered as the "any" type.
    Unresolved,
}

/// Reference to a type from a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Source-language spelling.
    pub raw_name: String,
    pub is_array: bool,
    pub is_dictionary: bool,
    pub target: TypeTarget,
}

impl TypeRef {
    pub fn new(raw_name: impl Into<String>, target: TypeTarget) -> Self {
        Self {
            raw_name: raw_name.into(),
            is_array: false,
            is_dictionary: false,
            target,
        }
    }

    pub fn unresolved(raw_name: impl Into<String>) -> Self {
        Self::new(raw_name, TypeTarget::Unresolved)
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn is_known_primitive(&self) -> bool {
        matches!(self.target, TypeTarget::Primitive(_))
    }

    pub fn primitive(&self) -> Option<Primitive> {
        match self.target {
            TypeTarget::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn reference_name(&self) -> Option<&QualifiedName> {
        match &self.target {
            TypeTarget::Reference(name) => Some(name),
            _ => None,
        }
    }

    pub fn shape(&self) -> Option<&[PropertyNode]> {
        match &self.target {
            TypeTarget::Shape(props) => Some(props),
            _ => None,
        }
    }
}

/// A property of a class, or a member of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    /// Declared name.
    pub name: String,
    /// Name taken from a serialization attribute, if any. Emitted verbatim.
    pub emitted_name: Option<String>,
    /// Property type; `None` for enum members.
    pub ty: Option<TypeRef>,
    pub summary: Option<String>,
    /// Cleaned enum initializer.
    pub init_expression: Option<String>,
}

impl PropertyNode {
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            emitted_name: None,
            ty: Some(ty),
            summary: None,
            init_expression: None,
        }
    }

    pub fn enum_member(name: impl Into<String>, init: Option<String>) -> Self {
        Self {
            name: name.into(),
            emitted_name: None,
            ty: None,
            summary: None,
            init_expression: init,
        }
    }
}

/// A class or enum to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
    /// Qualified source name.
    pub full_name: String,
    pub name: String,
    /// Target module namespace, after attribute overrides.
    pub namespace: String,
    pub is_enum: bool,
    pub summary: Option<String>,
    /// Resolved base type; absent when the base is a root object or unresolvable.
    pub base: Option<QualifiedName>,
    pub properties: Vec<PropertyNode>,
}

impl TypeNode {
    pub fn new(
        full_name: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            name: name.into(),
            namespace: namespace.into(),
            is_enum: false,
            summary: None,
            base: None,
            properties: Vec::new(),
        }
    }

    pub fn base_namespace(&self) -> Option<&str> {
        self.base.as_ref().map(|b| b.namespace.as_str())
    }

    pub fn base_name(&self) -> Option<&str> {
        self.base.as_ref().map(|b| b.name.as_str())
    }
}
