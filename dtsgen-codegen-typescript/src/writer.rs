//! Rendering of a resolved source unit into declaration text.

use dtsgen_codegen::{OutputLayout, TypeMapper};
use dtsgen_config::NamingConfig;
use dtsgen_ir::{PropertyNode, QualifiedName, SourceUnit, TypeNode, TypeTarget};
use indexmap::IndexMap;

use crate::{
    CodeFile, TypeScriptTypeMapper,
    ast::{EnumDecl, EnumMember, Field, Import, ModuleBlock, ObjectDecl, TypeExpr, doc_text},
    naming::{DeclarationStyle, NamingPolicy},
};

/// Writes one declaration file per [`SourceUnit`].
///
/// Naming policy is applied here and only here. Types are grouped by
/// namespace in the order namespaces are first encountered; within a group
/// they keep the unit's dependency-complete order.
#[derive(Debug, Clone)]
pub struct DeclarationWriter<'a> {
    policy: NamingPolicy,
    style: DeclarationStyle,
    layout: &'a OutputLayout,
    mapper: TypeScriptTypeMapper,
    incremental: bool,
}

impl<'a> DeclarationWriter<'a> {
    pub fn new(config: &NamingConfig, layout: &'a OutputLayout) -> Self {
        Self {
            policy: NamingPolicy::from_config(config),
            style: DeclarationStyle::from_config(config),
            layout,
            mapper: TypeScriptTypeMapper,
            incremental: config.incremental,
        }
    }

    /// Complete file text, fingerprint marker first when incremental.
    pub fn write(&self, unit: &SourceUnit) -> String {
        self.code_file(unit).render()
    }

    fn code_file(&self, unit: &SourceUnit) -> CodeFile {
        let marker = self
            .incremental
            .then(|| unit.fingerprint.marker_line());
        let imports = unit.references.iter().map(|target| {
            Import::new(self.layout.import_specifier(&unit.identity, target))
                .named(self.policy.type_name(target.stem()))
        });

        let mut groups: IndexMap<&str, Vec<&TypeNode>> = IndexMap::new();
        for node in &unit.types {
            groups.entry(node.namespace.as_str()).or_default().push(node);
        }

        let mut file = CodeFile::new().marker(marker).imports(imports);
        for (namespace, nodes) in groups {
            let block = if self.style.global_scope {
                ModuleBlock::global()
            } else {
                ModuleBlock::new(namespace)
            };
            file = file.add(
                nodes
                    .into_iter()
                    .fold(block, |block, node| self.add_node(block, node)),
            );
        }
        file
    }

    fn add_node(&self, block: ModuleBlock, node: &TypeNode) -> ModuleBlock {
        let name = self.policy.type_name(&node.name);
        let doc = node.summary.as_deref().and_then(doc_text);

        if node.is_enum {
            let decl = node.properties.iter().fold(
                EnumDecl::new(name, self.style.enum_style).doc(doc),
                |decl, member| {
                    decl.member(
                        EnumMember::new(
                            self.policy.enum_member(&member.name),
                            member.init_expression.as_deref(),
                        )
                        .doc(member.summary.as_deref().and_then(doc_text)),
                    )
                },
            );
            return block.add(decl);
        }

        let base = node
            .base
            .as_ref()
            .map(|base| self.qualified(base, &node.namespace));
        let decl = node.properties.iter().fold(
            ObjectDecl::new(self.style.object_keyword, name)
                .extends(base)
                .doc(doc),
            |decl, property| decl.field(self.field(property, &node.namespace)),
        );
        block.add(decl)
    }

    /// An explicit serialized name is emitted verbatim; otherwise the
    /// property-name policy applies to the declared name.
    fn field(&self, property: &PropertyNode, namespace: &str) -> Field {
        let name = match &property.emitted_name {
            Some(emitted) => emitted.clone(),
            None => self.policy.property_name(&property.name),
        };
        let (ty, array) = match &property.ty {
            Some(ty) => (self.type_expr(&ty.target, namespace), ty.is_array),
            None => (TypeExpr::named(self.mapper.any_type()), false),
        };
        Field::new(name, ty)
            .array(array)
            .doc(property.summary.as_deref().and_then(doc_text))
    }

    fn type_expr(&self, target: &TypeTarget, namespace: &str) -> TypeExpr {
        match target {
            TypeTarget::Primitive(primitive) => {
                TypeExpr::named(self.mapper.map_primitive(*primitive))
            }
            TypeTarget::Reference(name) => TypeExpr::named(self.qualified(name, namespace)),
            TypeTarget::Shape(properties) => TypeExpr::shape(
                properties
                    .iter()
                    .map(|property| self.field(property, namespace))
                    .collect(),
            ),
            TypeTarget::Map { key, value } => TypeExpr::index(
                self.mapper.map_key(*key),
                self.type_expr(&value.target, namespace).array(value.is_array),
            ),
            TypeTarget::Unresolved => TypeExpr::named(self.mapper.any_type()),
        }
    }

    /// Namespace prefix only when it differs from the current module.
    fn qualified(&self, name: &QualifiedName, namespace: &str) -> String {
        let local = self.policy.type_name(&name.name);
        if self.style.global_scope || name.namespace.is_empty() || name.namespace == namespace {
            local
        } else {
            format!("{}.{}", name.namespace, local)
        }
    }
}
