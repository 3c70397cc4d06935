//! Dependency resolution across the reachable type graph.
//!
//! Resolution is a depth-first walk from the types declared in each
//! requested unit. Every reached project type is extracted exactly once and
//! assigned to an owning unit; dependencies are finished before the types
//! that reference them, so each unit lists its nodes in a dependency-complete
//! order.

mod finalize;
mod signature;

use dtsgen_config::{NamingConfig, Ownership};
use dtsgen_core::Fingerprint;
use dtsgen_ir::{
    MapKey, Primitive, PropertyNode, QualifiedName, SourceUnit, TypeDescriptor, TypeNode, TypeRef,
    TypeSignature, TypeTarget, UnitId,
};
use indexmap::IndexMap;

pub use signature::{SignatureKind, classify, generic_arguments};

use crate::{
    Extractor, IncrementalGate,
    pipeline::{Diagnostic, phase},
    source::TypeSource,
};

/// Root object types that never produce an `extends` clause.
const ROOT_OBJECTS: &[&str] = &["object", "Object", "System.Object"];

/// Result of resolving a request.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Units that were regenerated, in the order they were opened.
    pub units: Vec<SourceUnit>,
    /// Units skipped by the incremental gate.
    pub skipped: Vec<UnitId>,
    /// Units whose content could not be read.
    pub failed: Vec<(UnitId, String)>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Where a visited type is emitted, and how references name it.
#[derive(Debug, Clone)]
pub(crate) struct Claim {
    pub owner: UnitId,
    pub name: QualifiedName,
}

#[derive(Debug)]
enum UnitSlot {
    Active(SourceUnit),
    Skipped,
    Failed(String),
}

/// Drives extraction for one run. Consumed by [`Resolver::resolve`], so the
/// visited set never outlives the run.
pub struct Resolver<'a> {
    source: &'a dyn TypeSource,
    config: &'a NamingConfig,
    extractor: Extractor<'a>,
    gate: Option<&'a IncrementalGate<'a>>,
    visited: IndexMap<String, Claim>,
    slots: IndexMap<UnitId, UnitSlot>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Resolver<'a> {
    pub fn new(source: &'a dyn TypeSource, config: &'a NamingConfig) -> Self {
        Self {
            source,
            config,
            extractor: Extractor::new(config),
            gate: None,
            visited: IndexMap::new(),
            slots: IndexMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Consult `gate` before opening each unit.
    pub fn with_gate(mut self, gate: &'a IncrementalGate<'a>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn resolve(mut self, roots: &[UnitId]) -> Resolution {
        for root in roots {
            self.process_unit(root);
        }
        self.finish()
    }

    fn finish(self) -> Resolution {
        let mut resolution = Resolution {
            diagnostics: self.diagnostics,
            ..Resolution::default()
        };
        for (id, slot) in self.slots {
            match slot {
                UnitSlot::Active(unit) => resolution.units.push(unit),
                UnitSlot::Skipped => resolution.skipped.push(id),
                UnitSlot::Failed(error) => resolution.failed.push((id, error)),
            }
        }
        finalize::finalize(&mut resolution, &self.visited);
        resolution
    }

    /// Open `unit` and resolve every type it declares.
    fn process_unit(&mut self, unit: &UnitId) {
        if !self.open_unit(unit) {
            return;
        }
        let names = match self.source.unit_types(unit) {
            Ok(names) => names,
            Err(error) => {
                self.report(Diagnostic::error(phase::SOURCE, error.to_string()).at(unit.as_str()));
                return;
            }
        };
        for name in names {
            self.resolve_type(&name, unit);
        }
    }

    /// Returns true when the unit was newly opened for regeneration.
    fn open_unit(&mut self, unit: &UnitId) -> bool {
        if self.slots.contains_key(unit) {
            return false;
        }
        let content = match self.source.unit_content(unit) {
            Ok(content) => content,
            Err(error) => {
                let message = error.to_string();
                self.report(Diagnostic::error(phase::SOURCE, message.clone()).at(unit.as_str()));
                self.slots.insert(unit.clone(), UnitSlot::Failed(message));
                return false;
            }
        };
        if self.gate.is_some_and(|gate| gate.should_skip(unit, &content)) {
            self.slots.insert(unit.clone(), UnitSlot::Skipped);
            return false;
        }
        tracing::debug!(unit = %unit, "opening unit");
        let source_unit = SourceUnit::new(unit.clone(), Fingerprint::of(&content));
        self.slots.insert(unit.clone(), UnitSlot::Active(source_unit));
        true
    }

    fn resolve_type(&mut self, full_name: &str, owner: &UnitId) -> Option<Claim> {
        if let Some(claim) = self.visited.get(full_name) {
            return Some(claim.clone());
        }
        let desc = self.describe(full_name, full_name)?;
        if !desc.is_project() {
            return None;
        }
        self.resolve_descriptor(&desc, owner)
    }

    /// Claim a project type and extract it unless an unchanged unit already
    /// holds it.
    fn resolve_descriptor(&mut self, desc: &TypeDescriptor, requested: &UnitId) -> Option<Claim> {
        if let Some(claim) = self.visited.get(&desc.full_name) {
            return Some(claim.clone());
        }
        let owner = self.owner_for(desc, requested);
        // Opening the declaring unit may have resolved this type already.
        if let Some(claim) = self.visited.get(&desc.full_name) {
            return Some(claim.clone());
        }

        let claim = Claim {
            owner: owner.clone(),
            name: self.extractor.qualified_name(desc),
        };
        // Mark before recursing so cycles terminate.
        self.visited.insert(desc.full_name.clone(), claim.clone());

        if !matches!(self.slots.get(&owner), Some(UnitSlot::Active(_))) {
            return Some(claim);
        }

        for nested in &desc.nested {
            self.resolve_type(nested, &owner);
        }

        let node = if desc.is_enum() {
            self.extractor.extract_enum(desc)
        } else {
            self.extract_class(desc, &owner)
        };
        match node {
            Some(node) => self.push_node(&owner, node),
            None => tracing::debug!(ty = %desc.full_name, "no emittable members"),
        }
        Some(claim)
    }

    /// Unit that emits `desc`.
    fn owner_for(&mut self, desc: &TypeDescriptor, requested: &UnitId) -> UnitId {
        let Some(declaring) = desc.unit.clone() else {
            return requested.clone();
        };
        if declaring == *requested {
            return declaring;
        }
        if self.config.ownership == Ownership::DeclaringUnit {
            self.process_unit(&declaring);
        }
        match self.slots.get(&declaring) {
            Some(UnitSlot::Skipped) => declaring,
            Some(UnitSlot::Active(_)) if self.config.ownership == Ownership::DeclaringUnit => {
                declaring
            }
            _ => requested.clone(),
        }
    }

    fn extract_class(&mut self, desc: &TypeDescriptor, owner: &UnitId) -> Option<TypeNode> {
        let extractor = self.extractor;
        let mut node = extractor.class_shell(desc);

        if let Some(base) = desc.base.as_deref().filter(|b| !ROOT_OBJECTS.contains(b)) {
            node.base = self.resolve_base(base, owner, &desc.full_name);
        }

        for member in desc.members.iter().filter(|m| extractor.include_member(m)) {
            let location = format!("{}.{}", desc.full_name, member.name);
            let mut property = extractor.property_shell(member, desc.origin);
            property.ty = Some(match &member.ty {
                Some(signature) => self.resolve_ref(signature, owner, &mut Vec::new(), &location),
                None => TypeRef::unresolved(""),
            });
            node.properties.push(property);
        }

        if node.properties.is_empty() && node.base.is_none() {
            return None;
        }
        Some(node)
    }

    /// Only project bases produce an `extends` link.
    fn resolve_base(
        &mut self,
        base: &str,
        owner: &UnitId,
        location: &str,
    ) -> Option<QualifiedName> {
        let desc = self.describe(base, location)?;
        if !desc.is_project() {
            tracing::debug!(base, "omitting external base type");
            return None;
        }
        self.resolve_descriptor(&desc, owner).map(|claim| claim.name)
    }

    fn resolve_ref(
        &mut self,
        signature: &TypeSignature,
        owner: &UnitId,
        guard: &mut Vec<String>,
        location: &str,
    ) -> TypeRef {
        let raw = signature.as_str();
        match classify(signature) {
            SignatureKind::Array(element) => TypeRef {
                target: self.resolve_target(element.as_str(), owner, guard, location),
                ..TypeRef::unresolved(raw).array()
            },
            SignatureKind::Collection => match self.source.resolve_generic_argument(raw) {
                Some(element) => TypeRef {
                    target: self.resolve_target(&element, owner, guard, location),
                    ..TypeRef::unresolved(raw).array()
                },
                None => {
                    self.degrade(
                        location,
                        format!(
                            "could not resolve the element type of '{}'; rendered as any[]",
                            raw
                        ),
                    );
                    TypeRef::unresolved(raw).array()
                }
            },
            SignatureKind::Dictionary { key, value } => {
                let key = match key.as_deref().and_then(Primitive::from_type_name) {
                    Some(Primitive::Number) => MapKey::Number,
                    _ => MapKey::String,
                };
                let value = match value {
                    Some(value) => {
                        self.resolve_ref(&TypeSignature::new(value), owner, guard, location)
                    }
                    None => TypeRef::unresolved(""),
                };
                TypeRef {
                    is_dictionary: true,
                    ..TypeRef::new(
                        raw,
                        TypeTarget::Map {
                            key,
                            value: Box::new(value),
                        },
                    )
                }
            }
            SignatureKind::Scalar(scalar) => {
                let target = self.resolve_target(scalar.as_str(), owner, guard, location);
                TypeRef::new(raw, target)
            }
        }
    }

    /// Resolve one element type name.
    fn resolve_target(
        &mut self,
        name: &str,
        owner: &UnitId,
        guard: &mut Vec<String>,
        location: &str,
    ) -> TypeTarget {
        let signature = TypeSignature::new(name).unwrap_nullable();
        if let Some(primitive) = Primitive::from_type_name(signature.as_str()) {
            return TypeTarget::Primitive(primitive);
        }
        let Some(desc) = self.describe(signature.as_str(), location) else {
            return TypeTarget::Unresolved;
        };
        if desc.is_project() {
            return match self.resolve_descriptor(&desc, owner) {
                Some(claim) => TypeTarget::Reference(claim.name),
                None => TypeTarget::Unresolved,
            };
        }
        self.external_shape(&desc, owner, guard, location)
    }

    /// Inline shape of an external class, guarded per path against cycles.
    fn external_shape(
        &mut self,
        desc: &TypeDescriptor,
        owner: &UnitId,
        guard: &mut Vec<String>,
        location: &str,
    ) -> TypeTarget {
        if desc.is_enum() || guard.contains(&desc.full_name) {
            return TypeTarget::Unresolved;
        }
        let extractor = self.extractor;
        guard.push(desc.full_name.clone());
        let mut shape: Vec<PropertyNode> = Vec::new();
        for member in desc.members.iter().filter(|m| extractor.include_member(m)) {
            let mut property = extractor.property_shell(member, desc.origin);
            property.ty = Some(match &member.ty {
                Some(signature) => self.resolve_ref(signature, owner, guard, location),
                None => TypeRef::unresolved(""),
            });
            shape.push(property);
        }
        guard.pop();

        if shape.is_empty() {
            TypeTarget::Unresolved
        } else {
            TypeTarget::Shape(shape)
        }
    }

    /// Describe a type, degrading failures to a diagnostic.
    fn describe(&mut self, name: &str, location: &str) -> Option<TypeDescriptor> {
        match self.source.describe(name) {
            Ok(Some(desc)) => Some(desc),
            Ok(None) => {
                self.degrade(location, format!("unresolvable type '{}' treated as any", name));
                None
            }
            Err(error) => {
                self.degrade(
                    location,
                    format!("failed to describe '{}': {}; treated as any", name, error),
                );
                None
            }
        }
    }

    fn push_node(&mut self, owner: &UnitId, node: TypeNode) {
        if let Some(UnitSlot::Active(unit)) = self.slots.get_mut(owner) {
            unit.types.push(node);
        }
    }

    fn degrade(&mut self, location: &str, message: String) {
        tracing::warn!(location, "{}", message);
        self.diagnostics
            .push(Diagnostic::warning(phase::RESOLVE, message).at(location));
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
