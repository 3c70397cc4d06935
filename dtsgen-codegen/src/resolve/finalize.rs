//! Post-pass over a finished resolution: drops dangling links and computes
//! cross-unit references.

use std::collections::HashSet;

use dtsgen_ir::{TypeTarget, UnitId};
use indexmap::IndexMap;

use super::{Claim, Resolution};
use crate::pipeline::{Diagnostic, phase};

pub(super) fn finalize(resolution: &mut Resolution, visited: &IndexMap<String, Claim>) {
    let skipped: HashSet<&UnitId> = resolution.skipped.iter().collect();
    // Types claimed by unchanged units live in their previous output.
    let emitted: HashSet<String> = resolution
        .units
        .iter()
        .flat_map(|unit| unit.types.iter().map(|t| t.full_name.clone()))
        .chain(
            visited
                .iter()
                .filter(|(_, claim)| skipped.contains(&claim.owner))
                .map(|(name, _)| name.clone()),
        )
        .collect();

    let mut diagnostics = Vec::new();
    for unit in &mut resolution.units {
        let mut referenced = Vec::new();
        for node in &mut unit.types {
            if let Some(base) = &node.base {
                if emitted.contains(&base.full_name) {
                    referenced.push(base.full_name.clone());
                } else {
                    diagnostics.push(
                        Diagnostic::warning(
                            phase::RESOLVE,
                            format!("base type '{}' is not emitted; extends omitted", base.full_name),
                        )
                        .at(node.full_name.as_str()),
                    );
                    node.base = None;
                }
            }
            for property in &mut node.properties {
                if let Some(ty) = &mut property.ty {
                    let location = format!("{}.{}", node.full_name, property.name);
                    check_target(
                        &mut ty.target,
                        &emitted,
                        &mut referenced,
                        &mut diagnostics,
                        &location,
                    );
                }
            }
        }
        for full_name in referenced {
            if let Some(claim) = visited.get(&full_name) {
                unit.add_reference(&claim.owner);
            }
        }
    }
    resolution.diagnostics.extend(diagnostics);
}

fn check_target(
    target: &mut TypeTarget,
    emitted: &HashSet<String>,
    referenced: &mut Vec<String>,
    diagnostics: &mut Vec<Diagnostic>,
    location: &str,
) {
    if let TypeTarget::Reference(name) = target {
        if emitted.contains(&name.full_name) {
            referenced.push(name.full_name.clone());
            return;
        }
        let message = format!("type '{}' is not emitted; treated as any", name.full_name);
        tracing::warn!(location, "{}", message);
        diagnostics.push(Diagnostic::warning(phase::RESOLVE, message).at(location));
        *target = TypeTarget::Unresolved;
        return;
    }
    match target {
        TypeTarget::Map { value, .. } => {
            check_target(&mut value.target, emitted, referenced, diagnostics, location)
        }
        TypeTarget::Shape(properties) => {
            for property in properties {
                if let Some(ty) = &mut property.ty {
                    check_target(&mut ty.target, emitted, referenced, diagnostics, location);
                }
            }
        }
        _ => {}
    }
}
