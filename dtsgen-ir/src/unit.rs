use std::{fmt, path::Path};

use dtsgen_core::Fingerprint;
use serde::{Deserialize, Serialize};

use crate::TypeNode;

/// Identity of a source unit: its path relative to the project root,
/// with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(path.as_ref().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// File name including extension (`Models/Order.cs` -> `Order.cs`).
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// File name without its last extension (`Models/Order.cs` -> `Order`).
    pub fn stem(&self) -> &str {
        let file = self.file_name();
        match file.rfind('.') {
            Some(0) | None => file,
            Some(dot) => &file[..dot],
        }
    }

    /// Directory part, empty for units at the root.
    pub fn dir(&self) -> &str {
        match self.0.rfind('/') {
            Some(slash) => &self.0[..slash],
            None => "",
        }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for UnitId {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

/// A resolved source unit, ready to be written as one declaration file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub identity: UnitId,
    /// Fingerprint of the unit's source text at generation time.
    pub fingerprint: Fingerprint,
    /// Types emitted into this unit, in emission order
    /// (dependencies before dependents).
    pub types: Vec<TypeNode>,
    /// Other units whose types this unit references, in first-use order.
    pub references: Vec<UnitId>,
}

impl SourceUnit {
    pub fn new(identity: UnitId, fingerprint: Fingerprint) -> Self {
        Self {
            identity,
            fingerprint,
            types: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Record a reference to another unit. Self-references and repeats are ignored.
    pub fn add_reference(&mut self, unit: &UnitId) {
        if *unit != self.identity && !self.references.contains(unit) {
            self.references.push(unit.clone());
        }
    }

    pub fn find_type(&self, full_name: &str) -> Option<&TypeNode> {
        self.types.iter().find(|t| t.full_name == full_name)
    }
}
