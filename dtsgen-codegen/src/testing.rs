//! Test utilities for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::Cell,
    collections::{BTreeMap, HashSet},
    io,
    path::{Path, PathBuf},
};

use dtsgen_core::Sink;
use dtsgen_ir::{TypeDescriptor, UnitId};

use crate::source::{SourceResult, TypeSource};

/// A sink that keeps written files in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
    writes: usize,
    failing: HashSet<PathBuf>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes to `path` fail with a permission error.
    pub fn fail_on(&mut self, path: impl Into<PathBuf>) {
        self.failing.insert(path.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &String)> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of successful writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Sink for MemorySink {
    fn write_unit(&mut self, path: &Path, text: &str) -> io::Result<()> {
        if self.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }
        self.files.insert(path.to_path_buf(), text.to_string());
        self.writes += 1;
        Ok(())
    }

    fn read_first_line(&self, path: &Path) -> Option<String> {
        self.get(path)
            .and_then(|text| text.lines().next())
            .map(str::to_string)
    }
}

/// A Type Source wrapper that counts calls, for idempotence tests.
#[derive(Debug)]
pub struct CountingSource<S> {
    inner: S,
    describes: Cell<usize>,
    content_reads: Cell<usize>,
}

impl<S: TypeSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            describes: Cell::new(0),
            content_reads: Cell::new(0),
        }
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Number of `describe` calls, i.e. extraction work performed.
    pub fn describes(&self) -> usize {
        self.describes.get()
    }

    pub fn content_reads(&self) -> usize {
        self.content_reads.get()
    }

    pub fn reset(&self) {
        self.describes.set(0);
        self.content_reads.set(0);
    }
}

impl<S: TypeSource> TypeSource for CountingSource<S> {
    fn describe(&self, qualified_name: &str) -> SourceResult<Option<TypeDescriptor>> {
        self.describes.set(self.describes.get() + 1);
        self.inner.describe(qualified_name)
    }

    fn unit_types(&self, unit: &UnitId) -> SourceResult<Vec<String>> {
        self.inner.unit_types(unit)
    }

    fn unit_content(&self, unit: &UnitId) -> SourceResult<String> {
        self.content_reads.set(self.content_reads.get() + 1);
        self.inner.unit_content(unit)
    }

    fn units(&self) -> Vec<UnitId> {
        self.inner.units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ProjectModel;

    #[test]
    fn test_memory_sink_roundtrip() {
        let mut sink = MemorySink::new();
        sink.write_unit(Path::new("a.d.ts"), "//#hash:x\nbody\n").unwrap();
        assert_eq!(sink.read_first_line(Path::new("a.d.ts")).as_deref(), Some("//#hash:x"));
        assert_eq!(sink.writes(), 1);

        sink.fail_on("b.d.ts");
        assert!(sink.write_unit(Path::new("b.d.ts"), "x").is_err());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_counting_source() {
        let source = CountingSource::new(
            ProjectModel::new("/").with_type(TypeDescriptor::class("App", "A").in_unit("A.cs")),
        );
        source.describe("App.A").unwrap();
        source.describe("App.B").unwrap();
        assert_eq!(source.describes(), 2);
        source.reset();
        assert_eq!(source.describes(), 0);
    }
}
