use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Destination for generated declaration files.
///
/// The core hands each unit's complete text to the sink in a single call;
/// directory creation, source-control checkout and project registration are
/// the host's business.
pub trait Sink {
    /// Write a generated unit. `path` is relative to the sink's root.
    fn write_unit(&mut self, path: &Path, text: &str) -> io::Result<()>;

    /// First line of the previously written output at `path`, if any.
    ///
    /// Sinks that do not keep earlier output return `None`, which disables
    /// incremental skipping for them.
    fn read_first_line(&self, _path: &Path) -> Option<String> {
        None
    }
}

/// Write `content` to `path` in one buffer, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// A sink that writes under a root directory on disk.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create a sink rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a unit path against the root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Remove a previously generated file. Returns `false` if it did not exist.
    pub fn remove(&self, path: &Path) -> io::Result<bool> {
        let full = self.resolve(path);
        match fs::remove_file(&full) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Sink for FsSink {
    fn write_unit(&mut self, path: &Path, text: &str) -> io::Result<()> {
        write_file(&self.resolve(path), text)
    }

    fn read_first_line(&self, path: &Path) -> Option<String> {
        let file = fs::File::open(self.resolve(path)).ok()?;
        let mut line = String::new();
        BufReader::new(file).read_line(&mut line).ok()?;
        Some(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.d.ts");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.d.ts");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_sink_writes_relative_to_root() {
        let temp = TempDir::new().unwrap();
        let mut sink = FsSink::new(temp.path());

        sink.write_unit(Path::new("Models/Order.cs.d.ts"), "//#hash:x\nbody\n")
            .unwrap();

        let written = fs::read_to_string(temp.path().join("Models/Order.cs.d.ts")).unwrap();
        assert_eq!(written, "//#hash:x\nbody\n");
    }

    #[test]
    fn test_read_first_line() {
        let temp = TempDir::new().unwrap();
        let sink = FsSink::new(temp.path());
        fs::write(temp.path().join("a.d.ts"), "//#hash:abc\r\nrest\n").unwrap();

        assert_eq!(
            sink.read_first_line(Path::new("a.d.ts")).as_deref(),
            Some("//#hash:abc")
        );
        assert_eq!(sink.read_first_line(Path::new("missing.d.ts")), None);
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let sink = FsSink::new(temp.path());
        fs::write(temp.path().join("a.d.ts"), "x").unwrap();

        assert!(sink.remove(Path::new("a.d.ts")).unwrap());
        assert!(!sink.remove(Path::new("a.d.ts")).unwrap());
        assert!(!temp.path().join("a.d.ts").exists());
    }
}
