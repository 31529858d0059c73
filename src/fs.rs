// Author: Dustin Pilgrim
// License: MIT

use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

/// Source of config files for the parser and its include directives.
///
/// `glob` returns matches in a stable order and an empty list, not an error,
/// when nothing matches.
pub trait FileSystem {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read>>;
    fn glob(&self, pattern: &str) -> io::Result<Vec<String>>;
}

/// The local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl FileSystem for NativeFs {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(std::fs::File::open(path)?))
    }

    fn glob(&self, pattern: &str) -> io::Result<Vec<String>> {
        let paths = glob::glob(pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let mut matches = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| io::Error::new(e.error().kind(), e.to_string()))?;
            matches.push(path.to_string_lossy().into_owned());
        }
        Ok(matches)
    }
}

/// An in-memory file system, e.g. for configs embedded in a binary or for tests.
/// Paths are plain `/`-separated strings.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        MemoryFs::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl FileSystem for MemoryFs {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read>> {
        match self.files.get(path) {
            Some(contents) => Ok(Box::new(Cursor::new(contents.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path),
            )),
        }
    }

    fn glob(&self, pattern: &str) -> io::Result<Vec<String>> {
        let pattern = Pattern::new(pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };

        Ok(self
            .files
            .keys()
            .filter(|name| pattern.matches_with(name, options))
            .cloned()
            .collect())
    }
}

/// Lexically clean a path: drop `.` components and fold `name/..` pairs.
/// The file system is never consulted.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(fs: &dyn FileSystem, path: &str) -> String {
        let mut out = String::new();
        fs.open(path).unwrap().read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_memory_fs_open() {
        let fs = MemoryFs::new().with_file("/etc/app.cfg", "a = 1");
        assert_eq!(read_all(&fs, "/etc/app.cfg"), "a = 1");

        let err = fs.open("/etc/missing.cfg").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_fs_glob_is_sorted_and_shallow() {
        let fs = MemoryFs::new()
            .with_file("/conf.d/b.cfg", "")
            .with_file("/conf.d/a.cfg", "")
            .with_file("/conf.d/nested/c.cfg", "")
            .with_file("/conf.d/readme.txt", "");

        assert_eq!(
            fs.glob("/conf.d/*.cfg").unwrap(),
            vec!["/conf.d/a.cfg", "/conf.d/b.cfg"]
        );
        assert!(fs.glob("/nothing/*.cfg").unwrap().is_empty());
    }

    #[test]
    fn test_memory_fs_bad_pattern() {
        let err = MemoryFs::new().glob("/conf.d/[*.cfg").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_native_fs_glob() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.cfg"), "x = 1").unwrap();
        std::fs::write(dir.path().join("two.cfg"), "y = 2").unwrap();
        std::fs::write(dir.path().join("skip.txt"), "").unwrap();

        let pattern = dir.path().join("*.cfg");
        let matches = NativeFs.glob(&pattern.to_string_lossy()).unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches[0].ends_with("one.cfg"));
        assert!(matches[1].ends_with("two.cfg"));

        assert_eq!(read_all(&NativeFs, &matches[0]), "x = 1");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c.cfg")), PathBuf::from("/a/c.cfg"));
        assert_eq!(normalize(Path::new("./conf/x.cfg")), PathBuf::from("conf/x.cfg"));
        assert_eq!(normalize(Path::new("../up.cfg")), PathBuf::from("../up.cfg"));
    }
}
