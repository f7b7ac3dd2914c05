//! Source file discovery for tsbuild.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Path to a discovered TypeScript source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
}

/// Trait for enumerating sources from some backing store.
pub trait SourceDiscovery {
    fn discover(&self) -> Result<Vec<SourceFile>>;
}

/// Lists `.ts` files directly inside one directory. Subdirectories are
/// not descended into, and a missing or unreadable directory yields an
/// empty set rather than an error — the compiler simply gets no inputs.
/// Ordering follows the filesystem listing and carries no guarantee.
#[derive(Debug, Clone)]
pub struct DirDiscovery {
    dir: PathBuf,
}

impl DirDiscovery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SourceDiscovery for DirDiscovery {
    fn discover(&self) -> Result<Vec<SourceFile>> {
        let mut found = Vec::new();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Ok(found),
        };

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_file() && is_typescript(&path) {
                found.push(SourceFile { path });
            }
        }

        Ok(found)
    }
}

fn is_typescript(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };

    ext == "ts"
}

#[cfg(test)]
mod tests {
    use super::is_typescript;
    use super::DirDiscovery;
    use super::SourceDiscovery;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn recognises_typescript_extension() {
        assert!(is_typescript("/a/b/app.ts".as_ref()));
        assert!(is_typescript("/a/b/app.TS".as_ref()));
        assert!(is_typescript("/a/b/types.d.ts".as_ref()));
        assert!(!is_typescript("/a/b/app.tsx".as_ref()));
        assert!(!is_typescript("/a/b/app.js".as_ref()));
        assert!(!is_typescript("/a/b/app".as_ref()));
    }

    #[test]
    fn discovers_only_top_level_sources() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("app.ts"), b"").expect("touch app.ts");
        fs::write(tmp.path().join("notes.txt"), b"").expect("touch notes.txt");

        let nested = tmp.path().join("vendor");
        fs::create_dir_all(&nested).expect("mkdir");
        fs::write(nested.join("dep.ts"), b"").expect("touch dep.ts");

        let sources = DirDiscovery::new(tmp.path()).discover().expect("discover");

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].path, tmp.path().join("app.ts"));
    }

    #[test]
    fn missing_directory_yields_empty_set() {
        let tmp = tempdir().expect("tempdir");
        let gone = tmp.path().join("no-such-dir");

        let sources = DirDiscovery::new(&gone).discover().expect("discover");
        assert!(sources.is_empty());
    }

    #[test]
    fn empty_directory_yields_empty_set() {
        let tmp = tempdir().expect("tempdir");
        let sources = DirDiscovery::new(tmp.path()).discover().expect("discover");
        assert!(sources.is_empty());
    }
}
