//! Build configuration for tsbuild.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the driver reads from and writes to, and how it reacts to a
/// failing compiler. Every field has an independent default, so a JSON
/// config file may set only the fields it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory scanned (non-recursively) for `.ts` sources.
    pub source_dir: PathBuf,
    /// Directory the compiler and the asset copy write into.
    pub out_dir: PathBuf,
    /// Directory whose contents are merged verbatim into `out_dir`.
    pub static_dir: PathBuf,
    /// Compiler executable, resolved through `PATH`.
    pub compiler: String,
    /// Abort before the asset copy when the compiler exits nonzero.
    /// Off by default: the compiler's status is reported but the build
    /// proceeds, matching classic fire-and-forget build scripts.
    pub fail_fast: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            out_dir: PathBuf::from("dist"),
            static_dir: PathBuf::from("src/static"),
            compiler: "tsc".to_string(),
            fail_fast: false,
        }
    }
}

impl BuildConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Resolve relative directories against `root`; absolute paths are
    /// kept as-is.
    pub fn rooted(&self, root: &Path) -> Self {
        let join = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                root.join(p)
            }
        };

        Self {
            source_dir: join(&self.source_dir),
            out_dir: join(&self.out_dir),
            static_dir: join(&self.static_dir),
            compiler: self.compiler.clone(),
            fail_fast: self.fail_fast,
        }
    }
}
