//! Static asset copying.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

/// Recursively copy everything under `static_dir` into `out_dir`,
/// overwriting files that already exist at the destination and
/// creating directories as needed. Output files with no counterpart in
/// the static tree are left untouched (merge, not sync). Returns the
/// number of files copied.
///
/// A missing static directory is an error: unlike an empty source set,
/// a build that cannot ship its assets has nothing useful to deliver.
pub fn copy_tree(static_dir: &Path, out_dir: &Path) -> Result<usize> {
    if !static_dir.is_dir() {
        return Err(anyhow!(
            "static assets directory does not exist: {}",
            static_dir.display()
        ));
    }

    // Walk once, creating the directory skeleton up front; file copies
    // are independent and run in parallel afterwards.
    let mut files = Vec::new();
    for entry in WalkDir::new(static_dir) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(static_dir)?;
        let dest = out_dir.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .with_context(|| format!("creating directory {}", dest.display()))?;
        } else if entry.file_type().is_file() {
            files.push((entry.path().to_path_buf(), dest));
        }
    }

    files.par_iter().try_for_each(|(src, dest)| {
        fs::copy(src, dest)
            .map(|_| ())
            .with_context(|| format!("copying {} to {}", src.display(), dest.display()))
    })?;

    Ok(files.len())
}
