//! The build pipeline: discover, compile, copy.

use std::io::Write;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::assets::copy_tree;
use crate::config::BuildConfig;
use crate::discovery::{DirDiscovery, SourceDiscovery};
use crate::invocation::CompilerInvocation;
use crate::runner::{run_compiler, CompileOutcome};

/// What one build run did, suitable for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    /// The rendered command line, as printed before the compiler ran.
    pub command_line: String,
    /// Number of discovered source files.
    pub sources: usize,
    pub compiler: CompileOutcome,
    /// Number of static asset files copied into the output directory.
    pub assets_copied: usize,
}

/// Run the full pipeline, strictly in sequence: discover sources,
/// print and execute the compiler invocation, then merge the static
/// assets into the output directory.
///
/// An empty source set still runs the compiler and the copy. A
/// compiler that exits nonzero aborts the run before the asset copy
/// only when `fail_fast` is set; otherwise its exit code and stderr
/// are carried in the report and the build continues. A missing static
/// directory always aborts.
pub fn build(config: &BuildConfig, mut log: impl Write) -> Result<BuildReport> {
    let sources = DirDiscovery::new(&config.source_dir).discover()?;
    let invocation = CompilerInvocation::new(config, &sources);

    writeln!(log, "Building TypeScript: {}", invocation.render())?;

    let outcome = run_compiler(&invocation)?;
    if config.fail_fast && !outcome.success() {
        match outcome.exit_code {
            Some(code) => bail!(
                "compiler exited with status {code}:\n{}",
                outcome.stderr.trim_end()
            ),
            None => bail!("compiler terminated by signal"),
        }
    }

    let assets_copied = copy_tree(&config.static_dir, &config.out_dir)?;

    Ok(BuildReport {
        command_line: invocation.render(),
        sources: sources.len(),
        compiler: outcome,
        assets_copied,
    })
}

/// Discover sources and construct the invocation without executing
/// anything. Dry-run counterpart of [`build`].
pub fn plan(config: &BuildConfig) -> Result<CompilerInvocation> {
    let sources = DirDiscovery::new(&config.source_dir).discover()?;
    Ok(CompilerInvocation::new(config, &sources))
}
