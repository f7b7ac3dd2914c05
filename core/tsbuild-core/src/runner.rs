//! Compiler subprocess execution.

use std::process::Stdio;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::invocation::CompilerInvocation;

/// What the compiler subprocess did: its exit code (`None` when killed
/// by a signal) and everything it wrote to stderr. Captured as data so
/// the caller decides whether a failure aborts the build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileOutcome {
    pub exit_code: Option<i32>,
    pub stderr: String,
}

impl CompileOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run the compiler synchronously and wait for it to exit. The
/// compiler's stdout is inherited so its diagnostics stream through;
/// stderr is captured into the outcome. An `Err` means the process
/// could not be spawned at all — a compiler that ran and failed is an
/// `Ok` outcome with a nonzero exit code.
pub fn run_compiler(invocation: &CompilerInvocation) -> Result<CompileOutcome> {
    let output = invocation
        .to_command()
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("running compiler {}", invocation.program()))?;

    Ok(CompileOutcome {
        exit_code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
