//! tsbuild-core: the build pipeline behind the `tsbuild` CLI.
//!
//! A build run is three strictly sequential steps:
//!
//! 1. **Discovery**: enumerate `.ts` files at a single directory level
//!    ([`discovery`]). An empty or missing source directory is a valid,
//!    empty input.
//! 2. **Compilation**: construct the compiler command as an explicit
//!    argument vector ([`invocation`]) and run it as a subprocess
//!    ([`runner`]). The exit status and stderr are captured as data
//!    rather than discarded; whether a failing compiler aborts the run
//!    is a configuration choice, not a hard-coded policy.
//! 3. **Asset copy**: recursively merge a static-assets tree into the
//!    output directory ([`assets`]), overwriting stale copies and
//!    leaving unrelated output files alone.
//!
//! [`pipeline::build`] ties the steps together and returns a
//! [`pipeline::BuildReport`]; [`config::BuildConfig`] replaces the
//! hard-coded paths a quick build script would use.
//!
//! ```rust,no_run
//! use tsbuild_core::config::BuildConfig;
//! use tsbuild_core::pipeline::build;
//!
//! let config = BuildConfig::default();
//! let report = build(&config, std::io::stdout())?;
//! println!("copied {} assets", report.assets_copied);
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod assets;
pub mod config;
pub mod discovery;
pub mod invocation;
pub mod output;
pub mod pipeline;
pub mod runner;
