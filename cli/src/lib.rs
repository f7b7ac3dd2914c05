//! tsbuild CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use tsbuild_core::config::BuildConfig;
use tsbuild_core::output::{write_json_pretty, write_summary};
use tsbuild_core::pipeline::{build, plan};

/// CLI entrypoint for tsbuild.
#[derive(Debug, Parser)]
#[command(
    name = "tsbuild",
    about = "TypeScript build driver: compile sources and bundle static assets"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile sources and merge static assets into the output directory
    Build(BuildArgs),
    /// Print the compiler command line without executing anything
    Plan(BuildArgs),
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// Project root; relative directories resolve against it
    #[arg(value_hint = ValueHint::DirPath)]
    root: Option<PathBuf>,

    /// Load configuration from a JSON file
    #[arg(short = 'c', long = "config", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Directory scanned for .ts sources
    #[arg(long = "src-dir", value_hint = ValueHint::DirPath)]
    source_dir: Option<PathBuf>,

    /// Directory the compiler and asset copy write into
    #[arg(long = "out-dir", value_hint = ValueHint::DirPath)]
    out_dir: Option<PathBuf>,

    /// Directory of static assets merged into the output
    #[arg(long = "static-dir", value_hint = ValueHint::DirPath)]
    static_dir: Option<PathBuf>,

    /// Compiler executable to invoke
    #[arg(long = "compiler")]
    compiler: Option<String>,

    /// Abort before the asset copy when the compiler fails
    #[arg(long = "fail-fast", action = ArgAction::SetTrue)]
    fail_fast: bool,

    /// Emit the build report as pretty JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => run_build(args),
        Command::Plan(args) => run_plan(args),
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let report = build(&config, &mut handle)?;

    // Pass the captured compiler diagnostics through to our stderr.
    if !report.compiler.stderr.is_empty() {
        eprint!("{}", report.compiler.stderr);
    }

    if args.json {
        write_json_pretty(&report, &mut handle)?;
    } else {
        write_summary(&report, &mut handle)?;
    }

    Ok(())
}

fn run_plan(args: BuildArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let invocation = plan(&config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", invocation.render())?;

    Ok(())
}

/// Defaults, then the config file, then individual flags, then the
/// project root for path resolution.
fn resolve_config(args: &BuildArgs) -> Result<BuildConfig> {
    let mut config = match &args.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };

    if let Some(dir) = &args.source_dir {
        config.source_dir = dir.clone();
    }
    if let Some(dir) = &args.out_dir {
        config.out_dir = dir.clone();
    }
    if let Some(dir) = &args.static_dir {
        config.static_dir = dir.clone();
    }
    if let Some(compiler) = &args.compiler {
        config.compiler = compiler.clone();
    }
    if args.fail_fast {
        config.fail_fast = true;
    }

    if let Some(root) = &args.root {
        config = config.rooted(root);
    }

    Ok(config)
}
