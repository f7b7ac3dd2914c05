//! Compiler invocation construction.

use std::process::Command;

use crate::config::BuildConfig;
use crate::discovery::SourceFile;

/// A fully constructed compiler command: the program, the fixed flag
/// sequence, and the discovered sources as trailing positional
/// arguments. Execution always goes through the argument vector, never
/// a shell, so paths with spaces or metacharacters reach the compiler
/// intact. [`render`](Self::render) exists only for the printed
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    program: String,
    args: Vec<String>,
}

impl CompilerInvocation {
    /// Build the invocation. The flag order is stable across runs:
    /// `--allowJs -m ES6 -t ES6 --outDir <out> --sourceMap
    /// --alwaysStrict`, then one argument per source file.
    pub fn new(config: &BuildConfig, sources: &[SourceFile]) -> Self {
        let mut args = vec![
            "--allowJs".to_string(),
            "-m".to_string(),
            "ES6".to_string(),
            "-t".to_string(),
            "ES6".to_string(),
            "--outDir".to_string(),
            config.out_dir.display().to_string(),
            "--sourceMap".to_string(),
            "--alwaysStrict".to_string(),
        ];
        args.extend(sources.iter().map(|s| s.path.display().to_string()));

        Self {
            program: config.compiler.clone(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Space-joined command line, unquoted. Display only.
    pub fn render(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::CompilerInvocation;
    use crate::config::BuildConfig;
    use crate::discovery::SourceFile;
    use std::path::PathBuf;

    fn sources(paths: &[&str]) -> Vec<SourceFile> {
        paths
            .iter()
            .map(|p| SourceFile {
                path: PathBuf::from(p),
            })
            .collect()
    }

    #[test]
    fn fixed_flags_come_first_in_stable_order() {
        let config = BuildConfig::default();
        let invocation = CompilerInvocation::new(&config, &[]);

        assert_eq!(invocation.program(), "tsc");
        assert_eq!(
            invocation.args(),
            [
                "--allowJs",
                "-m",
                "ES6",
                "-t",
                "ES6",
                "--outDir",
                "dist",
                "--sourceMap",
                "--alwaysStrict",
            ]
        );
    }

    #[test]
    fn sources_become_trailing_positional_arguments() {
        let config = BuildConfig::default();
        let srcs = sources(&["src/app.ts", "src/util.ts", "src/gui.ts"]);
        let invocation = CompilerInvocation::new(&config, &srcs);

        let trailing = &invocation.args()[invocation.args().len() - srcs.len()..];
        assert_eq!(trailing, ["src/app.ts", "src/util.ts", "src/gui.ts"]);
    }

    #[test]
    fn empty_source_set_has_no_positional_arguments() {
        let config = BuildConfig::default();
        let invocation = CompilerInvocation::new(&config, &[]);

        assert_eq!(invocation.args().len(), 9);
        assert_eq!(invocation.args().last().map(String::as_str), Some("--alwaysStrict"));
    }

    #[test]
    fn render_starts_with_program_and_flags() {
        let config = BuildConfig::default();
        let invocation = CompilerInvocation::new(&config, &sources(&["src/app.ts"]));

        let line = invocation.render();
        assert!(line.starts_with(
            "tsc --allowJs -m ES6 -t ES6 --outDir dist --sourceMap --alwaysStrict"
        ));
        assert!(line.ends_with("src/app.ts"));
    }

    #[test]
    fn out_dir_flag_tracks_config() {
        let config = BuildConfig {
            out_dir: PathBuf::from("build/out"),
            ..BuildConfig::default()
        };
        let invocation = CompilerInvocation::new(&config, &[]);

        let args = invocation.args();
        let idx = args.iter().position(|a| a == "--outDir").expect("--outDir");
        assert_eq!(args[idx + 1], "build/out");
    }
}
