//! Report output helpers.

use std::io::Write;

use anyhow::Result;

use crate::pipeline::BuildReport;

/// Write the report as prettified JSON.
pub fn write_json_pretty(report: &BuildReport, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write a one-line human summary.
pub fn write_summary(report: &BuildReport, mut w: impl Write) -> Result<()> {
    let status = match report.compiler.exit_code {
        Some(0) => "ok".to_string(),
        Some(code) => format!("exit {code}"),
        None => "killed by signal".to_string(),
    };

    writeln!(
        w,
        "compiled {} sources (compiler: {status}), copied {} assets",
        report.sources, report.assets_copied
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CompileOutcome;

    fn sample_report() -> BuildReport {
        BuildReport {
            command_line: "tsc --allowJs -m ES6 -t ES6 --outDir dist --sourceMap --alwaysStrict src/app.ts".to_string(),
            sources: 1,
            compiler: CompileOutcome {
                exit_code: Some(0),
                stderr: String::new(),
            },
            assets_copied: 2,
        }
    }

    #[test]
    fn json_round_trips() {
        let mut buf = Vec::new();
        write_json_pretty(&sample_report(), &mut buf).expect("write json");

        let parsed: BuildReport = serde_json::from_slice(&buf).expect("parse");
        assert_eq!(parsed.sources, 1);
        assert_eq!(parsed.assets_copied, 2);
        assert_eq!(parsed.compiler.exit_code, Some(0));
    }

    #[test]
    fn summary_reports_nonzero_exit() {
        let mut report = sample_report();
        report.compiler.exit_code = Some(2);

        let mut buf = Vec::new();
        write_summary(&report, &mut buf).expect("write summary");

        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("exit 2"));
        assert!(text.contains("copied 2 assets"));
    }
}
