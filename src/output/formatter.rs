use anyhow::Result;

use crate::cli::OutputFormat;
use crate::parity::ParityReport;
use crate::review::ReviewReport;

pub const REVIEWED_SUFFIX: &str = " (√)";
pub const UNDONE_HEADER: &str = "undone tests:";

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_review(report: &ReviewReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::review_text(report)),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        }
    }

    pub fn review_text(report: &ReviewReport) -> String {
        let mut out = String::new();
        for file in &report.files {
            let suffix = if file.reviewed { REVIEWED_SUFFIX } else { "" };
            out.push_str(&format!("{}{suffix}\n", file.path.display()));
        }
        out.push_str(&format!("progress: {}/{}\n", report.reviewed, report.total));
        out
    }

    /// JSON summary followed by the plain list of tests still to port.
    pub fn format_parity(report: &ParityReport) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        out.push_str(UNDONE_HEADER);
        out.push('\n');
        for name in &report.undone {
            out.push_str(name);
            out.push('\n');
        }
        Ok(out)
    }
}
