//! Report generation with multiple output formats
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - FileAudit and AuditReport (domain) are converted to terminal tables or JSON
//! - The human format is rendered one file at a time so it can be streamed during the walk
//! - JSON is produced once, from the finished report

use crate::domain::findings::{AuditError, AuditReport, AuditResult, FileAudit, NO_SUGGESTION};
use serde_json::Value as JsonValue;
use std::io::Write;

/// Table column headings
pub const COLUMN_HEADERS: [&str; 4] = [
    "Line Number",
    "CSS Property",
    "Current Attribute",
    "Suggested Replacement Attribute",
];

/// Printed instead of any table when a run finds nothing
pub const NO_CHANGES_NOTICE: &str = "No changes needed! Your CSS already uses DDD design tokens.";

/// Supported output formats for audit reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Per-file tables for a terminal
    #[default]
    Human,
    /// Single JSON document for programmatic consumption
    Json,
}

/// Options for customizing report output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use colored output (human format only)
    pub use_colors: bool,
    /// Whether to print the closing summary
    pub show_summary: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_summary: true,
        }
    }
}

/// Renders audit results
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    /// Create a new report formatter with options
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Table for one file, or an empty string when the file has no findings
    pub fn format_file(&self, audit: &FileAudit) -> String {
        if audit.is_empty() {
            return String::new();
        }

        let rows: Vec<[String; 4]> = audit
            .findings
            .iter()
            .map(|f| {
                [
                    f.line_number.to_string(),
                    f.property.clone(),
                    f.raw_value.clone(),
                    f.suggested_token.clone(),
                ]
            })
            .collect();

        let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        output.push_str(&self.paint_path(&audit.path.display().to_string()));
        output.push('\n');

        let header = COLUMN_HEADERS.map(String::from);
        output.push_str(&self.paint_header(&format_row(&header, &widths)));
        output.push('\n');
        output.push_str(&format_separator(&widths));
        output.push('\n');

        for row in &rows {
            let line = format_row(row, &widths);
            if row[3] == NO_SUGGESTION {
                output.push_str(&self.paint_dim(&line));
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }

        output.push('\n');
        output
    }

    /// Notice for a run without findings
    pub fn format_no_changes(&self) -> String {
        format!("{}\n", self.paint_success(NO_CHANGES_NOTICE))
    }

    /// Closing summary with the documentation link
    pub fn format_summary(&self, report: &AuditReport, docs_url: &str) -> String {
        let summary = &report.summary;
        let execution_time = (summary.execution_time_ms as f64) / 1000.0;

        let mut output = String::new();
        output.push_str(&self.paint_header("Summary:"));
        output.push_str(&format!(
            " {} finding{} in {} of {} file{} ({:.1}s)\n",
            summary.total_findings,
            plural(summary.total_findings),
            summary.files_with_findings,
            summary.files_audited,
            plural(summary.files_audited),
            execution_time
        ));
        if summary.total_findings > 0 {
            output.push_str(&format!(
                "{} with a suggested token, {} without\n",
                summary.suggested,
                summary.total_findings - summary.suggested
            ));
        }
        output.push_str(&format!(
            "For more information on DDD design tokens see {docs_url}\n"
        ));
        output
    }

    /// Format report in JSON format
    pub fn format_json(&self, report: &AuditReport) -> AuditResult<String> {
        let files: Vec<JsonValue> = report
            .files
            .iter()
            .map(|audit| {
                let findings: Vec<JsonValue> = audit
                    .findings
                    .iter()
                    .map(|f| {
                        serde_json::json!({
                            "line": f.line_number,
                            "property": f.property,
                            "value": f.raw_value,
                            "suggestion": f.suggested_token,
                        })
                    })
                    .collect();
                serde_json::json!({
                    "path": audit.path.display().to_string(),
                    "findings": findings,
                })
            })
            .collect();

        let json_report = serde_json::json!({
            "files": files,
            "summary": {
                "files_audited": report.summary.files_audited,
                "files_with_findings": report.summary.files_with_findings,
                "total_findings": report.summary.total_findings,
                "suggested": report.summary.suggested,
                "execution_time_ms": report.summary.execution_time_ms,
                "audited_at": report.summary.audited_at.to_rfc3339(),
            }
        });

        serde_json::to_string_pretty(&json_report)
            .map_err(|e| AuditError::report(format!("JSON serialization failed: {e}")))
    }

    /// Write already formatted output to a writer
    pub fn write<W: Write>(&self, writer: &mut W, text: &str) -> AuditResult<()> {
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    #[cfg(feature = "colors")]
    fn paint_path(&self, text: &str) -> String {
        use colored::Colorize;
        if self.options.use_colors {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(feature = "colors")]
    fn paint_header(&self, text: &str) -> String {
        use colored::Colorize;
        if self.options.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(feature = "colors")]
    fn paint_dim(&self, text: &str) -> String {
        use colored::Colorize;
        if self.options.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(feature = "colors")]
    fn paint_success(&self, text: &str) -> String {
        use colored::Colorize;
        if self.options.use_colors {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "colors"))]
    fn paint_path(&self, text: &str) -> String {
        text.to_string()
    }

    #[cfg(not(feature = "colors"))]
    fn paint_header(&self, text: &str) -> String {
        text.to_string()
    }

    #[cfg(not(feature = "colors"))]
    fn paint_dim(&self, text: &str) -> String {
        text.to_string()
    }

    #[cfg(not(feature = "colors"))]
    fn paint_success(&self, text: &str) -> String {
        text.to_string()
    }
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

fn format_separator(widths: &[usize; 4]) -> String {
    widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-")
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
