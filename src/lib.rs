//! DDD Audit - CSS design-token migration auditing
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure classification logic lives in `tokens` and `parser`
//! - File system access is confined to `ignore`, `walker` and `analyzer`
//! - `run_audit` is the single entry point used by the CLI

pub mod analyzer;
pub mod config;
pub mod domain;
pub mod ignore;
pub mod parser;
pub mod report;
pub mod tokens;
pub mod walker;

// Re-export main types for convenient access
pub use domain::findings::{
    AuditError, AuditFinding, AuditReport, AuditResult, AuditSummary, FileAudit, NO_SUGGESTION,
};

pub use config::AuditConfig;

pub use analyzer::Auditor;

pub use ignore::{IgnoreRule, IgnoreRules, RuleKind};

pub use report::{OutputFormat, ReportFormatter, ReportOptions};

pub use tokens::{suggest, PropertyFamily};

use std::io::Write;
use std::path::Path;

/// Options for a single audit run
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Print the resolved ignore-rule table before walking
    pub debug: bool,
    /// Output format for results
    pub output_format: OutputFormat,
    /// Report options
    pub report_options: ReportOptions,
}

/// Audit every file below `root`, writing the report to `writer`.
///
/// Human output is written file by file as the walk progresses; JSON output
/// is written once the walk has finished. The first file-system error aborts
/// the run, leaving whatever was already written in place.
pub fn run_audit<W: Write>(
    root: &Path,
    config: &AuditConfig,
    options: &AuditOptions,
    mut writer: W,
) -> AuditResult<AuditReport> {
    let root = root
        .canonicalize()
        .map_err(|e| AuditError::walk(root, format!("cannot resolve audit root: {e}")))?;

    let auditor = Auditor::new(config.clone());
    let formatter = ReportFormatter::new(options.report_options.clone());

    let rules = auditor.build_rules(&root)?;
    tracing::info!(
        "Auditing {} with {} ignore rule(s)",
        root.display(),
        rules.len()
    );

    if options.debug {
        formatter.write(&mut writer, &rules.format_table())?;
        formatter.write(&mut writer, "\n")?;
    }

    let human = options.output_format == OutputFormat::Human;
    let report = auditor.audit_tree_with(&root, &rules, |audit| {
        if human && !audit.is_empty() {
            formatter.write(&mut writer, &formatter.format_file(audit))?;
        }
        Ok(())
    })?;

    match options.output_format {
        OutputFormat::Human => {
            if !report.has_findings() {
                formatter.write(&mut writer, &formatter.format_no_changes())?;
            }
            if options.report_options.show_summary {
                let summary = formatter.format_summary(&report, &config.docs_url);
                formatter.write(&mut writer, &summary)?;
            }
        }
        OutputFormat::Json => {
            let json = formatter.format_json(&report)?;
            formatter.write(&mut writer, &json)?;
            formatter.write(&mut writer, "\n")?;
        }
    }

    writer.flush()?;
    Ok(report)
}

/// Audit a directory with default configuration, without producing output
pub fn audit_directory<P: AsRef<Path>>(root: P) -> AuditResult<AuditReport> {
    Auditor::default().audit_directory(root.as_ref())
}
