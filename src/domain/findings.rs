//! Core domain models for audit findings and audit results
//!
//! Architecture: Rich Domain Models - Findings carry their own display and classification behavior
//! - AuditFinding is created transiently during a single pass and never persisted
//! - FileAudit groups the findings of one file; files are never merged
//! - AuditReport acts as the aggregate root for a whole run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suggestion text used when no design token matches a value
pub const NO_SUGGESTION: &str = "No available suggestions. Check DDD documentation.";

/// A CSS declaration that could be replaced with a design token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFinding {
    /// File the declaration was found in
    pub file_path: PathBuf,
    /// Line number (1-indexed)
    pub line_number: u32,
    /// Lower-cased CSS property name
    pub property: String,
    /// Trimmed value with the trailing `;` removed
    pub raw_value: String,
    /// Design token identifier, or [`NO_SUGGESTION`]
    pub suggested_token: String,
}

impl AuditFinding {
    /// Create a new finding
    pub fn new(
        file_path: impl Into<PathBuf>,
        line_number: u32,
        property: impl Into<String>,
        raw_value: impl Into<String>,
        suggested_token: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            property: property.into(),
            raw_value: raw_value.into(),
            suggested_token: suggested_token.into(),
        }
    }

    /// Whether a concrete token was suggested
    pub fn has_suggestion(&self) -> bool {
        self.suggested_token != NO_SUGGESTION
    }
}

/// All findings produced while auditing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAudit {
    /// Audited file
    pub path: PathBuf,
    /// Findings in line order
    pub findings: Vec<AuditFinding>,
}

impl FileAudit {
    /// Create an empty audit for a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, finding: AuditFinding) {
        self.findings.push(finding);
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }
}

/// Summary statistics for an audit run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Number of files read and audited
    pub files_audited: usize,
    /// Number of files with at least one finding
    pub files_with_findings: usize,
    /// Total findings across all files
    pub total_findings: usize,
    /// Findings for which a concrete token was suggested
    pub suggested: usize,
    /// Total execution time in milliseconds
    pub execution_time_ms: u64,
    /// Timestamp when the audit was performed
    pub audited_at: DateTime<Utc>,
}

/// Complete result of one audit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Root directory the audit started from
    pub root: PathBuf,
    /// Files that produced findings, in walk order
    pub files: Vec<FileAudit>,
    /// Summary statistics
    pub summary: AuditSummary,
}

impl AuditReport {
    /// Create a new empty report for a root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
            summary: AuditSummary {
                audited_at: Utc::now(),
                ..Default::default()
            },
        }
    }

    /// Record an audited file; files without findings only count towards the total
    pub fn add_file(&mut self, audit: FileAudit) {
        self.summary.files_audited += 1;
        if audit.is_empty() {
            return;
        }
        self.summary.files_with_findings += 1;
        self.summary.total_findings += audit.len();
        self.summary.suggested += audit.findings.iter().filter(|f| f.has_suggestion()).count();
        self.files.push(audit);
    }

    /// Whether the run produced any findings
    pub fn has_findings(&self) -> bool {
        self.summary.total_findings > 0
    }

    /// Iterate over every finding in the report
    pub fn findings(&self) -> impl Iterator<Item = &AuditFinding> {
        self.files.iter().flat_map(|f| f.findings.iter())
    }

    /// Set the execution time
    pub fn set_execution_time(&mut self, duration_ms: u64) {
        self.summary.execution_time_ms = duration_ms;
    }
}

/// Error types that can occur during an audit run
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Failed to walk {path}: {message}")]
    Walk { path: String, message: String },

    /// A `.dddignore` file could not be read
    #[error("Failed to read ignore file {path}: {message}")]
    IgnoreFile { path: String, message: String },

    /// An audited file could not be read
    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    /// Report rendering or output failed
    #[error("Report error: {message}")]
    Report { message: String },

    /// File watching failed
    #[error("Watch error: {message}")]
    Watch { message: String },
}

impl AuditError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a traversal error
    pub fn walk(path: &Path, message: impl Into<String>) -> Self {
        Self::Walk {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create an ignore file error
    pub fn ignore_file(path: &Path, message: impl Into<String>) -> Self {
        Self::IgnoreFile {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &Path, message: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    /// Create a watch error
    pub fn watch(message: impl Into<String>) -> Self {
        Self::Watch {
            message: message.into(),
        }
    }
}

impl From<walkdir::Error> for AuditError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Self::Walk {
            path,
            message: err.to_string(),
        }
    }
}

/// Result type for audit operations
pub type AuditResult<T> = Result<T, AuditError>;
