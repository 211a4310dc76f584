//! Audit orchestration
//!
//! CDD Principle: Domain Services - Auditor coordinates rule discovery, walking and classification
//! - Rules are built once per root and stay read-only during the walk
//! - Each file is read whole, split into declarations and classified independently
//! - Per-file results are handed to the caller as soon as the file is done

use crate::config::AuditConfig;
use crate::domain::findings::{AuditError, AuditFinding, AuditReport, AuditResult, FileAudit};
use crate::ignore::IgnoreRules;
use crate::parser::extract_declarations;
use crate::tokens;
use crate::walker::audit_tree;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Runs audits according to one configuration
#[derive(Debug, Clone, Default)]
pub struct Auditor {
    config: AuditConfig,
}

impl Auditor {
    /// Create a new auditor with the given configuration
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Discover every ignore rule below `root`
    pub fn build_rules(&self, root: &Path) -> AuditResult<IgnoreRules> {
        IgnoreRules::discover(root, &self.config.ignore_file, &self.config.extra_skip_dirs)
    }

    /// Audit text that was read from `path`
    pub fn audit_content(&self, path: &Path, content: &str) -> FileAudit {
        let mut audit = FileAudit::new(path);

        for decl in extract_declarations(content) {
            if let Some(token) = tokens::suggest(&decl.property, &decl.value) {
                audit.push(AuditFinding::new(
                    path,
                    decl.line_number,
                    decl.property,
                    decl.value,
                    token,
                ));
            }
        }

        audit
    }

    /// Read and audit a single file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// only a failed read is an error.
    pub fn audit_file(&self, path: &Path) -> AuditResult<FileAudit> {
        let bytes = fs::read(path)
            .map_err(|e| AuditError::file_read(path, e.to_string()))?;
        let content = String::from_utf8_lossy(&bytes);

        let audit = self.audit_content(path, &content);
        tracing::debug!("Audited {} ({} finding(s))", path.display(), audit.len());
        Ok(audit)
    }

    /// Walk `root` with prebuilt rules, calling `on_file` after each audited file
    pub fn audit_tree_with<F>(
        &self,
        root: &Path,
        rules: &IgnoreRules,
        mut on_file: F,
    ) -> AuditResult<AuditReport>
    where
        F: FnMut(&FileAudit) -> AuditResult<()>,
    {
        let start_time = Instant::now();
        let mut report = AuditReport::new(root);

        audit_tree(root, rules, |path| {
            let audit = self.audit_file(path)?;
            on_file(&audit)?;
            report.add_file(audit);
            Ok(())
        })?;

        report.set_execution_time(start_time.elapsed().as_millis() as u64);
        Ok(report)
    }

    /// Build rules for `root` and audit the whole tree
    pub fn audit_directory(&self, root: &Path) -> AuditResult<AuditReport> {
        let rules = self.build_rules(root)?;
        self.audit_tree_with(root, &rules, |_| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::findings::NO_SUGGESTION;
    use tempfile::TempDir;

    #[test]
    fn test_audit_content() {
        let auditor = Auditor::default();
        let css = concat!(
            ".card {\n",
            "  color: red;\n",
            "  margin: var(--ddd-spacing-3);\n",
            "  display: flex;\n",
            "  background-color: #fff;\n",
            "}\n",
        );

        let audit = auditor.audit_content(Path::new("card.css"), css);

        assert_eq!(audit.len(), 2);
        assert_eq!(audit.findings[0].line_number, 2);
        assert_eq!(
            audit.findings[0].suggested_token,
            "--ddd-theme-default-original87Pink"
        );
        assert_eq!(audit.findings[1].line_number, 5);
        assert_eq!(audit.findings[1].property, "background-color");
        assert_eq!(audit.findings[1].suggested_token, NO_SUGGESTION);
    }

    #[test]
    fn test_audit_file_tolerates_binary() -> AuditResult<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("logo.png");
        fs::write(&path, [0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe])?;

        let audit = Auditor::default().audit_file(&path)?;
        assert!(audit.is_empty());
        Ok(())
    }

    #[test]
    fn test_audit_missing_file() {
        let result = Auditor::default().audit_file(Path::new("/no/such/file.css"));
        assert!(matches!(result, Err(AuditError::FileRead { .. })));
    }

    #[test]
    fn test_audit_directory() -> AuditResult<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        fs::create_dir_all(root.join("src"))?;
        fs::write(root.join("src/a.css"), "p {\n  font-size: 16px;\n}\n")?;
        fs::write(
            root.join("src/b.css"),
            "p {\n  font-size: var(--ddd-font-size-s);\n}\n",
        )?;

        let report = Auditor::default().audit_directory(root)?;

        assert_eq!(report.summary.files_audited, 2);
        assert_eq!(report.summary.files_with_findings, 1);
        let finding = &report.files[0].findings[0];
        assert_eq!(finding.suggested_token, "--ddd-font-size-4xs");
        Ok(())
    }

    #[test]
    fn test_configured_ignore_file_and_skip_dirs() -> AuditResult<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        fs::create_dir_all(root.join("coverage"))?;
        fs::write(root.join("coverage/report.css"), "a {\n  color: red;\n}\n")?;
        fs::write(root.join(".styleignore"), "skip.css\n")?;
        fs::write(root.join("skip.css"), "a {\n  color: red;\n}\n")?;

        let config = AuditConfig {
            ignore_file: ".styleignore".to_string(),
            extra_skip_dirs: vec!["coverage".to_string()],
            ..Default::default()
        };
        let report = Auditor::new(config).audit_directory(root)?;

        assert!(!report.has_findings());
        Ok(())
    }
}
