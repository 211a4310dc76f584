//! Scoped exclusion rules loaded from `.dddignore` files
//!
//! Architectural Principle: Service Layer - IgnoreRules owns every exclusion decision
//! - Discovers `.dddignore` files anywhere below the audit root
//! - Each rule applies only to the directory holding its file and that directory's descendants
//! - Rules accumulate; any matching rule excludes, nothing can re-include

use crate::domain::findings::{AuditError, AuditResult};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default name of the per-directory ignore manifest
pub const IGNORE_FILENAME: &str = ".dddignore";

/// Entries that are never walked or audited, regardless of any rule
pub const ALWAYS_SKIPPED: &[&str] = &["node_modules", ".git", "dist", "public"];

/// What an ignore rule is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// `/name` or `\name`: a directory with this exact name
    Directory,
    /// `name`: a file with this exact name
    File,
    /// `*suffix`: any file whose name ends with the suffix
    Extension,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
            Self::Extension => "extension",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single exclusion directive from a `.dddignore` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoreRule {
    /// Directory that contained the `.dddignore` file
    pub scope_root: PathBuf,
    /// Name or suffix to match, with any kind prefix removed
    pub pattern: String,
    pub kind: RuleKind,
}

impl IgnoreRule {
    pub fn new(
        scope_root: impl Into<PathBuf>,
        pattern: impl Into<String>,
        kind: RuleKind,
    ) -> Self {
        Self {
            scope_root: scope_root.into(),
            pattern: pattern.into(),
            kind,
        }
    }

    /// Parse one line of a `.dddignore` file.
    ///
    /// Returns `None` for blank lines, comments and rules that are empty once
    /// their kind prefix is stripped.
    pub fn parse_line(line: &str, scope_root: &Path) -> Option<Self> {
        let mut line = line.trim();
        if line.is_empty() {
            return None;
        }

        if !line.starts_with('#') {
            if let Some(idx) = line.find('#') {
                line = line[..idx].trim();
            }
        }
        if line.starts_with('#') {
            return None;
        }

        let (kind, pattern) = if let Some(rest) = line.strip_prefix(['/', '\\']) {
            (RuleKind::Directory, rest)
        } else if let Some(rest) = line.strip_prefix('*') {
            (RuleKind::Extension, rest)
        } else {
            (RuleKind::File, line)
        };

        if pattern.is_empty() {
            return None;
        }

        Some(Self::new(scope_root, pattern, kind))
    }

    /// Whether this rule is in effect for entries inside `dir`
    pub fn in_scope(&self, dir: &Path) -> bool {
        dir.starts_with(&self.scope_root)
    }

    /// Whether an entry name matches this rule, ignoring scope
    pub fn matches_name(&self, name: &str) -> bool {
        match self.kind {
            RuleKind::Directory | RuleKind::File => name == self.pattern,
            RuleKind::Extension => name.ends_with(&self.pattern),
        }
    }
}

/// Parse the full text of a `.dddignore` file found in `scope_root`
pub fn parse_ignore_content(content: &str, scope_root: &Path) -> Vec<IgnoreRule> {
    content
        .lines()
        .filter_map(|line| IgnoreRule::parse_line(line, scope_root))
        .collect()
}

/// The complete rule set for one audit run
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
    /// Configured skip names on top of [`ALWAYS_SKIPPED`]
    extra_skip: Vec<String>,
}

impl IgnoreRules {
    /// Create a rule set from already-parsed rules
    pub fn new(rules: Vec<IgnoreRule>) -> Self {
        Self {
            rules,
            extra_skip: Vec::new(),
        }
    }

    /// Add directory names that are skipped like [`ALWAYS_SKIPPED`]
    pub fn with_extra_skip(mut self, names: Vec<String>) -> Self {
        self.extra_skip = names;
        self
    }

    /// Discover and parse every ignore file named `ignore_filename` below `root`
    pub fn discover(
        root: &Path,
        ignore_filename: &str,
        extra_skip: &[String],
    ) -> AuditResult<Self> {
        let skip = Self::new(Vec::new()).with_extra_skip(extra_skip.to_vec());
        let mut rules = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !skip.is_always_skipped(&entry.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || entry.file_name() != ignore_filename {
                continue;
            }

            let path = entry.path();
            let content = fs::read_to_string(path)
                .map_err(|e| AuditError::ignore_file(path, e.to_string()))?;
            let scope_root = path.parent().unwrap_or(root);
            let found = parse_ignore_content(&content, scope_root);

            tracing::debug!("Loaded {} rule(s) from {}", found.len(), path.display());
            rules.extend(found);
        }

        Ok(Self {
            rules,
            extra_skip: extra_skip.to_vec(),
        })
    }

    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether an entry name is skipped without consulting any rule
    pub fn is_always_skipped(&self, name: &str) -> bool {
        ALWAYS_SKIPPED.contains(&name) || self.extra_skip.iter().any(|s| s == name)
    }

    /// Whether the subdirectory `name` of `parent` must not be descended into
    pub fn excludes_dir(&self, parent: &Path, name: &str) -> bool {
        self.is_always_skipped(name)
            || self.rules.iter().any(|rule| {
                rule.kind == RuleKind::Directory && rule.in_scope(parent) && rule.matches_name(name)
            })
    }

    /// Whether the file `name` inside `parent` must not be audited
    pub fn excludes_file(&self, parent: &Path, name: &str) -> bool {
        if self.is_always_skipped(name) {
            return true;
        }

        let scoped = |kind: RuleKind| {
            self.rules
                .iter()
                .any(|rule| rule.kind == kind && rule.in_scope(parent) && rule.matches_name(name))
        };

        scoped(RuleKind::Extension) || scoped(RuleKind::File)
    }

    /// Whether `path` is excluded, either directly or through one of its
    /// directories between `root` and itself. Paths outside `root` are never
    /// excluded.
    pub fn excludes_path(&self, root: &Path, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };

        let mut parent = root.to_path_buf();
        let mut components = relative.components().peekable();
        while let Some(component) = components.next() {
            let name = component.as_os_str().to_string_lossy();
            let excluded = if components.peek().is_some() {
                self.excludes_dir(&parent, &name)
            } else {
                self.excludes_file(&parent, &name)
            };
            if excluded {
                return true;
            }
            parent.push(component);
        }

        false
    }

    /// Render the rule set as a table for debugging
    pub fn format_table(&self) -> String {
        if self.rules.is_empty() {
            return "No ignore rules found\n".to_string();
        }

        let scope_width = self
            .rules
            .iter()
            .map(|r| r.scope_root.display().to_string().len())
            .max()
            .unwrap_or(0)
            .max("Scope".len());
        let kind_width = "extension".len();

        let mut output = format!(
            "{:<scope_width$}  {:<kind_width$}  Pattern\n",
            "Scope",
            "Kind"
        );
        for rule in &self.rules {
            output.push_str(&format!(
                "{:<scope_width$}  {:<kind_width$}  {}\n",
                rule.scope_root.display(),
                rule.kind.as_str(),
                rule.pattern
            ));
        }
        output
    }
}

/// Build the rule list for `root` using the default ignore file name
pub fn build_ignore_rules(root: &Path) -> AuditResult<Vec<IgnoreRule>> {
    Ok(IgnoreRules::discover(root, IGNORE_FILENAME, &[])?.rules)
}
