//! Depth-first traversal of the audit root
//!
//! Exclusion is decided while walking so ignored subtrees cause no I/O.
//! Entries are visited in file-name order, which keeps reports stable between runs.

use crate::domain::findings::AuditResult;
use crate::ignore::IgnoreRules;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Walk `root` and call `visit` for every file that survives the ignore rules.
///
/// Returns the number of files visited. The first traversal error or error
/// returned by `visit` aborts the walk; files visited before it keep whatever
/// side effects `visit` already produced.
pub fn audit_tree<F>(root: &Path, rules: &IgnoreRules, mut visit: F) -> AuditResult<usize>
where
    F: FnMut(&Path) -> AuditResult<()>,
{
    let mut visited = 0;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| is_included(entry, rules));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        visit(entry.path())?;
        visited += 1;
    }

    Ok(visited)
}

/// Whether an entry should be descended into (directories) or audited (files)
fn is_included(entry: &DirEntry, rules: &IgnoreRules) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    let Some(parent) = entry.path().parent() else {
        return true;
    };
    let name = entry.file_name().to_string_lossy();

    let excluded = if entry.file_type().is_dir() {
        rules.excludes_dir(parent, &name)
    } else {
        rules.excludes_file(parent, &name)
    };

    if excluded {
        tracing::trace!("Skipping {}", entry.path().display());
    }

    !excluded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ignore::{IgnoreRule, RuleKind, IGNORE_FILENAME};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn collect(root: &Path, rules: &IgnoreRules) -> AuditResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        audit_tree(root, rules, |path| {
            files.push(path.strip_prefix(root).unwrap_or(path).to_path_buf());
            Ok(())
        })?;
        Ok(files)
    }

    #[test]
    fn test_walk_is_sorted_and_skips_fixed_dirs() -> AuditResult<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        for dir in ["src", "node_modules/pkg", ".git", "dist", "public"] {
            fs::create_dir_all(root.join(dir))?;
        }
        fs::write(root.join("src/b.css"), "")?;
        fs::write(root.join("src/a.css"), "")?;
        fs::write(root.join("node_modules/pkg/index.css"), "")?;
        fs::write(root.join(".git/config"), "")?;
        fs::write(root.join("dist/out.css"), "")?;
        fs::write(root.join("public/site.css"), "")?;

        let files = collect(root, &IgnoreRules::default())?;
        assert_eq!(
            files,
            vec![PathBuf::from("src/a.css"), PathBuf::from("src/b.css")]
        );

        Ok(())
    }

    #[test]
    fn test_directory_rule_prevents_descent() -> AuditResult<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        fs::create_dir_all(root.join("legacy/nested"))?;
        fs::create_dir_all(root.join("src"))?;
        fs::write(root.join("legacy/nested/old.css"), "")?;
        fs::write(root.join("src/new.css"), "")?;

        let rules = IgnoreRules::new(vec![IgnoreRule::new(root, "legacy", RuleKind::Directory)]);
        let files = collect(root, &rules)?;
        assert_eq!(files, vec![PathBuf::from("src/new.css")]);

        Ok(())
    }

    #[test]
    fn test_rules_do_not_leak_to_siblings() -> AuditResult<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        fs::create_dir_all(root.join("a"))?;
        fs::create_dir_all(root.join("b"))?;
        fs::write(root.join("a/theme.css"), "")?;
        fs::write(root.join("b/theme.css"), "")?;
        fs::write(root.join("theme.css"), "")?;
        fs::write(root.join("a").join(IGNORE_FILENAME), "theme.css\n")?;

        let rules = IgnoreRules::discover(root, IGNORE_FILENAME, &[])?;
        let files = collect(root, &rules)?;

        assert!(!files.contains(&PathBuf::from("a/theme.css")));
        assert!(files.contains(&PathBuf::from("b/theme.css")));
        assert!(files.contains(&PathBuf::from("theme.css")));

        Ok(())
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let rules = IgnoreRules::default();
        let result = audit_tree(Path::new("/definitely/not/here"), &rules, |_| Ok(()));
        assert!(result.is_err());
    }

    #[test]
    fn test_visit_error_aborts() -> AuditResult<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("a.css"), "")?;
        fs::write(temp_dir.path().join("b.css"), "")?;

        let mut seen = 0;
        let result = audit_tree(temp_dir.path(), &IgnoreRules::default(), |_| {
            seen += 1;
            Err(crate::domain::findings::AuditError::report("stop"))
        });

        assert!(result.is_err());
        assert_eq!(seen, 1);
        Ok(())
    }
}
