use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilesetError {
    /// Environment root does not exist
    #[error("environment directory not found: '{root}'")]
    RootNotFound { root: PathBuf },

    #[error("not a directory: '{root}'")]
    NotADirectory { root: PathBuf },

    /// Listing the directory failed partway through
    #[error("failed to list '{root}': {source}")]
    List {
        root: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },
}

/// A glob pattern matched against filenames, supporting `*` and `?`.
///
/// Patterns never cross path separators: the check compares the files
/// directly under each environment root, nothing below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, FilesetError> {
        if pattern.is_empty() {
            return Err(FilesetError::Pattern {
                pattern: pattern.to_string(),
                reason: "pattern is empty".to_string(),
            });
        }
        if pattern.contains(['/', '\\']) {
            return Err(FilesetError::Pattern {
                pattern: pattern.to_string(),
                reason: "path separators are not allowed; patterns match filenames only"
                    .to_string(),
            });
        }
        Ok(Self {
            raw: pattern.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, name: &str) -> bool {
        let pattern: Vec<char> = self.raw.chars().collect();
        let name: Vec<char> = name.chars().collect();
        wildcard_match(&pattern, &name)
    }
}

// Iterative backtracking match: `*` matches any run of characters (including
// none), `?` matches exactly one.
fn wildcard_match(pattern: &[char], name: &[char]) -> bool {
    let (mut p, mut n) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == name[n]) {
            p += 1;
            n += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some((p, n));
            p += 1;
        } else if let Some((star_p, star_n)) = star {
            p = star_p + 1;
            n = star_n + 1;
            star = Some((star_p, star_n + 1));
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }

    p == pattern.len()
}

/// The filenames matching a pattern directly under one environment root.
///
/// Backed by an ordered set so iteration order is deterministic across runs.
/// Computed fresh on every evaluation and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    names: BTreeSet<String>,
}

impl FileSet {
    /// Scan `root` for regular files whose name matches `pattern`.
    ///
    /// An empty directory yields an empty set. Non-file entries are ignored.
    /// Non-UTF-8 filenames cannot match a UTF-8 pattern and are skipped.
    pub fn scan(root: &Path, pattern: &Pattern) -> Result<Self, FilesetError> {
        if !root.exists() {
            return Err(FilesetError::RootNotFound {
                root: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(FilesetError::NotADirectory {
                root: root.to_path_buf(),
            });
        }

        let entries = std::fs::read_dir(root).map_err(|source| FilesetError::List {
            root: root.to_path_buf(),
            source,
        })?;

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|source| FilesetError::List {
                root: root.to_path_buf(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| FilesetError::List {
                root: root.to_path_buf(),
                source,
            })?;
            if !file_type.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::debug!(entry = ?entry.file_name(), "skipping non-UTF-8 filename");
                continue;
            };
            if pattern.matches(&name) {
                names.insert(name);
            }
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Filenames in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for FileSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(raw: &str) -> Pattern {
        Pattern::new(raw).unwrap()
    }

    #[test]
    fn test_star_pattern_matches_suffix() {
        let p = pattern("*.tf");
        assert!(p.matches("main.tf"));
        assert!(p.matches(".tf"));
        assert!(!p.matches("main.tfvars"));
        assert!(!p.matches("main.tf.bak"));
    }

    #[test]
    fn test_star_matches_empty_run() {
        let p = pattern("*");
        assert!(p.matches("anything"));
        assert!(p.matches(""));
    }

    #[test]
    fn test_question_mark_matches_single_char() {
        let p = pattern("?.tf");
        assert!(p.matches("a.tf"));
        assert!(!p.matches("ab.tf"));
        assert!(!p.matches(".tf"));
    }

    #[test]
    fn test_literal_pattern_is_exact() {
        let p = pattern("main.tf");
        assert!(p.matches("main.tf"));
        assert!(!p.matches("main.tff"));
        assert!(!p.matches("xmain.tf"));
    }

    #[test]
    fn test_multiple_stars_backtrack() {
        let p = pattern("*_*.tf");
        assert!(p.matches("a_b.tf"));
        assert!(p.matches("a_b_c.tf"));
        assert!(!p.matches("ab.tf"));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = Pattern::new("").unwrap_err();
        assert!(matches!(err, FilesetError::Pattern { .. }));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_pattern_with_separator_rejected() {
        let err = Pattern::new("modules/*.tf").unwrap_err();
        assert!(matches!(err, FilesetError::Pattern { .. }));
        assert!(err.to_string().contains("path separators"));
    }

    #[test]
    fn test_scan_filters_by_pattern() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.tf"), "a").unwrap();
        std::fs::write(dir.path().join("vars.tf"), "b").unwrap();
        std::fs::write(dir.path().join("README.md"), "c").unwrap();

        let set = FileSet::scan(dir.path(), &pattern("*.tf")).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("main.tf"));
        assert!(set.contains("vars.tf"));
        assert!(!set.contains("README.md"));
    }

    #[test]
    fn test_scan_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.tf")).unwrap();
        std::fs::write(dir.path().join("main.tf"), "a").unwrap();

        let set = FileSet::scan(dir.path(), &pattern("*.tf")).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("main.tf"));
    }

    #[test]
    fn test_scan_empty_directory_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = FileSet::scan(dir.path(), &pattern("*.tf")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_scan_missing_root_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-env");

        let err = FileSet::scan(&missing, &pattern("*.tf")).unwrap_err();
        assert!(matches!(err, FilesetError::RootNotFound { .. }));
        assert!(err.to_string().contains("no-such-env"));
    }

    #[test]
    fn test_scan_file_root_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.tf");
        std::fs::write(&file, "a").unwrap();

        let err = FileSet::scan(&file, &pattern("*.tf")).unwrap_err();
        assert!(matches!(err, FilesetError::NotADirectory { .. }));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let set: FileSet = ["b.tf", "a.tf", "c.tf"]
            .into_iter()
            .map(String::from)
            .collect();
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["a.tf", "b.tf", "c.tf"]);
    }
}
