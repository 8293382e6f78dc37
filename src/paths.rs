//! Lexical path resolution against a project root.
//!
//! Nothing here touches the filesystem: `.` and `..` segments are collapsed
//! textually, symlinks are not followed, and paths need not exist. Glob
//! patterns resolve like plain paths, with a leading `!` (exclusion) kept in
//! front of the resolved absolute form.

use std::path::{Component, Path, PathBuf};

/// Prefix marking a glob entry as an exclusion.
pub const NEGATION_MARKER: char = '!';

/// Split a glob entry into its negation flag and the positive pattern.
pub fn split_negation(pattern: &str) -> (bool, &str) {
    match pattern.strip_prefix(NEGATION_MARKER) {
        Some(rest) => (true, rest),
        None => (false, pattern),
    }
}

/// Collapse `.` and `..` segments without consulting the filesystem.
///
/// `..` at the filesystem root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized.file_name().is_some() {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    normalized
}

/// Resolve a plain (non-negated) path against `root`.
///
/// An absolute candidate keeps its location and is only normalized.
pub fn resolve_path(root: &Path, candidate: impl AsRef<Path>) -> PathBuf {
    normalize_lexically(&root.join(candidate))
}

/// Resolve a glob entry against `root`, preserving a leading `!`.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let (negated, positive) = split_negation(pattern);
    let resolved = resolve_path(root, positive);
    let resolved = resolved.to_string_lossy();

    if negated {
        format!("{}{}", NEGATION_MARKER, resolved)
    } else {
        resolved.into_owned()
    }
}

/// Resolve an optional candidate; absence is preserved.
pub fn resolve(root: &Path, candidate: Option<&str>) -> Option<String> {
    candidate.map(|pattern| resolve_glob(root, pattern))
}

/// Check whether `path` equals or is nested under `root`.
///
/// A leading `!` is ignored, so exclusion globs are checked like their
/// positive counterparts. The comparison is per component, so `/a/public2`
/// is not within `/a/public`.
pub fn is_within(root: &Path, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref().to_string_lossy();
    let (_, positive) = split_negation(&path);
    normalize_lexically(Path::new(positive)).starts_with(normalize_lexically(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/work/public")
    }

    #[test]
    fn resolve_none_stays_none() {
        assert_eq!(resolve(&root(), None), None);
    }

    #[test]
    fn resolve_relative_path_joins_root() {
        assert_eq!(
            resolve(&root(), Some("foo.html")),
            Some("/work/public/foo.html".to_string())
        );
        assert_eq!(
            resolve_path(&root(), "nested/./bar.html"),
            PathBuf::from("/work/public/nested/bar.html")
        );
    }

    #[test]
    fn resolve_collapses_parent_segments() {
        assert_eq!(
            resolve_path(&root(), "../bar.html"),
            PathBuf::from("/work/bar.html")
        );
        assert_eq!(
            resolve_path(&root(), "a/b/../../c.html"),
            PathBuf::from("/work/public/c.html")
        );
    }

    #[test]
    fn resolve_keeps_absolute_candidates() {
        assert_eq!(
            resolve_path(&root(), "/some/absolute/path/bar.html"),
            PathBuf::from("/some/absolute/path/bar.html")
        );
    }

    #[test]
    fn resolve_preserves_glob_segments() {
        assert_eq!(resolve_glob(&root(), "src/**/*"), "/work/public/src/**/*");
        assert_eq!(
            resolve_glob(&root(), "bower_components/**/*.js"),
            "/work/public/bower_components/**/*.js"
        );
    }

    #[test]
    fn resolve_keeps_negation_marker_in_front() {
        assert_eq!(
            resolve_glob(&root(), "!images/ignore"),
            "!/work/public/images/ignore"
        );
        assert_eq!(
            resolve_glob(&root(), "!../outside"),
            "!/work/outside"
        );
    }

    #[test]
    fn parent_segments_stop_at_filesystem_root() {
        assert_eq!(
            normalize_lexically(Path::new("/../../etc")),
            PathBuf::from("/etc")
        );
    }

    #[test]
    fn relative_parent_segments_are_kept() {
        assert_eq!(
            normalize_lexically(Path::new("../a/./b/..")),
            PathBuf::from("../a")
        );
    }

    #[test]
    fn is_within_accepts_root_and_descendants() {
        assert!(is_within(&root(), "/work/public"));
        assert!(is_within(&root(), "/work/public/index.html"));
        assert!(is_within(&root(), "/work/public/src/**/*"));
    }

    #[test]
    fn is_within_rejects_siblings_and_parents() {
        assert!(!is_within(&root(), "/work/bar.html"));
        assert!(!is_within(&root(), "/work/public2/index.html"));
        assert!(!is_within(&root(), "/work"));
    }

    #[test]
    fn is_within_ignores_negation_marker() {
        assert!(is_within(&root(), "!/work/public/images/ignore"));
        assert!(!is_within(&root(), "!/work/outside"));
    }

    #[test]
    fn split_negation_reports_marker() {
        assert_eq!(split_negation("!a/b"), (true, "a/b"));
        assert_eq!(split_negation("a/b"), (false, "a/b"));
    }
}
