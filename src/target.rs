//! Parsing of the `owner/repo/sub-directory-path` argument.

use crate::core::{MonopackError, MonopackResult};

/// Hint appended to path-validation errors.
pub const FORMAT_HINT: &str = "Your github-repo-path should be formatted as \
`owner/repo/sub-directory-path`,\ni.e. facebook/create-react-app/packages/react-scripts";

/// A parsed monorepo package reference.
///
/// Immutable once parsed: `owner` and `repo` address the repository, and
/// `sub_directory_path` holds at least one segment (the package name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub owner: String,
    pub repo: String,
    sub_directory_path: Vec<String>,
}

impl RepoTarget {
    /// Parse a slash-delimited `owner/repo/sub-directory-path` string.
    ///
    /// Fails with `InvalidPath` if fewer than 3 segments are present or any
    /// segment is empty. No side effects; callers are expected to validate
    /// before touching the network.
    pub fn parse(github_repo_path: &str) -> MonopackResult<Self> {
        let segments: Vec<&str> = github_repo_path.split('/').collect();

        if segments.len() < 3 || segments.iter().any(|s| s.is_empty()) {
            return Err(MonopackError::InvalidPath(format!(
                "Missing `owner`, `repo` or `sub directory path` in installation url.\n{}",
                FORMAT_HINT
            )));
        }

        Ok(Self {
            owner: segments[0].to_string(),
            repo: segments[1].to_string(),
            sub_directory_path: segments[2..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// The directory listed on the remote: every segment but the last.
    /// Empty string when the package sits at the repository root level.
    pub fn parent_dir(&self) -> String {
        self.sub_directory_path[..self.sub_directory_path.len() - 1].join("/")
    }

    /// The leaf segment: the name of the package to match in the listing.
    pub fn package_name(&self) -> &str {
        self.sub_directory_path
            .last()
            .expect("parse guarantees at least one segment")
    }
}

impl std::fmt::Display for RepoTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.owner,
            self.repo,
            self.sub_directory_path.join("/")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_path() {
        let target = RepoTarget::parse("owner/repo/a/b/c").unwrap();
        assert_eq!(target.owner, "owner");
        assert_eq!(target.repo, "repo");
        assert_eq!(target.parent_dir(), "a/b");
        assert_eq!(target.package_name(), "c");
    }

    #[test]
    fn test_parse_single_subdirectory_segment() {
        let target = RepoTarget::parse("facebook/create-react-app/react-scripts").unwrap();
        assert_eq!(target.parent_dir(), "");
        assert_eq!(target.package_name(), "react-scripts");
    }

    #[test]
    fn test_parse_real_world_path() {
        let target = RepoTarget::parse("facebook/create-react-app/packages/react-scripts").unwrap();
        assert_eq!(target.owner, "facebook");
        assert_eq!(target.repo, "create-react-app");
        assert_eq!(target.parent_dir(), "packages");
        assert_eq!(target.package_name(), "react-scripts");
    }

    #[test]
    fn test_parse_too_few_segments() {
        for input in ["owner", "owner/repo", ""] {
            let err = RepoTarget::parse(input).unwrap_err();
            assert!(
                matches!(err, MonopackError::InvalidPath(_)),
                "expected InvalidPath for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_parse_empty_segment() {
        let err = RepoTarget::parse("owner//packages/pkg").unwrap_err();
        assert!(matches!(err, MonopackError::InvalidPath(_)));
    }

    #[test]
    fn test_invalid_path_error_carries_format_hint() {
        let err = RepoTarget::parse("owner/repo").unwrap_err();
        assert!(err.to_string().contains("owner/repo/sub-directory-path"));
    }

    #[test]
    fn test_display_round_trip() {
        let target = RepoTarget::parse("o/r/a/b").unwrap();
        assert_eq!(target.to_string(), "o/r/a/b");
    }
}
