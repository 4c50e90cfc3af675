//! Resolve a monorepo sub-directory to a tarball snapshot.

use crate::config::DEFAULT_API_URL;
use crate::core::{MonopackError, MonopackResult};
use crate::github::{ContentEntry, ContentsLister};
use crate::target::RepoTarget;

/// A package resolved to an exact tree snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub owner: String,
    pub repo: String,
    pub sha: String,
}

impl ResolvedPackage {
    /// Format the tarball download URL for this snapshot against `api_url`.
    ///
    /// Pure formatting; no failure modes over well-formed inputs.
    pub fn tarball_url(&self, api_url: &str) -> String {
        format!(
            "{}/repos/{}/{}/tarball/{}",
            api_url, self.owner, self.repo, self.sha
        )
    }

    /// Tarball URL against the default public GitHub API host.
    pub fn default_tarball_url(&self) -> String {
        self.tarball_url(DEFAULT_API_URL)
    }
}

/// Resolve `target` by listing its parent directory and matching the leaf
/// package name against the returned entries.
///
/// First exact (case-sensitive) name match wins; duplicate names are not
/// expected from the remote and are not specially handled.
pub async fn resolve(
    lister: &dyn ContentsLister,
    target: &RepoTarget,
) -> MonopackResult<ResolvedPackage> {
    let entries = lister
        .list_contents(&target.owner, &target.repo, &target.parent_dir())
        .await?;

    let entry = match_entry(&entries, target.package_name()).ok_or_else(|| {
        MonopackError::PackageNotFound {
            name: target.package_name().to_string(),
            owner: target.owner.clone(),
            repo: target.repo.clone(),
        }
    })?;

    tracing::debug!(name = %entry.name, sha = %entry.sha, "matched package entry");

    Ok(ResolvedPackage {
        owner: target.owner.clone(),
        repo: target.repo.clone(),
        sha: entry.sha.clone(),
    })
}

/// First entry whose name exactly equals `package_name`.
fn match_entry<'a>(entries: &'a [ContentEntry], package_name: &str) -> Option<&'a ContentEntry> {
    entries.iter().find(|entry| entry.name == package_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted lister that counts invocations.
    struct FakeLister {
        entries: Vec<ContentEntry>,
        calls: AtomicUsize,
    }

    impl FakeLister {
        fn with_entries(entries: Vec<ContentEntry>) -> Self {
            Self {
                entries,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentsLister for FakeLister {
        async fn list_contents(
            &self,
            _owner: &str,
            _repo: &str,
            _path: &str,
        ) -> MonopackResult<Vec<ContentEntry>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.entries.clone())
        }
    }

    fn entry(name: &str, sha: &str) -> ContentEntry {
        ContentEntry {
            name: name.to_string(),
            sha: sha.to_string(),
        }
    }

    #[test]
    fn test_match_entry_exact() {
        let entries = vec![entry("foo", "h1"), entry("bar", "h2")];
        assert_eq!(match_entry(&entries, "bar").unwrap().sha, "h2");
        assert!(match_entry(&entries, "baz").is_none());
    }

    #[test]
    fn test_match_entry_case_sensitive() {
        let entries = vec![entry("Foo", "h1")];
        assert!(match_entry(&entries, "foo").is_none());
    }

    #[test]
    fn test_tarball_url_is_pure() {
        let pkg = ResolvedPackage {
            owner: "o".to_string(),
            repo: "r".to_string(),
            sha: "h".to_string(),
        };
        assert_eq!(
            pkg.default_tarball_url(),
            "https://api.github.com/repos/o/r/tarball/h"
        );
        // Idempotent, no hidden state.
        assert_eq!(pkg.default_tarball_url(), pkg.default_tarball_url());
    }

    #[tokio::test]
    async fn test_resolve_matches_leaf_name() {
        let lister = FakeLister::with_entries(vec![
            entry("react-dev-utils", "def456"),
            entry("react-scripts", "abc123"),
        ]);
        let target = RepoTarget::parse("facebook/create-react-app/packages/react-scripts").unwrap();

        let pkg = resolve(&lister, &target).await.unwrap();
        assert_eq!(pkg.sha, "abc123");
        assert_eq!(
            pkg.default_tarball_url(),
            "https://api.github.com/repos/facebook/create-react-app/tarball/abc123"
        );
        assert_eq!(lister.call_count(), 1);
    }

    #[tokio::test]
    async fn test_resolve_package_not_found() {
        let lister = FakeLister::with_entries(vec![entry("foo", "h1")]);
        let target = RepoTarget::parse("o/r/packages/baz").unwrap();

        let err = resolve(&lister, &target).await.unwrap_err();
        assert!(matches!(err, MonopackError::PackageNotFound { .. }));
    }

    #[tokio::test]
    async fn test_invalid_path_never_reaches_lister() {
        let lister = FakeLister::with_entries(vec![entry("foo", "h1")]);

        // Parsing fails before a lister could be consulted; resolution is
        // only reachable with a valid target.
        let parsed = RepoTarget::parse("owner/repo");
        assert!(parsed.is_err());
        assert_eq!(lister.call_count(), 0);
    }
}
