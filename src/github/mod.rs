//! GitHub contents API integration.
//!
//! This module provides the listing side of package resolution:
//! - Fetch the child entries of a repository directory
//! - Map GitHub's HTTP failures onto the crate's error taxonomy
//!
//! The `ContentsLister` trait is the seam used by tests to substitute the
//! remote with a scripted double.

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::ContentEntry;

use crate::core::MonopackResult;
use async_trait::async_trait;

/// Read-only directory listing against a repository hosting service.
///
/// Implementations should be side-effect-free on the remote; the call is
/// idempotent and safe to mock.
#[async_trait]
pub trait ContentsLister: Send + Sync {
    /// List the child entries of `path` in `owner/repo`. An empty `path`
    /// lists the repository root.
    async fn list_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> MonopackResult<Vec<ContentEntry>>;
}
