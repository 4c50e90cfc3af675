//! GitHub API type definitions

use serde::{Deserialize, Serialize};

/// A single child entry from a repository contents listing.
///
/// GitHub returns more fields (type, size, download URLs); only the name and
/// the tree SHA are needed to address a tarball snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub sha: String,
}

/// Error body GitHub attaches to non-2xx contents responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
