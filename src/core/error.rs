use thiserror::Error;

pub type MonopackResult<T> = Result<T, MonopackError>;

#[derive(Error, Debug)]
pub enum MonopackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The github-repo-path argument is malformed. Raised before any
    /// network call is made.
    #[error("{0}")]
    InvalidPath(String),

    /// The requested repository path does not exist on the remote (HTTP 404).
    #[error("Not found on GitHub: {0}")]
    RemoteNotFound(String),

    /// The remote rejected the request (HTTP 401/403, including rate-limit
    /// rejections for anonymous clients).
    #[error("GitHub rejected the request: {0}")]
    RemoteAuth(String),

    /// The listing request failed at the transport level (connection,
    /// timeout, or an unparseable response body).
    #[error("GitHub request failed: {0}")]
    RemoteTransport(String),

    /// The listing succeeded but no entry matched the package name.
    #[error("No package with name \"{name}\" found in GitHub repo at \"{owner}/{repo}\"")]
    PackageNotFound {
        name: String,
        owner: String,
        repo: String,
    },

    /// The package manager exited with a non-zero status.
    #[error("Installation command failed: {command} (exit code {code})")]
    InstallFailed { command: String, code: i32 },

    #[error("Configuration error: {0}")]
    Config(String),
}
