//! Monopack — install a package from a sub-directory of a GitHub monorepo.
//!
//! This crate resolves a slash-delimited path such as
//! `facebook/create-react-app/packages/react-scripts` to a tarball download
//! URL via the GitHub contents API, and either prints that URL or hands it to
//! a package manager (`yarn add` / `npm install`).

pub use crate::core::{MonopackError, MonopackResult};

/// Error types and result alias.
pub mod core;

/// Configuration management.
pub mod config;

/// Target path parsing (`owner/repo/sub-directory-path`).
pub mod target;

/// GitHub contents API integration.
pub mod github;

/// Package resolution and installation.
pub mod package;

/// Console output helpers (wrapped message blocks).
pub mod output;
