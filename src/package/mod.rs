//! Package resolution and installation.
//!
//! `resolver` turns a parsed target plus a remote listing into a tarball URL;
//! `installer` hands that URL to a package manager.

pub mod installer;
pub mod resolver;

pub use installer::PackageManager;
pub use resolver::ResolvedPackage;
