//! Spawn the package manager against a resolved tarball URL.

use crate::core::{MonopackError, MonopackResult};
use clap::ValueEnum;
use std::process::Command;

/// Supported package-manager families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    /// Executable name looked up on the system PATH.
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Arguments for installing `url`: `yarn add <url>` / `npm install <url>`.
    pub fn install_args(&self, url: &str) -> Vec<String> {
        let verb = match self {
            PackageManager::Yarn => "add",
            PackageManager::Npm => "install",
        };
        vec![verb.to_string(), url.to_string()]
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.binary())
    }
}

/// Install `url` with `manager`, inheriting stdio so the user sees the
/// package manager's own output live.
///
/// Blocks until the child exits. A non-zero exit status is an
/// `InstallFailed` error; nothing is retried.
pub fn install(manager: PackageManager, url: &str) -> MonopackResult<()> {
    let args = manager.install_args(url);
    run_install_command(manager.binary(), &args)
}

fn run_install_command(program: &str, args: &[String]) -> MonopackResult<()> {
    tracing::debug!(%program, ?args, "spawning package manager");

    let status = Command::new(program).args(args).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(MonopackError::InstallFailed {
            command: format!("{} {}", program, args.join(" ")),
            code: status.code().unwrap_or(1),
        })
    }
}
