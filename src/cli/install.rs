use monopack::config::Config;
use monopack::core::MonopackResult;
use monopack::github::GitHubClient;
use monopack::output::{spacer, wrap_outputs};
use monopack::package::{installer, resolver, PackageManager};
use monopack::target::RepoTarget;

pub struct InstallOptions {
    pub github_repo_path: String,
    pub print_only: bool,
    pub package_manager: PackageManager,
}

/// Run the whole pipeline: parse, list, match, then print or install.
pub async fn run(options: InstallOptions) -> MonopackResult<()> {
    // Validate the path argument before any network call.
    let target = RepoTarget::parse(&options.github_repo_path)?;

    let config = Config::load()?;
    let client = GitHubClient::new(&config)?;

    let package = resolver::resolve(&client, &target).await?;
    let installation_url = package.tarball_url(&config.api_url);

    tracing::debug!(%installation_url, "resolved package");

    if options.print_only {
        spacer();
        println!("Your installation url is:");
        wrap_outputs(&[&installation_url]);
        spacer();
        println!(
            "Run \"yarn add {}\" to install your package.",
            installation_url
        );
        spacer();
        return Ok(());
    }

    wrap_outputs(&[&format!(
        "Installing your package with {}...",
        options.package_manager
    )]);

    match installer::install(options.package_manager, &installation_url) {
        Ok(()) => {
            wrap_outputs(&["Installed successfully."]);
            spacer();
            Ok(())
        }
        Err(e) => {
            wrap_outputs(&["Installation failed."]);
            spacer();
            Err(e)
        }
    }
}
