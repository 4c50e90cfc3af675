use clap::Parser;
use monopack::output::{spacer, wrap_outputs};
use monopack::package::PackageManager;
use monopack::target::FORMAT_HINT;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "monopack")]
#[command(about = "Install a package from a monorepo hosted on GitHub")]
#[command(after_help = FORMAT_HINT)]
#[command(version)]
struct Cli {
    /// GitHub repo path, e.g. facebook/create-react-app/packages/react-scripts
    github_repo_path: String,

    /// Get the installation url without installing
    #[arg(short, long)]
    print_only: bool,

    /// Choose between `npm` and `yarn`
    #[arg(short = 'm', long, value_enum, default_value_t = PackageManager::Yarn)]
    package_manager: PackageManager,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = cli::install::run(cli::install::InstallOptions {
        github_repo_path: cli.github_repo_path,
        print_only: cli.print_only,
        package_manager: cli.package_manager,
    })
    .await;

    // Exit-code selection lives here and nowhere else: every failure in the
    // pipeline propagates up as a MonopackError and maps to exit code 1.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            spacer();
            wrap_outputs(&[&e.to_string()]);
            spacer();
            ExitCode::FAILURE
        }
    }
}
