use anyhow::Result;
use clap::Parser;

use release_checkout::retry::RetryPolicy;
use release_checkout::workspace::Workspace;
use release_checkout::{config, sync, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-checkout",
    about = "Check out submodules at a release tag or branch for a build"
)]
struct Args {
    #[arg(help = "Release tag or branch to check out (defaults to the configured default branch)")]
    release: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Give up after N submodule update attempts instead of retrying forever"
    )]
    retry_limit: Option<u32>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-checkout {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Empty or absent release means the default branch
    let requested = match args.release.as_deref() {
        Some(release) if !release.is_empty() => release.to_string(),
        _ => config.default_branch.clone(),
    };

    let policy = match args.retry_limit {
        Some(limit) => RetryPolicy::limited(limit),
        None => RetryPolicy::UntilSuccess,
    };

    ui::display_status(&format!("Preparing targets for {}", requested));

    let workspace = match Workspace::discover() {
        Ok(workspace) => workspace,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let report = sync::resolve_and_sync(&workspace, &requested, &config, &policy)?;

    ui::display_success(&format!(
        "Successfully checked out submodules to ref {}",
        report.effective_release
    ));

    Ok(())
}
