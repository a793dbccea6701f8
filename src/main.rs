use anyhow::Result;
use clap::Parser;

use cmake_release::config;
use cmake_release::git::Git2Backend;
use cmake_release::release::{run_release, ReleaseOptions, ReleaseOutcome};
use cmake_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "cmake-release",
    about = "Cut a release from conventional commits: bump the CMake version, update the changelog, and tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("cmake-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize git operations
    let git = match Git2Backend::open(".") {
        Ok(backend) => backend,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let workdir = match git.workdir() {
        Ok(dir) => dir,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let options = ReleaseOptions {
        force: args.force,
        dry_run: args.dry_run,
    };

    match run_release(&git, &workdir, &config, &options) {
        Ok(ReleaseOutcome::Released {
            tag,
            changelog_section,
            ..
        }) => {
            ui::display_release_summary(&tag, &changelog_section);
        }
        Ok(ReleaseOutcome::NothingToRelease) | Ok(ReleaseOutcome::DryRun { .. }) => {}
        Ok(ReleaseOutcome::Canceled) => {
            println!("Release canceled.");
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
