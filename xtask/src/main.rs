use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for the docnav project")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the docnav binary to a bin directory
    Install {
        /// Custom installation path (default: ~/.cargo/bin or ~/.local/bin)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Install { path } => install(path),
    }
}

fn install(custom_path: Option<PathBuf>) -> Result<()> {
    println!("Building release binary...");
    let status = Command::new("cargo")
        .args(["build", "--release", "-p", "docnav-cli"])
        .status()
        .context("Failed to run cargo build")?;
    if !status.success() {
        bail!("Build failed");
    }

    let src = workspace_root()?.join("target/release/docnav");
    if !src.exists() {
        bail!("Binary not found: {}", src.display());
    }

    let install_dir = install_dir(custom_path)?;
    fs::create_dir_all(&install_dir)
        .with_context(|| format!("Failed to create directory: {}", install_dir.display()))?;

    let dst = install_dir.join("docnav");
    fs::copy(&src, &dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;

    let mut perms = fs::metadata(&dst)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&dst, perms)?;
    println!("Installed: {}", dst.display());

    if let Ok(path_env) = std::env::var("PATH") {
        let dir = install_dir.to_string_lossy();
        if !path_env.split(':').any(|p| p == dir) {
            println!();
            println!("Note: {} is not in your PATH.", install_dir.display());
            println!("  export PATH=\"{}:$PATH\"", install_dir.display());
        }
    }

    Ok(())
}

fn install_dir(custom_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom_path {
        return Ok(path);
    }

    let home = PathBuf::from(std::env::var("HOME").context("HOME environment variable not set")?);

    // Prefer ~/.cargo/bin, fall back to ~/.local/bin if only that exists
    let cargo_bin = home.join(".cargo/bin");
    if cargo_bin.exists() {
        return Ok(cargo_bin);
    }
    let local_bin = home.join(".local/bin");
    if local_bin.exists() {
        return Ok(local_bin);
    }
    Ok(cargo_bin)
}

fn workspace_root() -> Result<PathBuf> {
    // When run via `cargo xtask`, CARGO_MANIFEST_DIR points at xtask/
    let manifest_dir = PathBuf::from(
        std::env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?,
    );
    manifest_dir
        .parent()
        .map(PathBuf::from)
        .context("xtask manifest has no parent directory")
}
