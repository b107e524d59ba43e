//! Docnav CLI - emit, check, and inspect documentation sidebars

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use docnav_sidebar::{defaults, flatten, parser, writer, FlatEntry, Sidebars};
use tracing::info;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Navigation sidebar configuration for the documentation site")]
struct Cli {
    /// Sidebar definition file (built-in definition if omitted)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sidebars in the representation the site builder consumes
    Emit {
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a sidebar definition
    Check,
    /// Print the sidebar outline in render order
    List {
        /// Only print the sidebar with this name
        #[arg(long)]
        sidebar: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docnav=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let sidebars = load_sidebars(cli.file.as_deref())?;

    match cli.command {
        Commands::Emit { out } => emit(&sidebars, out.as_deref()),
        Commands::Check => check(&sidebars),
        Commands::List { sidebar } => list(&sidebars, sidebar.as_deref()),
    }
}

fn load_sidebars(file: Option<&Path>) -> Result<Sidebars> {
    match file {
        Some(path) => Sidebars::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => Ok(defaults::default_sidebars()),
    }
}

fn emit(sidebars: &Sidebars, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            writer::save_to_file(sidebars, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let json = writer::to_json(sidebars)?;
            print!("{}", json);
        }
    }

    Ok(())
}

fn check(sidebars: &Sidebars) -> Result<()> {
    parser::validate_sidebars(sidebars)?;
    info!(
        "{} sidebar(s), {} document reference(s)",
        sidebars.len(),
        sidebars.doc_ids().len()
    );
    println!("ok");

    Ok(())
}

fn list(sidebars: &Sidebars, only: Option<&str>) -> Result<()> {
    let mut printed = 0;
    for (name, entries) in sidebars.iter() {
        if only.is_some_and(|n| n != name.as_str()) {
            continue;
        }

        println!("{}", name);
        for item in flatten(entries) {
            match item {
                FlatEntry::Doc { id, depth } => {
                    println!("{}- {}", "  ".repeat(depth + 1), id);
                }
                FlatEntry::Category { label, depth } => {
                    println!("{}+ {}", "  ".repeat(depth + 1), label);
                }
            }
        }
        printed += 1;
    }

    if printed == 0 {
        if let Some(name) = only {
            bail!("no sidebar named '{}'", name);
        }
    }

    Ok(())
}
