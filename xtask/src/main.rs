//! Build automation tasks for POCKET2D
//!
//! Usage:
//!   cargo xtask ci                    # Run the test suite for the workspace
//!   cargo xtask check-rules <files>   # Validate runtime configs and their layout rules
//!   cargo xtask default-config <out>  # Write the built-in config as a starting point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pocket2d::config::{load_config, save_config, RuntimeConfig};
use pocket2d::ui::layout::{LayoutState, ScreenSize};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for POCKET2D")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all workspace tests
    Ci,
    /// Parse config files and print each element's size per screen size
    CheckRules {
        /// RON config files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Container width used for the size table
        #[arg(long, default_value_t = 1200.0)]
        width: f32,
    },
    /// Write the default runtime config
    DefaultConfig {
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => ci(),
        Commands::CheckRules { files, width } => check_rules(&files, width),
        Commands::DefaultConfig { out } => default_config(&out),
    }
}

/// Get the project root directory
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

fn ci() -> Result<()> {
    println!("Running tests...");
    run_cmd(
        Command::new("cargo")
            .current_dir(project_root())
            .args(["test", "--workspace"]),
    )
}

fn check_rules(files: &[PathBuf], width: f32) -> Result<()> {
    let mut failed = 0;

    for path in files {
        let config = match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                println!("{}: {}", path.display(), e);
                failed += 1;
                continue;
            }
        };
        let nodes = config
            .build_nodes()
            .with_context(|| format!("{} passed validation but failed to build", path.display()))?;

        println!("{}: {} elements", path.display(), nodes.len());
        for node in &nodes {
            let sizes: Vec<String> = ScreenSize::smallest_to_largest()
                .map(|size| {
                    let state = LayoutState::new(size, width)
                        .with_columns(config.layout.total_columns);
                    let resolved = node.horizontal.resolve(&state);
                    format!("{}={}+{}", size, resolved.size, resolved.offset)
                })
                .collect();
            println!("  {:<16} {}", node.id, sizes.join(" "));
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} configs failed", failed, files.len());
    }
    Ok(())
}

fn default_config(out: &Path) -> Result<()> {
    save_config(&RuntimeConfig::default(), out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
