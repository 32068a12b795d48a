//! Workspace tasks: `cargo run -p lodview-xtask -- <command>`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lodview::options::Options;

#[derive(Parser)]
#[command(about = "lodview workspace tasks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default options as TOML.
    DefaultOptions {
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Parse and validate an options file.
    CheckOptions {
        /// TOML file to check.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::DefaultOptions { out } => default_options(out),
        Command::CheckOptions { path } => check_options(&path),
    }
}

fn default_options(out: Option<PathBuf>) -> Result<()> {
    let options = Options::default();
    match out {
        Some(path) => options
            .save(&path)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            let toml = options.to_toml()?;
            std::io::stdout().write_all(toml.as_bytes())?;
            Ok(())
        }
    }
}

fn check_options(path: &Path) -> Result<()> {
    let options =
        Options::load(path).with_context(|| format!("checking {}", path.display()))?;
    let lod = &options.lod;
    writeln!(
        std::io::stdout(),
        "{}: ok (medium at {}, low at {})",
        path.display(),
        lod.medium_distance,
        lod.low_distance
    )?;
    Ok(())
}
