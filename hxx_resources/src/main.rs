//! hxx-resources: write a `.hxx` array literal next to every file in a `resources` directory
//!
//! Usage: hxx-resources [ROOT]

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Embed resource files as C array literals
#[derive(Parser, Debug)]
#[command(name = "hxx-resources")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to search for `resources` directories [default: the directory containing this executable]
    root: Option<PathBuf>,
}

/// Directory the executable lives in, so a checked-in copy embeds its own tree.
fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("couldn't locate this executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("executable '{}' has no parent directory", exe.display()))
}

fn main() -> Result<()> {
    // stdout carries the progress lines, everything else goes to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => install_dir()?,
    };
    let config = hxx_resources::EmbedConfig::new(root);

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = hxx_resources::run(&config, &mut stdout) {
        error!(root = %config.root.display(), "regenerating resource literals failed: {err:#}");
        return Err(err);
    }
    stdout.flush()?;
    Ok(())
}
