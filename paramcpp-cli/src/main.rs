use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use paramcpp_codegen::WrapperEmitter;

#[derive(Parser)]
#[command(
    name = "paramcpp",
    about = "Write the parameter_wrapper.h / parameter_wrapper.cpp skeleton"
)]
#[command(version)]
struct Cli {
    /// Directory of parameter definitions (currently unused)
    source_dir: PathBuf,
    /// Directory the two C++ files are written to; must already exist
    dest_dir: PathBuf,
    /// JSON parameter input (currently unused)
    jsons: String,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli.source_dir, &cli.dest_dir, &cli.jsons) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(source_dir: &Path, dest_dir: &Path, jsons: &str) -> Result<()> {
    println!("source_dir {}", source_dir.display());
    println!("dest_dir {}", dest_dir.display());
    println!("jsons {}", jsons);

    let mut emitter = WrapperEmitter::new(source_dir, dest_dir)
        .with_context(|| format!("Failed to open output files in '{}'", dest_dir.display()))?;

    emitter
        .generate(jsons)
        .context("Failed to write parameter wrapper")?;

    let written: Vec<PathBuf> = emitter
        .output_paths()
        .iter()
        .map(|p| p.to_path_buf())
        .collect();

    emitter
        .close()
        .context("Failed to close output files")?;

    for path in &written {
        println!("  {} {}", "→".dimmed(), path.display());
    }
    tracing::info!(count = written.len(), "parameter wrapper generated");

    Ok(())
}
