use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use metadocker::cli::Cli;
use metadocker::docker::SystemLauncher;
use metadocker::{Project, config, logging};

fn main() {
    logging::initialize_tracing();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let dir = project_dir(cli.directory)?;

    let cfg = config::load(&dir)?;
    let templates = config::templates(&cfg, &dir)?;
    let mut project = Project::new(dir, cfg, templates, SystemLauncher);

    let mut rng = rand::thread_rng();
    cli.command.execute(&mut project, &mut rng, &mut std::io::stdout())
}

/// Absolute project directory; the image name depends on the full path.
fn project_dir(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(dir) => std::fs::canonicalize(&dir)
            .with_context(|| format!("cannot resolve project directory {}", dir.display())),
        None => std::env::current_dir().context("cannot determine current directory"),
    }
}
