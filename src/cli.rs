use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::Rng;

use crate::docker::Launcher;
use crate::project::{InitOptions, Project, RunOptions};

#[derive(Debug, Parser)]
#[command(
    name = "metadocker",
    version,
    about = "Automate the Docker workflow of a per-directory Jupyter project"
)]
pub struct Cli {
    /// Project directory (defaults to the current directory).
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new Dockerfile from a template.
    Init {
        /// Template name.
        #[arg(long)]
        template: Option<String>,
        /// Python version of the base image.
        #[arg(long = "python-version")]
        python_version: Option<String>,
        /// Space-separated python packages to install.
        #[arg(long)]
        modules: Option<String>,
    },
    /// Build the image for this directory from its Dockerfile.
    Build,
    /// Run the notebook container and open it in the browser.
    Run {
        /// Host port published for the notebook server.
        #[arg(short, long)]
        port: Option<u16>,
        /// Do not open a browser.
        #[arg(long)]
        no_browser: bool,
    },
    /// Run a command inside a fresh container.
    Exec {
        /// Command and arguments, joined with spaces.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Print the image name for this directory.
    Image,
    /// Remove the image for this directory.
    Remove,
}

impl Command {
    /// Dispatch to `project`. Returns the process exit code.
    ///
    /// `image` writes the derived name to `out`; every other verb relays the
    /// status of the engine process it launched.
    pub fn execute<L, R, W>(
        self,
        project: &mut Project<L>,
        rng: &mut R,
        out: &mut W,
    ) -> Result<i32>
    where
        L: Launcher,
        R: Rng + ?Sized,
        W: Write,
    {
        let status = match self {
            Command::Init {
                template,
                python_version,
                modules,
            } => {
                let opts = InitOptions {
                    template,
                    python_version,
                    python_modules: modules,
                };
                let path = project.init(&opts)?;
                writeln!(out, "Created {}", path.display())?;
                return Ok(0);
            }
            Command::Build => project.build()?,
            Command::Run { port, no_browser } => {
                let opts = RunOptions {
                    host_port: port,
                    no_browser,
                };
                project.run(&opts, rng)?
            }
            Command::Exec { command } => project.exec(&command)?,
            Command::Image => {
                writeln!(out, "{}", project.image()?)?;
                return Ok(0);
            }
            Command::Remove => project.remove()?,
        };
        Ok(status.exit_code())
    }
}
