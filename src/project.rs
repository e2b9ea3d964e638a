//! The six verbs, applied to one project directory.
//!
//! Every operation builds at most one engine invocation (two for `run`) and
//! hands it to a [`Launcher`]; nothing here spawns processes directly.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;

use crate::browser;
use crate::config::Config;
use crate::docker::{self, Launcher, Status};
use crate::error::Error;
use crate::naming::ImageName;
use crate::template::{TemplateRegistry, TemplateVars};
use crate::token::generate_token;

/// Overrides for `init`; unset fields fall back to the config.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub template: Option<String>,
    pub python_version: Option<String>,
    pub python_modules: Option<String>,
}

/// Overrides for `run`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub host_port: Option<u16>,
    pub no_browser: bool,
}

pub struct Project<L> {
    dir: PathBuf,
    config: Config,
    templates: TemplateRegistry,
    launcher: L,
}

impl<L: Launcher> Project<L> {
    /// `dir` should be absolute; it determines the image name.
    pub fn new(dir: PathBuf, config: Config, templates: TemplateRegistry, launcher: L) -> Self {
        Self {
            dir,
            config,
            templates,
            launcher,
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn build_file(&self) -> PathBuf {
        self.dir.join(&self.config.build_file)
    }

    pub fn image(&self) -> Result<ImageName, Error> {
        ImageName::derive(&self.config.image_prefix, &self.dir)
    }

    /// Render a template into the build file. Returns the path written.
    pub fn init(&self, opts: &InitOptions) -> Result<PathBuf, Error> {
        let template = opts.template.as_deref().unwrap_or(&self.config.template);
        let defaults = self.config.template_vars();
        let vars = TemplateVars {
            python_version: opts
                .python_version
                .clone()
                .unwrap_or(defaults.python_version),
            python_modules: opts
                .python_modules
                .clone()
                .unwrap_or(defaults.python_modules),
        };
        let contents = self.templates.render(template, &vars)?;

        let path = self.build_file();
        if path.exists() {
            tracing::warn!(path = %path.display(), "overwriting existing build file");
        }
        std::fs::write(&path, contents).map_err(|source| Error::Io {
            action: "write",
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), %template, "wrote build file");
        Ok(path)
    }

    pub fn build(&mut self) -> Result<Status> {
        let build_file = self.build_file();
        if !build_file.is_file() {
            return Err(Error::BuildFileNotFound(build_file).into());
        }
        let image = self.image()?;
        let cmd = docker::build_command(
            &self.config.engine,
            &image,
            &self.dir,
            &self.config.build_file,
        );
        self.launcher.run(&cmd)
    }

    /// Start the notebook container and, unless disabled, a browser pointed at it.
    pub fn run<R: Rng + ?Sized>(&mut self, opts: &RunOptions, rng: &mut R) -> Result<Status> {
        let image = self.image()?;
        let host_port = opts.host_port.unwrap_or(self.config.host_port);
        let token = generate_token(rng, self.config.token_length);

        let mut cmds = vec![docker::run_command(
            &self.config.engine,
            &image,
            &self.dir,
            host_port,
            &token,
        )];
        if self.config.open_browser && !opts.no_browser {
            let url = browser::notebook_url(host_port, &token);
            let delay = Duration::from_secs(self.config.browser_delay);
            cmds.push(browser::open_command(
                self.config.browser.as_deref(),
                &url,
                delay,
            )?);
        }

        let statuses = self.launcher.run_all(&cmds)?;
        Ok(Status::combine(&statuses))
    }

    /// Run `args`, joined with spaces, inside a fresh container.
    pub fn exec(&mut self, args: &[String]) -> Result<Status> {
        let line = args.join(" ");
        let argv =
            shell_words::split(&line).with_context(|| format!("cannot parse command: {line}"))?;
        if argv.is_empty() {
            return Err(Error::EmptyCommand.into());
        }
        let image = self.image()?;
        tracing::debug!(command = %line, "exec");
        let cmd = docker::exec_command(&self.config.engine, &image, &self.dir, &argv);
        self.launcher.run(&cmd)
    }

    pub fn remove(&mut self) -> Result<Status> {
        let image = self.image()?;
        let cmd = docker::remove_command(&self.config.engine, &image);
        self.launcher.run(&cmd)
    }
}
