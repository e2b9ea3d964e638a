use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::docker::engine::DEFAULT_BUILD_FILE;
use crate::template::TemplateVars;
use crate::token::DEFAULT_TOKEN_LENGTH;

/// Per-project settings, read from `.metadocker.yaml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Container engine executable (`docker`, `podman`, ...).
    pub engine: String,
    pub image_prefix: String,
    /// Build-file name inside the project directory.
    pub build_file: String,
    pub template: String,
    /// Extra `<name>.Dockerfile` templates, relative to the project directory.
    pub templates_dir: Option<String>,
    pub python_version: String,
    pub python_modules: String,
    pub host_port: u16,
    /// Notebook token length; must be nonzero.
    pub token_length: NonZeroUsize,
    pub open_browser: bool,
    /// Browser command line; the URL is appended. Platform default when unset.
    pub browser: Option<String>,
    /// Seconds to wait before opening the browser.
    pub browser_delay: u64,
}

impl Default for Config {
    fn default() -> Self {
        let vars = TemplateVars::default();
        Self {
            engine: "docker".to_string(),
            image_prefix: "metadocker".to_string(),
            build_file: DEFAULT_BUILD_FILE.to_string(),
            template: "jupyter".to_string(),
            templates_dir: None,
            python_version: vars.python_version,
            python_modules: vars.python_modules,
            host_port: 8888,
            token_length: DEFAULT_TOKEN_LENGTH,
            open_browser: true,
            browser: None,
            browser_delay: 7,
        }
    }
}

impl Config {
    /// Template values unless overridden on the command line.
    pub fn template_vars(&self) -> TemplateVars {
        TemplateVars {
            python_version: self.python_version.clone(),
            python_modules: self.python_modules.clone(),
        }
    }
}
