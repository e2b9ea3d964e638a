use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use include_dir::{Dir, include_dir};
use walkdir::WalkDir;

use super::render::{TemplateVars, render};
use crate::error::{Error, Result};

static BUNDLED: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

const TEMPLATE_EXTENSION: &str = "Dockerfile";

/// Named build-file templates.
///
/// Passed explicitly to whoever renders a build file, so tests and users can
/// register their own templates next to (or instead of) the bundled ones.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, String>,
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the templates shipped in the binary (`jupyter`).
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for file in BUNDLED.files() {
            if let (Some(name), Some(text)) = (template_name(file.path()), file.contents_utf8()) {
                registry.insert(name, text);
            }
        }
        registry
    }

    /// Register `text` under `name`, replacing any template of that name.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(name.into(), text.into());
    }

    /// Register every `<name>.Dockerfile` directly inside `dir`.
    ///
    /// Returns the number of templates loaded.
    pub fn load_dir(&mut self, dir: &Path) -> anyhow::Result<usize> {
        let mut loaded = 0;
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("failed to list templates in {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = template_name(entry.path()) else {
                continue;
            };
            let text = std::fs::read_to_string(entry.path())
                .with_context(|| format!("failed to read template {}", entry.path().display()))?;
            tracing::debug!(%name, path = %entry.path().display(), "registered template");
            self.insert(name, text);
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Result<&str> {
        self.templates
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownTemplate {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Look up `name` and substitute `vars` into it.
    pub fn render(&self, name: &str, vars: &TemplateVars) -> Result<String> {
        render(name, self.get(name)?, vars)
    }
}

fn template_name(path: &Path) -> Option<String> {
    if path.extension()? != TEMPLATE_EXTENSION {
        return None;
    }
    Some(path.file_stem()?.to_string_lossy().into_owned())
}
