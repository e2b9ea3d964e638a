use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::{Error, Result};
use crate::template::TemplateRegistry;

pub const CONFIG_FILE: &str = ".metadocker.yaml";

/// Load `.metadocker.yaml` from `dir`, falling back to defaults when absent.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| Error::Io {
        action: "read",
        path: path.clone(),
        source,
    })?;
    parse(&contents, path)
}

fn parse(contents: &str, path: PathBuf) -> Result<Config> {
    // An empty file deserializes to unit, not a mapping.
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(contents).map_err(|source| Error::Config { path, source })
}

/// Bundled templates plus the project's `templates_dir`, if configured.
pub fn templates(cfg: &Config, dir: &Path) -> anyhow::Result<TemplateRegistry> {
    let mut registry = TemplateRegistry::builtin();
    if let Some(extra) = &cfg.templates_dir {
        let extra = dir.join(extra);
        let loaded = registry.load_dir(&extra)?;
        tracing::debug!(dir = %extra.display(), loaded, "loaded project templates");
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "\n").unwrap();
        assert_eq!(load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "engine: podman\nhost_port: 9999\nbrowser: open -a \"Google Chrome\"\n",
        )
        .unwrap();
        let cfg = load(dir.path()).unwrap();
        assert_eq!(cfg.engine, "podman");
        assert_eq!(cfg.host_port, 9999);
        assert_eq!(cfg.browser.as_deref(), Some("open -a \"Google Chrome\""));
        assert_eq!(cfg.python_version, "3.9");
        assert_eq!(cfg.build_file, "Dockerfile");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "enigne: podman\n").unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn zero_token_length_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "token_length: 0\n").unwrap();
        let err = load(dir.path()).unwrap_err();
        match &err {
            Error::Config { path, source } => {
                assert_eq!(path, &dir.path().join(CONFIG_FILE));
                assert!(source.to_string().contains("nonzero"), "{source}");
            }
            other => panic!("expected Config, got: {other:?}"),
        }
    }

    #[test]
    fn unreadable_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), [0xff, 0xfe, 0x00]).unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io { action: "read", .. }));
        assert!(err.to_string().contains(CONFIG_FILE), "{err}");
    }

    #[test]
    fn defaults_match_template_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.template_vars(), crate::template::TemplateVars::default());
        assert_eq!(cfg.host_port, 8888);
        assert_eq!(cfg.token_length.get(), 20);
    }

    #[test]
    fn templates_dir_is_relative_to_project() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("tpl")).unwrap();
        std::fs::write(dir.path().join("tpl/r.Dockerfile"), "FROM r-base\n").unwrap();
        let cfg = Config {
            templates_dir: Some("tpl".into()),
            ..Config::default()
        };
        let registry = templates(&cfg, dir.path()).unwrap();
        assert_eq!(registry.get("r").unwrap(), "FROM r-base\n");
        assert!(registry.get("jupyter").is_ok());
    }
}
