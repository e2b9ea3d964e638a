use std::path::PathBuf;

/// Failures surfaced by the library before any engine process is launched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("there is no template named '{name}' (available: {available})")]
    UnknownTemplate { name: String, available: String },

    #[error("template '{template}' uses unknown placeholder '{{{{ {placeholder} }}}}'")]
    UnknownPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("{} not found; run `metadocker init` to create one", .0.display())]
    BuildFileNotFound(PathBuf),

    #[error("'exec' expects at least one argument to run inside the container")]
    EmptyCommand,

    #[error("cannot derive an image name from directory {}", .0.display())]
    UnnamedDirectory(PathBuf),

    #[error("invalid config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
