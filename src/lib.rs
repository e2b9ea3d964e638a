pub mod browser;
pub mod cli;
pub mod config;
pub mod docker;
pub mod error;
pub mod logging;
pub mod naming;
pub mod project;
pub mod template;
pub mod token;

pub use error::{Error, Result};
pub use naming::ImageName;
pub use project::Project;
