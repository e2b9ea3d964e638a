mod loader;
mod types;

pub use loader::{CONFIG_FILE, load, templates};
pub use types::Config;
