// Build-file templates: bundled registry and placeholder rendering.

mod registry;
mod render;

pub use registry::TemplateRegistry;
pub use render::{TemplateVars, render};
