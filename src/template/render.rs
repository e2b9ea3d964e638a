use crate::error::{Error, Result};

pub const DEFAULT_PYTHON_VERSION: &str = "3.9";
pub const DEFAULT_PYTHON_MODULES: &str = "numpy matplotlib pandas scipy";

/// Values substituted into a build-file template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    pub python_version: String,
    pub python_modules: String,
}

impl Default for TemplateVars {
    fn default() -> Self {
        Self {
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            python_modules: DEFAULT_PYTHON_MODULES.to_string(),
        }
    }
}

impl TemplateVars {
    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "python_version" => Some(&self.python_version),
            "python_modules" => Some(&self.python_modules),
            _ => None,
        }
    }
}

/// Replace every `{{ key }}` marker in `text`.
///
/// Whitespace inside the braces is ignored. A marker naming anything other
/// than a [`TemplateVars`] field is an error; an unterminated `{{` is copied
/// through as text.
pub fn render(template: &str, text: &str, vars: &TemplateVars) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        let Some(close) = rest[open + 2..].find("}}") else {
            break;
        };
        let key = rest[open + 2..open + 2 + close].trim();
        let value = vars.lookup(key).ok_or_else(|| Error::UnknownPlaceholder {
            template: template.to_string(),
            placeholder: key.to_string(),
        })?;
        out.push_str(&rest[..open]);
        out.push_str(value);
        rest = &rest[open + 2 + close + 2..];
    }

    out.push_str(rest);
    Ok(out)
}
