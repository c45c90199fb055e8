//! Minimal `{placeholder}` templates
//!
//! A template is plain text with `{name}` placeholders. Values are recorded
//! with [`Template::set_var`] and substituted on [`Template::render`].
//! Placeholders without a value are left as they are.

use crate::result::{CovError, CovResult};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::Path;

const PLACEHOLDER: &str = r"\{([A-Za-z0-9_]+)\}";

/// Text template with named placeholders
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    placeholder: Regex,
    vars: HashMap<String, String>,
}

impl Template {
    /// Create a template from text
    pub fn new(source: impl Into<String>) -> CovResult<Self> {
        let placeholder =
            Regex::new(PLACEHOLDER).map_err(|e| CovError::template(e.to_string()))?;
        Ok(Self {
            source: source.into(),
            placeholder,
            vars: HashMap::new(),
        })
    }

    /// Record the value for `{key}`
    pub fn set_var(&mut self, key: &str, value: impl ToString) {
        let _ = self.vars.insert(key.to_string(), value.to_string());
    }

    /// Substitute recorded values
    #[must_use]
    pub fn render(&self) -> String {
        self.placeholder
            .replace_all(&self.source, |caps: &Captures<'_>| {
                self.vars
                    .get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Render and write to `path`
    pub fn render_to(&self, path: &Path) -> CovResult<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}
