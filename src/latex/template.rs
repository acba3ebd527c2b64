//! `$name` placeholder templates.
//!
//! Syntax: `$name` or `${name}` is replaced by the field value, `$$` is a
//! literal dollar sign. Values are inserted verbatim and never re-scanned.

use crate::error::{Error, Result};
use regex::Regex;

const PLACEHOLDER_PATTERN: &str = r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))";

/// A compiled substitution template.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    placeholder: Regex,
}

impl Template {
    /// Create a template from its source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            placeholder: Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"),
        }
    }

    /// Template source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of all placeholders, in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        self.placeholder
            .captures_iter(&self.source)
            .filter_map(|caps| caps.name("named").or_else(|| caps.name("braced")))
            .map(|m| m.as_str())
            .collect()
    }

    /// Check that every placeholder is one of `known` and that no `$` dangles.
    pub fn validate(&self, known: &[&str]) -> Result<()> {
        for caps in self.placeholder.captures_iter(&self.source) {
            if let Some(invalid) = caps.name("invalid") {
                return Err(dangling(invalid.start()));
            }
            if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                if !known.contains(&name.as_str()) {
                    return Err(unknown(name.as_str()));
                }
            }
        }
        Ok(())
    }

    /// Substitute `fields` into the template.
    pub fn substitute(&self, fields: &[(&str, &str)]) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        let mut last = 0;

        for caps in self.placeholder.captures_iter(&self.source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&self.source[last..whole.start()]);

            if caps.name("escaped").is_some() {
                out.push('$');
            } else if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                let value = fields
                    .iter()
                    .find(|(key, _)| *key == name.as_str())
                    .map(|(_, value)| *value)
                    .ok_or_else(|| unknown(name.as_str()))?;
                out.push_str(value);
            } else {
                return Err(dangling(whole.start()));
            }

            last = whole.end();
        }

        out.push_str(&self.source[last..]);
        Ok(out)
    }
}

fn unknown(name: &str) -> Error {
    Error::Template(format!("unknown placeholder ${}", name))
}

fn dangling(offset: usize) -> Error {
    Error::Template(format!("invalid placeholder at offset {}", offset))
}
