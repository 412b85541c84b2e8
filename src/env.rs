//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config layering can be
//! exercised without touching the process environment.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Read a boolean switch.
    ///
    /// Returns `None` when the variable is absent, `Some(Err(raw))` when it
    /// is present but not one of the recognised spellings.
    pub fn flag(&self, name: &str) -> Option<Result<bool, String>> {
        let val = self.var(name).ok()?;
        Some(match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(val),
        })
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
