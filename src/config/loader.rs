//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.numcheck.toml` in the working directory (or `--config PATH`)
//! 4. `~/.config/numcheck/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, ENV_FORMAT, ENV_NORMALIZE, ENV_STRATEGY};
use crate::env::Env;
use crate::models::{OutputFormat, Strategy};
use crate::palindrome::PalindromeOptions;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub palindrome: PalindromeConfig,
    pub factors: FactorsConfig,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Palindrome checker settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PalindromeConfig {
    /// Compare `0121` as `121`.
    pub normalize_leading_zeros: bool,
}

/// Factor enumerator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorsConfig {
    pub strategy: Strategy,
}

/// One config file as written: only the keys it sets are `Some`.
///
/// Applied on top of lower layers, so a file can set a value back to its
/// default (e.g. `format = "terminal"` over a global `"json"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub output: OutputLayer,
    pub palindrome: PalindromeLayer,
    pub factors: FactorsLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputLayer {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PalindromeLayer {
    pub normalize_leading_zeros: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactorsLayer {
    pub strategy: Option<Strategy>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the working-directory file and must exist.
    /// `local_dir` is searched for `.numcheck.toml` otherwise.
    pub fn load(
        local_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), local_dir, explicit, env)
    }

    /// [`Config::load`] with the global config path supplied by the caller.
    pub fn load_layers(
        global: Option<&Path>,
        local_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                config.apply(Self::load_file(global_path)?);
            }
        }

        // Layer 3: explicit or working-directory config
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            config.apply(Self::load_file(path)?);
        } else if let Some(dir) = local_dir {
            let local_path = dir.join(CONFIG_FILENAME);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                config.apply(Self::load_file(&local_path)?);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a single config file as a layer.
    pub fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Apply every key the layer sets, default values included.
    fn apply(&mut self, layer: ConfigLayer) {
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
        if let Some(normalize) = layer.palindrome.normalize_leading_zeros {
            self.palindrome.normalize_leading_zeros = normalize;
        }
        if let Some(strategy) = layer.factors.strategy {
            self.factors.strategy = strategy;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => warn!("ignoring invalid {ENV_FORMAT} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_STRATEGY) {
            match val.parse::<Strategy>() {
                Ok(strategy) => self.factors.strategy = strategy,
                Err(_) => warn!("ignoring invalid {ENV_STRATEGY} value: {val}"),
            }
        }
        match env.flag(ENV_NORMALIZE) {
            Some(Ok(on)) => self.palindrome.normalize_leading_zeros = on,
            Some(Err(val)) => warn!("ignoring invalid {ENV_NORMALIZE} value: {val}"),
            None => {}
        }
    }

    /// Palindrome options derived from this config.
    pub fn palindrome_options(&self) -> PalindromeOptions {
        PalindromeOptions {
            normalize_leading_zeros: self.palindrome.normalize_leading_zeros,
        }
    }
}
