//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and user-facing message text so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "numcheck";

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.numcheck.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".numcheck.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "numcheck";

/// Prompt shown when no value is given on the command line.
pub const PROMPT: &str = "Enter a number:";

// ── Messages ────────────────────────────────────────────────────────

pub const MSG_PALINDROME: &str = "This given string is a palindrome number";
pub const MSG_NOT_PALINDROME: &str = "This given string is not a palindrome number";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "NUMCHECK_FORMAT";
pub const ENV_STRATEGY: &str = "NUMCHECK_STRATEGY";
pub const ENV_NORMALIZE: &str = "NUMCHECK_NORMALIZE";
pub const ENV_LOG: &str = "NUMCHECK_LOG";
