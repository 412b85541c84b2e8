//! numcheck — palindrome and factor checks for numbers (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod factors;
pub mod logging;
pub mod models;
pub mod output;
pub mod palindrome;
pub mod prompt;
