//! Shared types used across all modules.
//!
//! Defines the input validation rules, the single error kind the
//! computations can raise, the selectable enums, and the report types
//! that renderers consume.

pub mod report;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use report::{FactorReport, PalindromeReport, Report};

/// Why a piece of input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    NotDigits,
    OutOfRange,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Empty => write!(f, "no number was given"),
            InvalidReason::NotDigits => {
                write!(f, "expected a non-negative integer (digits 0-9 only)")
            }
            InvalidReason::OutOfRange => write!(f, "number is larger than {}", u64::MAX),
        }
    }
}

/// Error raised by the computations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: InvalidReason },
}

impl CheckError {
    fn invalid(input: &str, reason: InvalidReason) -> Self {
        CheckError::InvalidInput {
            input: input.to_string(),
            reason,
        }
    }
}

/// Validate that `raw` is the decimal text of a non-negative integer.
///
/// Surrounding whitespace is trimmed; what remains must be non-empty and
/// ASCII digits only. Returns the trimmed slice. No magnitude bound.
pub fn validate_digits(raw: &str) -> Result<&str, CheckError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CheckError::invalid(raw, InvalidReason::Empty));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CheckError::invalid(text, InvalidReason::NotDigits));
    }
    Ok(text)
}

/// Parse `raw` into a `u64` after [`validate_digits`].
pub fn parse_number(raw: &str) -> Result<u64, CheckError> {
    let text = validate_digits(raw)?;
    // Only overflow can fail here; the digits were checked above.
    text.parse::<u64>()
        .map_err(|_| CheckError::invalid(text, InvalidReason::OutOfRange))
}

/// Divisor search strategy for the factor enumerator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Test every candidate from 1 to N.
    Trial,
    /// Test candidates up to √N and pair each hit with its cofactor.
    #[default]
    Sqrt,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Trial => write!(f, "trial"),
            Strategy::Sqrt => write!(f, "sqrt"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trial" => Ok(Strategy::Trial),
            "sqrt" => Ok(Strategy::Sqrt),
            other => Err(format!("unknown strategy: '{other}'. Supported: trial, sqrt")),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format: '{other}'. Supported: terminal, json")),
        }
    }
}
