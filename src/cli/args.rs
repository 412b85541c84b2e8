//! Clap argument types and flag/config resolution.

use clap::Parser;
use std::path::PathBuf;

use numcheck::config::Config;
use numcheck::models::{OutputFormat, Strategy};
use numcheck::palindrome::PalindromeOptions;

/// Palindrome and factor checks for numbers.
#[derive(Parser, Debug)]
#[command(name = "numcheck", version = numcheck::constants::VERSION)]
pub struct Cli {
    /// Output format (overrides config and NUMCHECK_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of ./.numcheck.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Check whether a number's digits read the same both ways.
    Palindrome(PalindromeArgs),

    /// List every positive integer that divides a number.
    Factors(FactorsArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `palindrome` subcommand.
#[derive(Parser, Debug)]
pub struct PalindromeArgs {
    /// The number to check. Prompted for on stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Ignore leading zeros (`0121` is checked as `121`).
    #[arg(long, default_value_t = false)]
    pub normalize: bool,
}

/// Arguments for the `factors` subcommand.
#[derive(Parser, Debug)]
pub struct FactorsArgs {
    /// The number to factor. Prompted for on stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Divisor search strategy.
    #[arg(long)]
    pub strategy: Option<Strategy>,
}

impl Cli {
    /// Output format: flag first, then config.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }
}

impl PalindromeArgs {
    /// `--normalize` can only switch normalization on.
    pub fn options(&self, config: &Config) -> PalindromeOptions {
        let mut options = config.palindrome_options();
        if self.normalize {
            options.normalize_leading_zeros = true;
        }
        options
    }
}

impl FactorsArgs {
    pub fn strategy(&self, config: &Config) -> Strategy {
        self.strategy.unwrap_or(config.factors.strategy)
    }
}
