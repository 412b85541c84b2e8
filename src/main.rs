//! numcheck — palindrome and factor checks for numbers.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use numcheck::config::Config;
use numcheck::constants;
use numcheck::env::Env;
use numcheck::factors;
use numcheck::logging;
use numcheck::models::{OutputFormat, Report};
use numcheck::output;
use numcheck::palindrome;
use numcheck::prompt;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::args::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();
    logging::init(cli.verbose, &env);

    match &cli.command {
        Command::Palindrome(args) => {
            let config = load_config(&cli, &env)?;
            let raw = acquire_value(args.value.clone())?;
            let options = args.options(&config);
            info!(normalize = options.normalize_leading_zeros, "checking palindrome");

            let report = palindrome::check_palindrome(&raw, options)
                .context("palindrome check failed")?;
            emit(cli.output_format(&config), &report.into());
            Ok(())
        }
        Command::Factors(args) => {
            let config = load_config(&cli, &env)?;
            let raw = acquire_value(args.value.clone())?;
            let strategy = args.strategy(&config);
            info!(%strategy, "enumerating factors");

            let report = factors::enumerate_factors(&raw, strategy)
                .context("factor enumeration failed")?;
            emit(cli.output_format(&config), &report.into());
            Ok(())
        }
        Command::Version => run_version(),
    }
}

/// Load layered config, with `./.numcheck.toml` as the local layer.
fn load_config(cli: &Cli, env: &Env) -> Result<Config> {
    let cwd = std::env::current_dir().ok();
    Config::load(cwd.as_deref(), cli.config.as_deref(), env)
        .context("failed to load configuration")
}

/// Use the value given on the command line, or prompt for one.
fn acquire_value(value: Option<String>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut stderr = std::io::stderr();
    prompt::read_value(&mut reader, &mut stderr, constants::PROMPT)
        .context("failed to read a number from stdin")
}

fn emit(format: OutputFormat, report: &Report) {
    print!("{}", output::render(format, report));
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    if let Some(global) = Config::global_config_path() {
        println!("{}     {}", "config:".dimmed(), display_path(&global));
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not present)", path.display())
    }
}
