//! Terminal renderer: the result message with a colored marker.

use colored::Colorize;

use crate::models::Report;
use crate::output::OutputRenderer;

/// Terminal output renderer.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, report: &Report) -> String {
        let message = report.message();
        let marker = match report {
            Report::Palindrome(r) if !r.palindrome => "✖".yellow().bold(),
            Report::Factors(r) if r.factors.is_empty() => "ℹ".blue().bold(),
            _ => "✔".green().bold(),
        };
        format!(" {marker} {message}\n")
    }
}
