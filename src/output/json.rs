//! JSON output renderer.
//!
//! Outputs the tagged report with its message, e.g.
//! `{"kind": "factors", "number": 7, "factors": [1, 7], "message": "..."}`.

use serde_json::json;

use crate::models::Report;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        let output = match report {
            Report::Palindrome(r) => json!({
                "kind": "palindrome",
                "input": r.input,
                "palindrome": r.palindrome,
                "message": r.message(),
            }),
            Report::Factors(r) => json!({
                "kind": "factors",
                "number": r.number,
                "factors": r.factors,
                "message": r.message(),
            }),
        };

        let mut rendered = serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FactorReport, PalindromeReport};

    #[test]
    fn render_palindrome_json() {
        let report = Report::from(PalindromeReport { input: "123".into(), palindrome: false });
        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&report)).unwrap();

        assert_eq!(parsed["kind"], "palindrome");
        assert_eq!(parsed["input"], "123");
        assert_eq!(parsed["palindrome"], false);
        assert_eq!(parsed["message"], "This given string is not a palindrome number");
    }

    #[test]
    fn json_fields_match_tagged_report() {
        let report = Report::from(FactorReport { number: 12, factors: vec![1, 2, 3, 4, 6, 12] });
        let rendered: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&report)).unwrap();
        let mut tagged = serde_json::to_value(&report).unwrap();
        tagged["message"] = "The factors of 12 are: 1, 2, 3, 4, 6, 12".into();
        assert_eq!(rendered, tagged);
    }

    #[test]
    fn render_factors_json() {
        let report = Report::from(FactorReport { number: 0, factors: vec![] });
        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&report)).unwrap();

        assert_eq!(parsed["kind"], "factors");
        assert_eq!(parsed["factors"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["message"], "The factors of 0 are: ");
    }
}
