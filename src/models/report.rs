//! Result types produced by the two computations.

use serde::Serialize;

use crate::constants::{MSG_NOT_PALINDROME, MSG_PALINDROME};

/// Outcome of a palindrome check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalindromeReport {
    /// The text that was compared (after trimming and any normalization).
    pub input: String,
    pub palindrome: bool,
}

impl PalindromeReport {
    /// The fixed message selected by the result.
    pub fn message(&self) -> &'static str {
        if self.palindrome {
            MSG_PALINDROME
        } else {
            MSG_NOT_PALINDROME
        }
    }
}

/// Outcome of a factor enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorReport {
    pub number: u64,
    /// Ascending, duplicate-free divisors of `number`.
    pub factors: Vec<u64>,
}

impl FactorReport {
    /// `The factors of N are: a, b, c`.
    pub fn message(&self) -> String {
        let joined = self
            .factors
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("The factors of {} are: {joined}", self.number)
    }
}

/// Either report, as handed to an output renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Palindrome(PalindromeReport),
    Factors(FactorReport),
}

impl Report {
    pub fn message(&self) -> String {
        match self {
            Report::Palindrome(r) => r.message().to_string(),
            Report::Factors(r) => r.message(),
        }
    }
}

impl From<PalindromeReport> for Report {
    fn from(r: PalindromeReport) -> Self {
        Report::Palindrome(r)
    }
}

impl From<FactorReport> for Report {
    fn from(r: FactorReport) -> Self {
        Report::Factors(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindrome_message_variants() {
        let yes = PalindromeReport { input: "121".into(), palindrome: true };
        let no = PalindromeReport { input: "123".into(), palindrome: false };
        assert_eq!(yes.message(), "This given string is a palindrome number");
        assert_eq!(no.message(), "This given string is not a palindrome number");
    }

    #[test]
    fn factor_message_joins_with_comma_space() {
        let r = FactorReport { number: 12, factors: vec![1, 2, 3, 4, 6, 12] };
        assert_eq!(r.message(), "The factors of 12 are: 1, 2, 3, 4, 6, 12");
    }

    #[test]
    fn factor_message_for_zero_has_empty_list() {
        let r = FactorReport { number: 0, factors: vec![] };
        assert_eq!(r.message(), "The factors of 0 are: ");
    }

    #[test]
    fn report_serializes_with_kind_tag() {
        let report = Report::from(FactorReport { number: 7, factors: vec![1, 7] });
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["kind"], "factors");
        assert_eq!(value["number"], 7);
        assert_eq!(value["factors"], serde_json::json!([1, 7]));
    }
}
