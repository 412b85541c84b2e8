//! Palindrome check on the decimal text of a number.

use tracing::debug;

use crate::models::{CheckError, PalindromeReport, validate_digits};

/// Options for [`check_palindrome`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PalindromeOptions {
    /// Strip leading zeros before comparing (`"0"` stays `"0"`).
    pub normalize_leading_zeros: bool,
}

/// Returns `true` if `text` reads the same forwards and backwards.
///
/// Walks one cursor from the front and one from the back, stopping at the
/// first mismatch. Empty and single-character strings are palindromes.
pub fn is_palindrome(text: &str) -> bool {
    let mut chars = text.chars();
    loop {
        match (chars.next(), chars.next_back()) {
            (Some(front), Some(back)) if front != back => return false,
            (Some(_), Some(_)) => {}
            // Cursors met (odd length) or crossed (even length).
            _ => return true,
        }
    }
}

/// Validate `raw` as a non-negative integer and check its digits.
///
/// The comparison is on the text, not the value: `"010"` is a palindrome
/// unless leading zeros are normalized away.
pub fn check_palindrome(
    raw: &str,
    options: PalindromeOptions,
) -> Result<PalindromeReport, CheckError> {
    let digits = validate_digits(raw)?;
    let text = if options.normalize_leading_zeros {
        strip_leading_zeros(digits)
    } else {
        digits
    };

    let palindrome = is_palindrome(text);
    debug!(input = text, palindrome, "palindrome check");

    Ok(PalindromeReport {
        input: text.to_string(),
        palindrome,
    })
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert!(is_palindrome("121"));
        assert!(is_palindrome("12321"));
        assert!(!is_palindrome("123"));
    }

    #[test]
    fn empty_and_single_char() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("7"));
    }

    #[test]
    fn even_length() {
        assert!(is_palindrome("1221"));
        assert!(!is_palindrome("1231"));
        assert!(!is_palindrome("12"));
    }

    #[test]
    fn mismatch_only_in_middle_pair() {
        assert!(!is_palindrome("123421"));
    }

    #[test]
    fn matches_reversal_for_sampled_strings() {
        for n in 0u32..2_000 {
            let s = n.to_string();
            let reversed: String = s.chars().rev().collect();
            assert_eq!(is_palindrome(&s), s == reversed, "mismatch for {s}");
        }
    }

    #[test]
    fn multibyte_chars_compare_whole() {
        assert!(is_palindrome("aéa"));
        assert!(!is_palindrome("éa"));
    }

    #[test]
    fn check_accepts_surrounding_whitespace() {
        let report = check_palindrome(" 12321\n", PalindromeOptions::default()).unwrap();
        assert_eq!(report.input, "12321");
        assert!(report.palindrome);
    }

    #[test]
    fn check_rejects_non_numeric() {
        assert!(check_palindrome("abba", PalindromeOptions::default()).is_err());
        assert!(check_palindrome("", PalindromeOptions::default()).is_err());
        assert!(check_palindrome("-121", PalindromeOptions::default()).is_err());
    }

    #[test]
    fn check_handles_numbers_beyond_u64() {
        let big = "1234567890987654321234567890987654321";
        let report = check_palindrome(big, PalindromeOptions::default()).unwrap();
        assert!(report.palindrome);
    }

    #[test]
    fn leading_zeros_are_significant_by_default() {
        let report = check_palindrome("0121", PalindromeOptions::default()).unwrap();
        assert!(!report.palindrome);
        let report = check_palindrome("010", PalindromeOptions::default()).unwrap();
        assert!(report.palindrome);
    }

    #[test]
    fn normalization_strips_leading_zeros() {
        let opts = PalindromeOptions { normalize_leading_zeros: true };
        let report = check_palindrome("0121", opts).unwrap();
        assert_eq!(report.input, "121");
        assert!(report.palindrome);

        let report = check_palindrome("010", opts).unwrap();
        assert_eq!(report.input, "10");
        assert!(!report.palindrome);

        let report = check_palindrome("000", opts).unwrap();
        assert_eq!(report.input, "0");
        assert!(report.palindrome);
    }

    #[test]
    fn repeated_checks_are_identical() {
        let first = check_palindrome("4554", PalindromeOptions::default()).unwrap();
        let second = check_palindrome("4554", PalindromeOptions::default()).unwrap();
        assert_eq!(first, second);
    }
}
