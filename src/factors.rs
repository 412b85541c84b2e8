//! Factor enumeration by trial division.

use tracing::debug;

use crate::models::{CheckError, FactorReport, Strategy, parse_number};

/// All positive divisors of `n`, ascending. Empty for `n == 0`.
pub fn factors(n: u64, strategy: Strategy) -> Vec<u64> {
    match strategy {
        Strategy::Trial => (1..=n).filter(|i| n % i == 0).collect(),
        Strategy::Sqrt => factors_sqrt(n),
    }
}

/// Divisors found in pairs `(i, n / i)` for `i <= √n`.
fn factors_sqrt(n: u64) -> Vec<u64> {
    let mut low = Vec::new();
    let mut high = Vec::new();

    let mut i: u64 = 1;
    // `i <= n / i` avoids overflowing `i * i` near u64::MAX.
    while i <= n / i {
        if n % i == 0 {
            low.push(i);
            let pair = n / i;
            if pair != i {
                high.push(pair);
            }
        }
        i += 1;
    }

    low.extend(high.into_iter().rev());
    low
}

/// Validate `raw` as a `u64` and list its divisors.
pub fn enumerate_factors(raw: &str, strategy: Strategy) -> Result<FactorReport, CheckError> {
    let number = parse_number(raw)?;
    let factors = factors(number, strategy);
    debug!(number, %strategy, count = factors.len(), "factor enumeration");

    Ok(FactorReport { number, factors })
}
