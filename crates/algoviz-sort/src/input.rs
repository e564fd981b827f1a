//! Building the sequence to sort: user input parsing and random generation.

use std::ops::RangeInclusive;

use algoviz_core::{Error, Result};
use rand::Rng;

/// Shortest sequence worth sorting.
pub const MIN_LEN: usize = 2;

/// Length range of a randomly generated sequence.
pub const RANDOM_LEN: RangeInclusive<usize> = 15..=70;

/// Value range of a randomly generated sequence.
pub const RANDOM_VALUE: RangeInclusive<i64> = 20..=400;

/// Reject sequences shorter than [`MIN_LEN`].
pub fn check_len(len: usize) -> Result<()> {
    if len < MIN_LEN {
        return Err(Error::InvalidInput(format!(
            "need at least {MIN_LEN} values, got {len}"
        )));
    }
    Ok(())
}

/// Parse a comma-separated list of integers such as `"5, 3, 8, 1"`.
///
/// Whitespace around tokens is ignored. Any token that is not an integer,
/// or fewer than [`MIN_LEN`] values, is [`Error::InvalidInput`].
pub fn parse_values(input: &str) -> Result<Vec<i64>> {
    let values = input
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<i64>()
                .map_err(|_| Error::InvalidInput(format!("{tok:?} is not a number")))
        })
        .collect::<Result<Vec<_>>>()?;
    check_len(values.len())?;
    Ok(values)
}

/// Generate a random sequence with a length in [`RANDOM_LEN`] and values in
/// [`RANDOM_VALUE`].
pub fn random_values(rng: &mut impl Rng) -> Vec<i64> {
    let len = rng.random_range(RANDOM_LEN);
    (0..len).map(|_| rng.random_range(RANDOM_VALUE)).collect()
}
