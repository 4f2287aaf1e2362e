//! Building working collections from user input or randomization.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::error::{Error, Result};

/// Parse a single number. Anything non-numeric becomes 0.
pub fn parse_value(text: &str) -> i64 {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(_) => match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => value.trunc() as i64,
            _ => {
                warn!(input = trimmed, "non-numeric input coerced to 0");
                0
            }
        },
    }
}

/// Parse a comma- or whitespace-separated list of numbers.
///
/// Empty fields are skipped; non-numeric fields become 0.
pub fn parse_collection(text: &str) -> Vec<i64> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .map(parse_value)
        .collect()
}

/// Generate `len` values uniformly drawn from `min..=max`.
///
/// The same seed always produces the same collection.
pub fn random_collection(len: usize, min: i64, max: i64, seed: u64) -> Result<Vec<i64>> {
    if min > max {
        return Err(Error::InvalidInput(format!(
            "empty range {min}..={max}"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..len).map(|_| rng.gen_range(min..=max)).collect())
}

/// Reject collections longer than `max_len`.
pub fn check_len<T>(values: &[T], max_len: usize) -> Result<()> {
    check_count(values.len(), max_len)
}

/// Reject a requested element count above `max_len` before anything is
/// allocated for it.
pub fn check_count(count: usize, max_len: usize) -> Result<()> {
    if count > max_len {
        Err(Error::InvalidInput(format!(
            "collection has {count} elements, at most {max_len} allowed"
        )))
    } else {
        Ok(())
    }
}

/// Check that a structure holding `len` elements may take one more.
pub fn check_room(structure: &'static str, len: usize, max_len: usize) -> Result<()> {
    if len >= max_len {
        Err(Error::Overflow {
            structure,
            capacity: max_len,
        })
    } else {
        Ok(())
    }
}

/// Check a requested table capacity against `max_capacity`.
pub fn check_capacity(capacity: usize, max_capacity: usize) -> Result<()> {
    if capacity == 0 || capacity > max_capacity {
        Err(Error::InvalidCapacity(capacity))
    } else {
        Ok(())
    }
}

/// Check that `index` addresses an existing element of a collection of `len`.
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Check that `index` is a valid insertion point (`0..=len`).
pub fn check_insert_index(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}
