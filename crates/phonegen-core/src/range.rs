//! Exhaustive generation over a numeric range.
//!
//! Produces every number between two bounds (inclusive), shuffled. Useful
//! when a block of real numbering space must be covered exactly once.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::constants::{MAX_RANGE_LEN, RANGE_WARN_THRESHOLD};
use crate::error::PhoneGenError;
use crate::number::PhoneNumber;

/// Count of values in `[start, end]`.
pub fn range_len(start: u64, end: u64) -> Result<u64, PhoneGenError> {
    if start > end {
        return Err(PhoneGenError::InvalidRange { start, end });
    }
    Ok((end - start).saturating_add(1))
}

/// Every number in `[start, end]`, in random order.
pub fn generate_range<R: Rng + ?Sized>(
    start: u64,
    end: u64,
    rng: &mut R,
) -> Result<Vec<PhoneNumber>, PhoneGenError> {
    let len = range_len(start, end)?;
    let len = usize::try_from(len)
        .ok()
        .filter(|n| *n <= MAX_RANGE_LEN)
        .ok_or(PhoneGenError::RangeTooLarge {
            len,
            max: MAX_RANGE_LEN,
        })?;
    if len > RANGE_WARN_THRESHOLD {
        warn!(len, "Large range requested; expect high memory use");
    }

    let mut numbers: Vec<PhoneNumber> = (start..=end).map(PhoneNumber::from_value).collect();
    numbers.shuffle(rng);
    Ok(numbers)
}
