//! Deduplicated random number generation.
//!
//! Each prefix receives an equal quota of `quantity / prefixes + 1` suffixes.
//! Suffix draws per prefix are capped at [`RETRY_FACTOR`] times the quota.
//! The pooled numbers are then sampled down to `quantity` and shuffled.
//!
//! Fewer than `quantity` numbers may come back when the suffix space cannot
//! supply enough distinct values. Callers detect this from the output length.

use std::collections::HashSet;

use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::constants::{RETRY_FACTOR, SUFFIX_MAX};
use crate::error::PhoneGenError;
use crate::number::{AreaCode, PhoneNumber, PrefixSet};
use crate::options::GenerationOptions;

/// Generate up to `quantity` distinct numbers for `area_code`, spread over `prefixes`.
///
/// The result is in random order. `quantity == 0` is rejected.
pub fn generate<R: Rng + ?Sized>(
    area_code: &AreaCode,
    prefixes: &PrefixSet,
    quantity: usize,
    rng: &mut R,
) -> Result<Vec<PhoneNumber>, PhoneGenError> {
    if quantity == 0 {
        return Err(PhoneGenError::InvalidQuantity(quantity));
    }
    if prefixes.is_empty() {
        return Err(PhoneGenError::EmptyPrefixes);
    }

    Ok(generate_within(area_code, prefixes, quantity, SUFFIX_MAX, rng))
}

/// Generation over suffixes `0..=suffix_max`; inputs are already validated.
fn generate_within<R: Rng + ?Sized>(
    area_code: &AreaCode,
    prefixes: &PrefixSet,
    quantity: usize,
    suffix_max: u32,
    rng: &mut R,
) -> Vec<PhoneNumber> {
    let space = suffix_max as usize + 1;
    let per_prefix = quota_per_prefix(quantity, prefixes.len());
    let mut pool: HashSet<PhoneNumber> =
        HashSet::with_capacity(per_prefix.min(space).saturating_mul(prefixes.len()));

    for prefix in prefixes {
        let suffixes = draw_suffixes(per_prefix, suffix_max, rng);
        debug!(
            prefix = %prefix,
            wanted = per_prefix,
            drawn = suffixes.len(),
            "Suffixes drawn"
        );
        pool.extend(
            suffixes
                .into_iter()
                .map(|suffix| PhoneNumber::compose(area_code, prefix, suffix)),
        );
    }

    // Sorted so a seeded rng reproduces the output.
    let mut numbers: Vec<PhoneNumber> = pool.into_iter().collect();
    numbers.sort_unstable();

    if numbers.len() > quantity {
        numbers = sample(numbers, quantity, rng);
    }
    numbers.shuffle(rng);

    debug!(requested = quantity, generated = numbers.len(), "Generation complete");
    numbers
}

/// Suffixes to attempt for each prefix.
#[must_use]
pub fn quota_per_prefix(quantity: usize, prefix_count: usize) -> usize {
    (quantity / prefix_count.max(1)).saturating_add(1)
}

/// Draw up to `target` distinct suffixes in `0..=max`.
///
/// Stops after `target * RETRY_FACTOR` draws, or as soon as every value in
/// the space has been seen.
fn draw_suffixes<R: Rng + ?Sized>(target: usize, max: u32, rng: &mut R) -> HashSet<u32> {
    let space = max as usize + 1;
    let budget = target.saturating_mul(RETRY_FACTOR);
    let mut suffixes = HashSet::with_capacity(target.min(space));

    for _ in 0..budget {
        if suffixes.len() >= target || suffixes.len() == space {
            break;
        }
        suffixes.insert(rng.random_range(0..=max));
    }
    suffixes
}

/// Uniform sample of `amount` elements without replacement, in sampled order.
fn sample<R: Rng + ?Sized>(
    numbers: Vec<PhoneNumber>,
    amount: usize,
    rng: &mut R,
) -> Vec<PhoneNumber> {
    let mut slots: Vec<Option<PhoneNumber>> = numbers.into_iter().map(Some).collect();
    let len = slots.len();
    index::sample(rng, len, amount)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Generator bound to a validated area code and prefix set.
#[derive(Debug, Clone, Default)]
pub struct NumberGenerator {
    area_code: AreaCode,
    prefixes: PrefixSet,
}

impl NumberGenerator {
    #[must_use]
    pub fn new(area_code: AreaCode, prefixes: PrefixSet) -> Self {
        Self {
            area_code,
            prefixes,
        }
    }

    /// Generator for the area code and prefixes in `opts`.
    #[must_use]
    pub fn from_options(opts: &GenerationOptions) -> Self {
        Self::new(opts.area_code.clone(), opts.prefixes.clone())
    }

    #[must_use]
    pub fn area_code(&self) -> &AreaCode {
        &self.area_code
    }

    #[must_use]
    pub fn prefixes(&self) -> &PrefixSet {
        &self.prefixes
    }

    /// See [`generate`].
    pub fn generate<R: Rng + ?Sized>(
        &self,
        quantity: usize,
        rng: &mut R,
    ) -> Result<Vec<PhoneNumber>, PhoneGenError> {
        generate(&self.area_code, &self.prefixes, quantity, rng)
    }
}
