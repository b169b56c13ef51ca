use crate::prime::primes_in_range;

use lazy_static::lazy_static;

use std::ops::Range;

/// Candidate range for key primes, end exclusive. Small on purpose: keys are toy-sized.
pub const DEFAULT_PRIME_RANGE: Range<u64> = 100..300;

/// Attempt cap for each rejection-sampling loop of key generation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

lazy_static! {
    /// Every prime in [`DEFAULT_PRIME_RANGE`], ascending.
    pub static ref DEFAULT_PRIMES: Vec<u64> = primes_in_range(DEFAULT_PRIME_RANGE);
}
