use crate::errors::RsaCryptoError;
use crate::preset::prime_table::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PRIME_RANGE, DEFAULT_PRIMES};
use crate::prime::primes_in_range;

use serde::{Deserialize, Serialize};

use std::ops::Range;

/// Largest exclusive end for the prime range, so that `p * q` always fits in a `u64`.
const MAX_RANGE_END: u64 = 1 << 32;

/// Parameters for key generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenParams {
    /// Candidate primes are drawn from this range, end exclusive.
    pub prime_range: Range<u64>,
    /// Cap on draws for each rejection-sampling loop (second prime, public exponent).
    pub max_attempts: usize,
}

impl Default for KeyGenParams {
    fn default() -> Self {
        Self {
            prime_range: DEFAULT_PRIME_RANGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl KeyGenParams {
    /// Creates a new KeyGenParams instance with the given parameters.
    ///
    /// # Errors
    ///
    /// * `InvalidParameters` if the range is empty, ends past `2^32`, or `max_attempts` is 0.
    /// * `NotEnoughPrimes` if the range holds fewer than two primes.
    pub fn try_with(start: u64, end: u64, max_attempts: usize) -> Result<Self, RsaCryptoError> {
        if start >= end {
            return Err(RsaCryptoError::InvalidParameters(format!(
                "Prime range {}..{} is empty",
                start, end
            )));
        }

        if end > MAX_RANGE_END {
            return Err(RsaCryptoError::InvalidParameters(format!(
                "Prime range end must be at most {}, got {}",
                MAX_RANGE_END, end
            )));
        }

        if max_attempts == 0 {
            return Err(RsaCryptoError::InvalidParameters(
                "max_attempts must be > 0".to_string(),
            ));
        }

        let params = Self {
            prime_range: start..end,
            max_attempts,
        };
        params.candidate_primes()?;

        Ok(params)
    }

    /// Every prime in `prime_range`.
    ///
    /// The default range is served from the cached preset table.
    ///
    /// # Errors
    ///
    /// Returns `NotEnoughPrimes` if fewer than two primes are found.
    pub fn candidate_primes(&self) -> Result<Vec<u64>, RsaCryptoError> {
        let primes = if self.prime_range == DEFAULT_PRIME_RANGE {
            DEFAULT_PRIMES.clone()
        } else {
            primes_in_range(self.prime_range.clone())
        };

        if primes.len() < 2 {
            return Err(RsaCryptoError::NotEnoughPrimes {
                start: self.prime_range.start,
                end: self.prime_range.end,
                found: primes.len(),
            });
        }

        Ok(primes)
    }
}
