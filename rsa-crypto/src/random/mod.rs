//! Randomness provider for key generation.
//!
//! Key generation never reaches for a global generator. It takes a [`RandomSource`], which
//! every [`rand::Rng`] already is, so callers can pass `rand::rng()`, a seeded
//! [`rand::rngs::StdRng`], or a [`FixedSequence`] that replays chosen values.

use rand::Rng;

pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform value in `low..high`. Requires `low < high`.
    fn sample_range(&mut self, low: u64, high: u64) -> u64;

    /// Uniformly picks one element of `items`, or `None` when it is empty.
    fn pick(&mut self, items: &[u64]) -> Option<u64> {
        if items.is_empty() {
            return None;
        }

        Some(items[self.index(items.len())])
    }
}

impl<R: Rng> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn sample_range(&mut self, low: u64, high: u64) -> u64 {
        self.random_range(low..high)
    }
}

/// Replays a fixed list of raw values, cycling when it runs out.
///
/// A raw value `v` becomes index `v % len` or value `low + v % (high - low)`, so any list
/// is valid for any request. An empty list always yields the lowest option.
///
/// ```
/// # use rsa_crypto::random::{FixedSequence, RandomSource};
/// let mut source = FixedSequence::new([0, 1, 4]);
/// assert_eq!(source.pick(&[101, 103, 107]), Some(101));
/// assert_eq!(source.pick(&[101, 103, 107]), Some(103));
/// assert_eq!(source.sample_range(1, 9996), 5);
/// assert_eq!(source.index(3), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<u64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    fn next_raw(&mut self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }

        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl RandomSource for FixedSequence {
    fn index(&mut self, len: usize) -> usize {
        (self.next_raw() % len as u64) as usize
    }

    fn sample_range(&mut self, low: u64, high: u64) -> u64 {
        low + self.next_raw() % (high - low)
    }
}
