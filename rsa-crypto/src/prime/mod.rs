//! Trial-division primality and candidate prime tables.

use num_integer::Roots;

use std::ops::Range;

/// Returns whether `n` is prime.
///
/// Trial-divides by every integer from 2 up to and including `floor(sqrt(n))`.
/// This is `O(sqrt(n))` and only meant for the small candidates used by key generation.
///
/// # Example
///
/// ```
/// # use rsa_crypto::prime::is_prime;
/// assert!(!is_prime(0));
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(is_prime(101));
/// assert!(!is_prime(121));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let limit = n.sqrt();
    (2..=limit).all(|divisor| n % divisor != 0)
}

/// Collects every prime in `range` (end exclusive), in ascending order.
///
/// ```
/// # use rsa_crypto::prime::primes_in_range;
/// assert_eq!(primes_in_range(10..30), vec![11, 13, 17, 19, 23, 29]);
/// assert!(primes_in_range(24..29).is_empty());
/// ```
pub fn primes_in_range(range: Range<u64>) -> Vec<u64> {
    range.filter(|&candidate| is_prime(candidate)).collect()
}
