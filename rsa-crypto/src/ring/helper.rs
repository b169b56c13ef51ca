use crate::errors::RsaCryptoError;

/// Greatest common divisor by the Euclidean algorithm.
///
/// ```
/// # use rsa_crypto::ring::gcd;
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(18, 48), 6);
/// assert_eq!(gcd(7, 0), 7);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
/// Both inputs are expected to be non-negative.
///
/// ```
/// # use rsa_crypto::ring::extended_gcd;
/// let (g, x, y) = extended_gcd(5, 9996);
/// assert_eq!(g, 1);
/// assert_eq!(5 * x + 9996 * y, 1);
/// ```
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if a == 0 {
        return (b, 0, 1);
    }

    let (g, y, x) = extended_gcd(b % a, a);
    (g, x - (b / a) * y, y)
}

/// Computes `d` such that `(d * e) mod phi == 1`.
///
/// The result is normalized into `[0, phi - 1]`.
///
/// # Errors
///
/// Returns `RsaCryptoError::InverseNotFound` when `gcd(e, phi) != 1`.
/// Returns `RsaCryptoError::InvalidModulus` when `phi` is 0.
///
/// # Example
///
/// ```
/// # use rsa_crypto::ring::mod_inverse;
/// let d = mod_inverse(5, 9996).unwrap();
/// assert_eq!((5 * d) % 9996, 1);
/// assert!(mod_inverse(4, 8).is_err());
/// ```
pub fn mod_inverse(e: u64, phi: u64) -> Result<u64, RsaCryptoError> {
    if phi == 0 {
        return Err(RsaCryptoError::InvalidModulus(
            "Cannot invert modulo 0".to_string(),
        ));
    }

    let (g, x, _) = extended_gcd(e as i128, phi as i128);
    if g != 1 {
        return Err(RsaCryptoError::InverseNotFound {
            value: e,
            modulus: phi,
            gcd: g as u64,
        });
    }

    // x may be negative; rem_euclid lands it in [0, phi).
    Ok(x.rem_euclid(phi as i128) as u64)
}
