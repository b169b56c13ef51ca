//! Implementation of ring ops using modular arithmetic.

use crate::errors::RsaCryptoError;

use super::mod_inverse;

use serde::{Deserialize, Serialize};

/// Represents the ring Z_m of integers modulo `m`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, RsaCryptoError> {
        if modulus <= 1 {
            return Err(RsaCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use rsa_crypto::ring::Ring;
    /// let ring = Ring::try_with(10403).unwrap();
    /// assert_eq!(ring.modulus(), 10403);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a value into `[0, modulus - 1]`.
    pub fn normalize(&self, value: u64) -> u64 {
        value % self.modulus
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use rsa_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(u64::MAX, 1), 6);
    /// ```
    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.modulus as u128) as u64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `u128` internally so the product never overflows.
    ///
    /// # Example
    ///
    /// ```
    /// # use rsa_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5);
    /// assert_eq!(ring.mul(u64::MAX, u64::MAX), 5);
    /// ```
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }

    /// Computes `(base ^ exponent) mod modulus` by square-and-multiply.
    ///
    /// `0 ^ 0` is treated as 1, as usual for modular exponentiation.
    ///
    /// # Example
    ///
    /// ```
    /// # use rsa_crypto::ring::Ring;
    /// let ring = Ring::try_with(10403).unwrap();
    /// assert_eq!(ring.pow(72, 1), 72);
    /// assert_eq!(ring.pow(2, 10), 1024);
    /// assert_eq!(ring.pow(3, 0), 1);
    /// ```
    pub fn pow(&self, base: u64, exponent: u64) -> u64 {
        let mut result = 1 % self.modulus;
        let mut base = self.normalize(base);
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exponent >>= 1;
        }

        result
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    ///
    /// # Errors
    ///
    /// Returns `RsaCryptoError::InverseNotFound` if the inverse does not exist
    /// (this includes `a == 0`).
    ///
    /// # Example
    ///
    /// ```
    /// # use rsa_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 7); // 3 * 7 = 21 = 1 mod 10
    /// assert_eq!(ring.inv(9).unwrap(), 9);
    /// assert!(ring.inv(2).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: u64) -> Result<u64, RsaCryptoError> {
        mod_inverse(self.normalize(a), self.modulus)
    }
}
