use crate::errors::RsaCryptoError;
use crate::keypair::params::KeyGenParams;
use crate::prime::is_prime;
use crate::random::RandomSource;
use crate::ring::{gcd, mod_inverse};

use log::{debug, trace};

use serde::{Deserialize, Serialize};

/// Public half of a keypair, `(e, n)`.
///
/// Serialized as the JSON array `[exponent, modulus]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u64, u64)", into = "(u64, u64)")]
pub struct PublicKey {
    pub exponent: u64,
    pub modulus: u64,
}

/// Private half of a keypair, `(d, n)`.
///
/// Serialized as the JSON array `[exponent, modulus]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u64, u64)", into = "(u64, u64)")]
pub struct PrivateKey {
    pub exponent: u64,
    pub modulus: u64,
}

impl From<(u64, u64)> for PublicKey {
    fn from((exponent, modulus): (u64, u64)) -> Self {
        Self { exponent, modulus }
    }
}

impl From<PublicKey> for (u64, u64) {
    fn from(key: PublicKey) -> Self {
        (key.exponent, key.modulus)
    }
}

impl From<(u64, u64)> for PrivateKey {
    fn from((exponent, modulus): (u64, u64)) -> Self {
        Self { exponent, modulus }
    }
}

impl From<PrivateKey> for (u64, u64) {
    fn from(key: PrivateKey) -> Self {
        (key.exponent, key.modulus)
    }
}

/// Everything derived during key generation.
///
/// Only `public_key()` and `private_key()` are meant to leave the generator; the primes and the
/// totient are kept so the keypair invariants can be checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyComponents {
    pub p: u64,
    pub q: u64,
    /// n = p * q
    pub modulus: u64,
    /// phi = (p - 1) * (q - 1)
    pub totient: u64,
    pub public_exponent: u64,
    pub private_exponent: u64,
}

impl KeyComponents {
    /// Derives the components for a chosen `(p, q, e)`.
    ///
    /// # Errors
    ///
    /// * `InvalidParameters` if `p` or `q` is not prime, `p == q`, or `p * q` overflows.
    /// * `InverseNotFound` if `e` is not coprime with the totient.
    ///
    /// # Example
    ///
    /// ```
    /// # use rsa_crypto::keypair::KeyComponents;
    /// let components = KeyComponents::try_with(101, 103, 7).unwrap();
    /// assert_eq!(components.modulus, 10403);
    /// assert_eq!(components.totient, 10200);
    /// assert_eq!(components.private_exponent, 8743);
    /// ```
    pub fn try_with(p: u64, q: u64, public_exponent: u64) -> Result<Self, RsaCryptoError> {
        if !is_prime(p) || !is_prime(q) {
            return Err(RsaCryptoError::InvalidParameters(format!(
                "p={} and q={} must both be prime",
                p, q
            )));
        }

        if p == q {
            return Err(RsaCryptoError::InvalidParameters(format!(
                "p and q must differ, both are {}",
                p
            )));
        }

        let modulus = p.checked_mul(q).ok_or_else(|| {
            RsaCryptoError::InvalidParameters(format!("p * q overflows for p={}, q={}", p, q))
        })?;
        let totient = (p - 1) * (q - 1);
        let private_exponent = mod_inverse(public_exponent, totient)?;

        Ok(Self {
            p,
            q,
            modulus,
            totient,
            public_exponent,
            private_exponent,
        })
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            exponent: self.public_exponent,
            modulus: self.modulus,
        }
    }

    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            exponent: self.private_exponent,
            modulus: self.modulus,
        }
    }

    /// Checks every keypair invariant: both primes, distinct, `n = p*q`,
    /// `phi = (p-1)*(q-1)` and `(d * e) mod phi == 1`.
    pub fn verify(&self) -> Result<(), RsaCryptoError> {
        let invariant = |holds: bool, what: &str| {
            if holds {
                Ok(())
            } else {
                Err(RsaCryptoError::InvalidParameters(format!(
                    "Keypair invariant violated: {}",
                    what
                )))
            }
        };

        invariant(is_prime(self.p) && is_prime(self.q), "p and q must be prime")?;
        invariant(self.p != self.q, "p != q")?;
        invariant(
            self.p as u128 * self.q as u128 == self.modulus as u128,
            "n = p * q",
        )?;
        invariant(
            (self.p as u128 - 1) * (self.q as u128 - 1) == self.totient as u128,
            "phi = (p - 1) * (q - 1)",
        )?;
        invariant(
            (self.private_exponent as u128 * self.public_exponent as u128) % self.totient as u128
                == 1,
            "(d * e) mod phi == 1",
        )
    }
}

/// Generates the components of a fresh keypair.
///
/// 1. Builds the candidate prime set from `params`.
/// 2. Draws `p`, then redraws `q` until `q != p`.
/// 3. Draws `e` from `[1, phi)` until `gcd(e, phi) == 1`.
/// 4. Derives `d = e^-1 mod phi`.
///
/// Both redraw loops stop after `params.max_attempts` draws.
///
/// # Errors
///
/// * `NotEnoughPrimes` if the range holds fewer than two primes.
/// * `KeyGenerationExhausted` if a redraw loop runs out of attempts.
pub fn generate_key_components<R: RandomSource>(
    params: &KeyGenParams,
    rng: &mut R,
) -> Result<KeyComponents, RsaCryptoError> {
    let primes = params.candidate_primes()?;

    let p = draw_prime(&primes, rng)?;
    let mut q = None;
    for attempt in 1..=params.max_attempts {
        let candidate = draw_prime(&primes, rng)?;
        if candidate != p {
            q = Some(candidate);
            break;
        }
        trace!(
            "q={} collides with p, redrawing (attempt {})",
            candidate, attempt
        );
    }
    let q = q.ok_or(RsaCryptoError::KeyGenerationExhausted {
        stage: "drawing a second distinct prime",
        attempts: params.max_attempts,
    })?;

    let modulus = p.checked_mul(q).ok_or_else(|| {
        RsaCryptoError::InvalidParameters(format!("p * q overflows for p={}, q={}", p, q))
    })?;
    let totient = (p - 1) * (q - 1);

    let mut e = None;
    for attempt in 1..=params.max_attempts {
        let candidate = rng.sample_range(1, totient);
        if gcd(candidate, totient) == 1 {
            e = Some(candidate);
            break;
        }
        trace!(
            "e={} shares a factor with phi={}, redrawing (attempt {})",
            candidate, totient, attempt
        );
    }
    let public_exponent = e.ok_or(RsaCryptoError::KeyGenerationExhausted {
        stage: "drawing a public exponent coprime with phi",
        attempts: params.max_attempts,
    })?;

    let private_exponent = mod_inverse(public_exponent, totient)?;

    debug!(
        "Generated keypair with modulus n={} (e={})",
        modulus, public_exponent
    );

    Ok(KeyComponents {
        p,
        q,
        modulus,
        totient,
        public_exponent,
        private_exponent,
    })
}

fn draw_prime<R: RandomSource>(primes: &[u64], rng: &mut R) -> Result<u64, RsaCryptoError> {
    rng.pick(primes).ok_or_else(|| {
        RsaCryptoError::InternalError("candidate prime set is empty".to_string())
    })
}

/// Generates a `(public_key, private_key)` pair from `params` and an explicit randomness source.
pub fn generate_keypair_with<R: RandomSource>(
    params: &KeyGenParams,
    rng: &mut R,
) -> Result<(PublicKey, PrivateKey), RsaCryptoError> {
    let components = generate_key_components(params, rng)?;
    Ok((components.public_key(), components.private_key()))
}

/// Generates a `(public_key, private_key)` pair with the default parameters and the
/// thread-local generator.
///
/// ```
/// # use rsa_crypto::keypair::generate_keypair;
/// let (public_key, private_key) = generate_keypair().unwrap();
/// assert_eq!(public_key.modulus, private_key.modulus);
/// ```
pub fn generate_keypair() -> Result<(PublicKey, PrivateKey), RsaCryptoError> {
    generate_keypair_with(&KeyGenParams::default(), &mut rand::rng())
}
