//! Sealed messages: ciphertext that carries its own checksum unit.
//!
//! The last unit encrypts `sum((i + 1) * code_point_i) mod n`. Opening recomputes it over the
//! recovered code points, so a wrong key or a tampered unit is reported instead of producing
//! garbage text. A forgery still passes with probability about `1 / n`.

use super::{Mode, code_points_to_string, encrypt_with_mode, recover_code_points};
use crate::codec::Ciphertext;
use crate::errors::RsaCryptoError;
use crate::keypair::{PrivateKey, PublicKey};
use crate::ring::Ring;

/// Position-weighted checksum of code points, reduced mod `n`.
fn checksum(ring: &Ring, code_points: &[u64]) -> u64 {
    code_points
        .iter()
        .enumerate()
        .fold(0, |acc, (position, &code_point)| {
            ring.add(acc, ring.mul(position as u64 + 1, code_point))
        })
}

/// Encrypts `plaintext` in [`Mode::Checked`] and appends the encrypted checksum unit.
///
/// ```
/// # use rsa_crypto::cipher::{open, seal};
/// # use rsa_crypto::keypair::{PrivateKey, PublicKey};
/// let sealed = seal(&PublicKey::from((7, 10403)), "Hi").unwrap();
/// assert_eq!(sealed.len(), 3);
/// assert_eq!(open(&PrivateKey::from((8743, 10403)), &sealed).unwrap(), "Hi");
/// ```
pub fn seal(public_key: &PublicKey, plaintext: &str) -> Result<Ciphertext, RsaCryptoError> {
    let ring = Ring::try_with(public_key.modulus)?;
    let mut units = encrypt_with_mode(public_key, plaintext, Mode::Checked)?.into_units();

    let code_points: Vec<u64> = plaintext.chars().map(|c| c as u64).collect();
    let tag = checksum(&ring, &code_points);
    units.push(ring.pow(tag, public_key.exponent));

    Ok(Ciphertext::from(units))
}

/// Decrypts a sealed ciphertext and verifies its checksum.
///
/// # Errors
///
/// * `EmptyCiphertext` if there is no checksum unit.
/// * `IntegrityMismatch` if the checksum does not match the recovered text.
/// * Any error of checked decryption (`CiphertextOutOfRange`, `InvalidCodePoint`, `InvalidModulus`).
pub fn open(private_key: &PrivateKey, ciphertext: &[u64]) -> Result<String, RsaCryptoError> {
    if ciphertext.is_empty() {
        return Err(RsaCryptoError::EmptyCiphertext);
    }

    let ring = Ring::try_with(private_key.modulus)?;
    let mut code_points = recover_code_points(private_key, ciphertext, Mode::Checked)?;
    let actual = code_points.pop().ok_or(RsaCryptoError::EmptyCiphertext)?;

    let expected = checksum(&ring, &code_points);
    if expected != actual {
        return Err(RsaCryptoError::IntegrityMismatch { expected, actual });
    }

    code_points_to_string(&code_points, Mode::Checked)
}
