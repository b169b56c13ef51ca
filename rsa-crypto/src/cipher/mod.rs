//! Character-wise RSA transforms.
//!
//! Every character is encrypted on its own as `(code_point ^ e) mod n`. There is no padding
//! and no chaining, so equal characters give equal units under one key.

pub mod sealed;

pub use sealed::{open, seal};

use crate::codec::Ciphertext;
use crate::errors::RsaCryptoError;
use crate::keypair::{PrivateKey, PublicKey};
use crate::ring::Ring;

use log::warn;

use serde::{Deserialize, Serialize};

/// How the cipher treats input it cannot carry faithfully.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Out-of-range characters, out-of-range units and undecodable results are errors.
    #[default]
    Checked,
    /// Reproduces the unguarded behaviour: out-of-range characters alias silently and
    /// undecodable results become U+FFFD.
    Compat,
}

/// Encrypts `plaintext` in [`Mode::Checked`].
///
/// Every character's code point must be below the key modulus.
///
/// ```
/// # use rsa_crypto::cipher::{decrypt, encrypt};
/// # use rsa_crypto::keypair::{PrivateKey, PublicKey};
/// let public_key = PublicKey::from((7, 10403));
/// let private_key = PrivateKey::from((8743, 10403));
///
/// let ciphertext = encrypt(&public_key, "Hi").unwrap();
/// assert_eq!(ciphertext.len(), 2);
/// assert_eq!(decrypt(&private_key, &ciphertext).unwrap(), "Hi");
/// ```
pub fn encrypt(public_key: &PublicKey, plaintext: &str) -> Result<Ciphertext, RsaCryptoError> {
    encrypt_with_mode(public_key, plaintext, Mode::Checked)
}

/// Decrypts `ciphertext` in [`Mode::Checked`].
pub fn decrypt(private_key: &PrivateKey, ciphertext: &[u64]) -> Result<String, RsaCryptoError> {
    decrypt_with_mode(private_key, ciphertext, Mode::Checked)
}

/// Encrypts one unit per character, in order.
///
/// # Errors
///
/// * `InvalidModulus` if the key modulus is below 2.
/// * `CodePointOutOfRange` in [`Mode::Checked`] for a character whose code point is `>= n`.
pub fn encrypt_with_mode(
    public_key: &PublicKey,
    plaintext: &str,
    mode: Mode,
) -> Result<Ciphertext, RsaCryptoError> {
    let ring = Ring::try_with(public_key.modulus)?;
    let mut lossy = 0usize;

    let ciphertext = plaintext
        .chars()
        .enumerate()
        .map(|(position, character)| {
            let code_point = character as u64;
            if code_point >= ring.modulus() {
                if mode == Mode::Checked {
                    return Err(RsaCryptoError::CodePointOutOfRange {
                        character,
                        code_point,
                        modulus: ring.modulus(),
                        position,
                    });
                }
                lossy += 1;
            }

            Ok(ring.pow(code_point, public_key.exponent))
        })
        .collect::<Result<Ciphertext, _>>()?;

    if lossy > 0 {
        warn!(
            "{} character(s) at or above modulus {} were encrypted lossily",
            lossy,
            ring.modulus()
        );
    }

    Ok(ciphertext)
}

/// Decrypts each unit to a character and concatenates them in order.
///
/// A wrong key is not detected: it yields some other string (or, in [`Mode::Checked`], an
/// `InvalidCodePoint` error when a result is not a character). Use [`open`] for messages that
/// must be checked.
///
/// # Errors
///
/// * `InvalidModulus` if the key modulus is below 2.
/// * `CiphertextOutOfRange` in [`Mode::Checked`] for a unit `>= n`.
/// * `InvalidCodePoint` in [`Mode::Checked`] for a result that is not a Unicode scalar value.
pub fn decrypt_with_mode(
    private_key: &PrivateKey,
    ciphertext: &[u64],
    mode: Mode,
) -> Result<String, RsaCryptoError> {
    let code_points = recover_code_points(private_key, ciphertext, mode)?;
    code_points_to_string(&code_points, mode)
}

/// Applies `(c ^ d) mod n` to every unit.
pub(crate) fn recover_code_points(
    private_key: &PrivateKey,
    ciphertext: &[u64],
    mode: Mode,
) -> Result<Vec<u64>, RsaCryptoError> {
    let ring = Ring::try_with(private_key.modulus)?;

    ciphertext
        .iter()
        .enumerate()
        .map(|(position, &unit)| {
            if mode == Mode::Checked && unit >= ring.modulus() {
                return Err(RsaCryptoError::CiphertextOutOfRange {
                    unit,
                    modulus: ring.modulus(),
                    position,
                });
            }

            Ok(ring.pow(unit, private_key.exponent))
        })
        .collect()
}

pub(crate) fn code_points_to_string(
    code_points: &[u64],
    mode: Mode,
) -> Result<String, RsaCryptoError> {
    let mut plaintext = String::with_capacity(code_points.len());
    let mut replaced = 0usize;

    for (position, &code_point) in code_points.iter().enumerate() {
        match u32::try_from(code_point).ok().and_then(char::from_u32) {
            Some(character) => plaintext.push(character),
            None if mode == Mode::Compat => {
                plaintext.push(char::REPLACEMENT_CHARACTER);
                replaced += 1;
            }
            None => {
                return Err(RsaCryptoError::InvalidCodePoint {
                    code_point,
                    position,
                });
            }
        }
    }

    if replaced > 0 {
        warn!(
            "{} decrypted value(s) were not characters and became U+FFFD",
            replaced
        );
    }

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::keypair::{KeyComponents, KeyGenParams, generate_key_components};

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scenario_keys() -> (PublicKey, PrivateKey) {
        let components = KeyComponents::try_with(101, 103, 7).unwrap();
        (components.public_key(), components.private_key())
    }

    #[test]
    fn test_hi_roundtrip() -> Result<(), RsaCryptoError> {
        let (public_key, private_key) = scenario_keys();

        let ciphertext = encrypt(&public_key, "Hi")?;
        assert_eq!(
            ciphertext.units(),
            &[72u64.pow(7) % 10403, 105u64.pow(7) % 10403]
        );
        assert_eq!(decrypt(&private_key, &ciphertext)?, "Hi");
        Ok(())
    }

    #[test]
    fn test_same_character_same_unit() -> Result<(), RsaCryptoError> {
        let (public_key, _) = scenario_keys();
        let ciphertext = encrypt(&public_key, "aaa")?;
        assert!(ciphertext.windows(2).all(|pair| pair[0] == pair[1]));
        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<(), RsaCryptoError> {
        let (public_key, private_key) = scenario_keys();
        assert!(encrypt(&public_key, "")?.is_empty());
        assert_eq!(decrypt(&private_key, &[])?, "");
        Ok(())
    }

    #[test]
    fn test_checked_rejects_code_point_above_modulus() {
        let (public_key, _) = scenario_keys();
        // U+4E2D is 20013, above 10403
        match encrypt(&public_key, "ok 中") {
            Err(RsaCryptoError::CodePointOutOfRange {
                character,
                code_point,
                modulus,
                position,
            }) => {
                assert_eq!(character, '中');
                assert_eq!(code_point, 20013);
                assert_eq!(modulus, 10403);
                assert_eq!(position, 3);
            }
            other => panic!("expected CodePointOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_compat_aliases_code_point_above_modulus() -> Result<(), RsaCryptoError> {
        let (public_key, private_key) = scenario_keys();

        let ciphertext = encrypt_with_mode(&public_key, "中", Mode::Compat)?;
        let decrypted = decrypt_with_mode(&private_key, &ciphertext, Mode::Compat)?;

        // 20013 - 10403 = 9610
        assert_eq!(decrypted, char::from_u32(9610).unwrap().to_string());
        Ok(())
    }

    #[test]
    fn test_modes_agree_on_valid_input() -> Result<(), RsaCryptoError> {
        let (public_key, _) = scenario_keys();
        assert_eq!(
            encrypt_with_mode(&public_key, "hello", Mode::Checked)?,
            encrypt_with_mode(&public_key, "hello", Mode::Compat)?
        );
        Ok(())
    }

    #[test]
    fn test_checked_rejects_unit_above_modulus() {
        let (_, private_key) = scenario_keys();
        assert!(matches!(
            decrypt(&private_key, &[12, 10403]),
            Err(RsaCryptoError::CiphertextOutOfRange {
                unit: 10403,
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_compat_reduces_unit_above_modulus() -> Result<(), RsaCryptoError> {
        let (public_key, private_key) = scenario_keys();
        let unit = encrypt(&public_key, "A")?[0];

        let decrypted = decrypt_with_mode(&private_key, &[unit + 10403], Mode::Compat)?;
        assert_eq!(decrypted, "A");
        Ok(())
    }

    #[test]
    fn test_surrogate_result() -> Result<(), RsaCryptoError> {
        // With e = d = 1 every unit decrypts to itself; 0xD800 is a surrogate.
        let private_key = PrivateKey::from((1, 100_000));

        assert!(matches!(
            decrypt(&private_key, &[0x41, 0xD800]),
            Err(RsaCryptoError::InvalidCodePoint {
                code_point: 0xD800,
                position: 1
            })
        ));
        assert_eq!(
            decrypt_with_mode(&private_key, &[0x41, 0xD800], Mode::Compat)?,
            "A\u{FFFD}"
        );
        Ok(())
    }

    #[test]
    fn test_degenerate_modulus() {
        let public_key = PublicKey::from((3, 1));
        let private_key = PrivateKey::from((3, 0));
        assert!(matches!(
            encrypt_with_mode(&public_key, "a", Mode::Compat),
            Err(RsaCryptoError::InvalidModulus(_))
        ));
        assert!(matches!(
            decrypt(&private_key, &[1]),
            Err(RsaCryptoError::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_wrong_key_is_not_detected_in_compat() -> Result<(), RsaCryptoError> {
        let (public_key, _) = scenario_keys();
        let other = KeyComponents::try_with(107, 109, 5)?;

        let ciphertext = encrypt(&public_key, "secret")?;
        let garbage = decrypt_with_mode(&other.private_key(), &ciphertext, Mode::Compat)?;
        assert_eq!(garbage.chars().count(), 6);
        assert_ne!(garbage, "secret");
        Ok(())
    }

    #[quickcheck]
    fn prop_roundtrip_below_modulus(text: String, seed: u64) -> TestResult {
        let mut rng = StdRng::seed_from_u64(seed);
        let Ok(components) = generate_key_components(&KeyGenParams::default(), &mut rng) else {
            return TestResult::failed();
        };
        let text: String = text
            .chars()
            .filter(|&c| (c as u64) < components.modulus)
            .collect();

        let result = encrypt(&components.public_key(), &text)
            .and_then(|ciphertext| decrypt(&components.private_key(), &ciphertext));
        match result {
            Ok(decrypted) => TestResult::from_bool(decrypted == text),
            Err(_) => TestResult::failed(),
        }
    }

    #[quickcheck]
    fn prop_length_and_range(text: String) -> bool {
        let (public_key, _) = scenario_keys();
        let ciphertext = encrypt_with_mode(&public_key, &text, Mode::Compat).unwrap();
        ciphertext.len() == text.chars().count() && ciphertext.iter().all(|&unit| unit < 10403)
    }
}
