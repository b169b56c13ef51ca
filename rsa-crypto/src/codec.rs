//! JSON text encodings for ciphertext and keys.
//!
//! Keys serialize as `[exponent, modulus]` and ciphertext as a plain array of integers, the
//! same shapes the chat application stored in its database columns.

use crate::errors::RsaCryptoError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use std::ops::Deref;

/// An ordered sequence of ciphertext units, one per plaintext character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ciphertext(pub Vec<u64>);

impl Ciphertext {
    pub fn units(&self) -> &[u64] {
        &self.0
    }

    pub fn into_units(self) -> Vec<u64> {
        self.0
    }

    /// Encodes as a JSON array, e.g. `[4134,2207]`.
    pub fn to_json(&self) -> Result<String, RsaCryptoError> {
        to_json(self)
    }

    /// Decodes a JSON array of non-negative integers. Whitespace is ignored, so text written
    /// as `[4134, 2207]` decodes too.
    ///
    /// ```
    /// # use rsa_crypto::codec::Ciphertext;
    /// let ciphertext = Ciphertext::from_json("[4134, 2207]").unwrap();
    /// assert_eq!(ciphertext.units(), &[4134, 2207]);
    /// assert!(Ciphertext::from_json("[-1]").is_err());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, RsaCryptoError> {
        from_json(text)
    }
}

impl Deref for Ciphertext {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u64>> for Ciphertext {
    fn from(units: Vec<u64>) -> Self {
        Self(units)
    }
}

impl FromIterator<u64> for Ciphertext {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Ciphertext {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Serializes any key or ciphertext value to compact JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RsaCryptoError> {
    Ok(serde_json::to_string(value)?)
}

/// Deserializes a key or ciphertext value from JSON text.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, RsaCryptoError> {
    Ok(serde_json::from_str(text)?)
}
