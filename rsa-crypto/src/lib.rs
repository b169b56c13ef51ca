//! # RSA Crypto
//!
//! A small, dependency-light RSA engine used to key-wrap chat messages: prime selection,
//! keypair derivation and the character-wise encrypt/decrypt transforms.
//!
//! **This is toy RSA, not production-grade cryptography.** Primes come from `100..300`, so the
//! modulus factors instantly; every character is encrypted on its own with no padding, so the
//! ciphertext leaks character frequencies. The algorithm is kept as-is on purpose.
//!
//! ```
//! use rsa_crypto::{decrypt, encrypt, generate_keypair};
//!
//! let (public_key, private_key) = generate_keypair().unwrap();
//! let ciphertext = encrypt(&public_key, "Hi").unwrap();
//! assert_eq!(decrypt(&private_key, &ciphertext).unwrap(), "Hi");
//! ```

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod keypair;
pub mod preset;
pub mod prime;
pub mod random;
pub mod ring;

pub use cipher::{Mode, decrypt, decrypt_with_mode, encrypt, encrypt_with_mode, open, seal};
pub use codec::Ciphertext;
pub use errors::RsaCryptoError;
pub use keypair::{KeyGenParams, PrivateKey, PublicKey, generate_keypair, generate_keypair_with};
pub use prime::is_prime;
pub use ring::{gcd, mod_inverse};
