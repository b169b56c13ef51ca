use crate::args::Wrapping;
use crate::errors::CliError;
use crate::export::KeyPairExport;

use rsa_crypto::{Ciphertext, decrypt_with_mode, open};

use std::path::Path;

/// Decrypts a JSON ciphertext with the private key in `key_path`.
pub fn run(key_path: &Path, wrapping: Wrapping, ciphertext_json: &str) -> Result<String, CliError> {
    let export = KeyPairExport::load(key_path)?;
    let private_key = export.require_private_key(key_path)?;
    let ciphertext = Ciphertext::from_json(ciphertext_json)?;

    let plaintext = match wrapping {
        Wrapping::Plain(mode) => decrypt_with_mode(&private_key, &ciphertext, mode)?,
        Wrapping::Sealed => open(&private_key, &ciphertext)?,
    };

    Ok(plaintext)
}
