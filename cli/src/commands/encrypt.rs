use crate::args::Wrapping;
use crate::errors::CliError;
use crate::export::KeyPairExport;

use log::debug;
use rsa_crypto::{encrypt_with_mode, seal};

use std::path::Path;

/// Encrypts `text` under the public key in `key_path` and returns the ciphertext as JSON.
pub fn run(key_path: &Path, wrapping: Wrapping, text: &str) -> Result<String, CliError> {
    let export = KeyPairExport::load(key_path)?;

    let ciphertext = match wrapping {
        Wrapping::Plain(mode) => encrypt_with_mode(&export.public_key, text, mode)?,
        Wrapping::Sealed => seal(&export.public_key, text)?,
    };
    debug!(
        "Encrypted {} character(s) into {} unit(s)",
        text.chars().count(),
        ciphertext.len()
    );

    Ok(ciphertext.to_json()?)
}
