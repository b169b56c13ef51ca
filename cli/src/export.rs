use crate::errors::CliError;

use chrono::{DateTime, Utc};
use rsa_crypto::{PrivateKey, PublicKey};
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

/// On-disk key file. Keys are stored as `[exponent, modulus]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPairExport {
    pub generated_at: DateTime<Utc>,
    pub public_key: PublicKey,
    pub private_key: Option<PrivateKey>,
}

impl KeyPairExport {
    pub fn new(public_key: PublicKey, private_key: PrivateKey) -> Self {
        Self {
            generated_at: Utc::now(),
            public_key,
            private_key: Some(private_key),
        }
    }

    /// Same file without the private half, safe to hand to senders.
    pub fn public_only(&self) -> Self {
        Self {
            private_key: None,
            ..self.clone()
        }
    }

    pub fn default_filename() -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("keypair_{}.json", timestamp))
    }

    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let json_string =
            serde_json::to_string_pretty(self).map_err(|source| CliError::KeyFile {
                path: path.to_path_buf(),
                source,
            })?;

        std::fs::write(path, json_string).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| CliError::KeyFile {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn require_private_key(&self, path: &Path) -> Result<PrivateKey, CliError> {
        self.private_key
            .ok_or_else(|| CliError::MissingPrivateKey(path.to_path_buf()))
    }
}
