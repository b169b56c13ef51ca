use rsa_crypto::errors::RsaCryptoError;

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Crypto(#[from] RsaCryptoError),
    #[error("Cannot access {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read standard input: {0}")]
    Stdin(std::io::Error),
    #[error("Key file {path:?} is malformed: {source}")]
    KeyFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Key file {0:?} holds no private key")]
    MissingPrivateKey(PathBuf),
    #[error("{0}\n\n{usage}", usage = crate::args::USAGE)]
    Usage(String),
}
