#[derive(thiserror::Error, Debug)]
pub enum RsaCryptoError {
    /// Modular inverse requested for a value that is not coprime with the modulus.
    #[error("InverseNotFound: {value} has no inverse mod {modulus} (gcd={gcd})")]
    InverseNotFound { value: u64, modulus: u64, gcd: u64 },
    /// Error when creating a ring (or using a key) with an invalid modulus.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("Prime range {start}..{end} holds {found} prime(s), at least 2 are required")]
    NotEnoughPrimes { start: u64, end: u64, found: usize },
    #[error("Key generation exhausted after {attempts} attempts while {stage}")]
    KeyGenerationExhausted { stage: &'static str, attempts: usize },

    #[error(
        "Character {character:?} (code point {code_point}) at position {position} is not below modulus {modulus}"
    )]
    CodePointOutOfRange {
        character: char,
        code_point: u64,
        modulus: u64,
        position: usize,
    },
    #[error("Ciphertext unit {unit} at position {position} is not below modulus {modulus}")]
    CiphertextOutOfRange {
        unit: u64,
        modulus: u64,
        position: usize,
    },
    #[error("Decrypted value {code_point} at position {position} is not a valid character")]
    InvalidCodePoint { code_point: u64, position: usize },
    #[error("Integrity check failed: expected checksum {expected}, got {actual}")]
    IntegrityMismatch { expected: u64, actual: u64 },
    #[error("Sealed ciphertext is empty, the checksum unit is missing")]
    EmptyCiphertext,

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
