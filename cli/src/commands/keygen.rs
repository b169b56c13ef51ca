use crate::errors::CliError;
use crate::export::KeyPairExport;

use log::info;
use rsa_crypto::keypair::{KeyGenParams, generate_key_components};
use rsa_crypto::preset::prime_table::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PRIME_RANGE};

use std::path::PathBuf;

/// Builds the generation parameters, falling back to the defaults for anything unset.
pub fn params_from(
    range: Option<(u64, u64)>,
    max_attempts: Option<usize>,
) -> Result<KeyGenParams, CliError> {
    if range.is_none() && max_attempts.is_none() {
        return Ok(KeyGenParams::default());
    }

    let (start, end) = range.unwrap_or((DEFAULT_PRIME_RANGE.start, DEFAULT_PRIME_RANGE.end));
    Ok(KeyGenParams::try_with(
        start,
        end,
        max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
    )?)
}

/// Generates a keypair and writes it to `out` (or a timestamped file), plus an optional
/// public-only copy. Returns a short report for the terminal.
pub fn run(
    out: Option<PathBuf>,
    public_out: Option<PathBuf>,
    params: &KeyGenParams,
) -> Result<String, CliError> {
    let components = generate_key_components(params, &mut rand::rng())?;
    let export = KeyPairExport::new(components.public_key(), components.private_key());

    let path = out.unwrap_or_else(KeyPairExport::default_filename);
    export.save(&path)?;
    info!("Keypair written to {:?}", path);

    let mut report = format!(
        "Keypair written to {}\npublic key: [{}, {}]",
        path.display(),
        components.public_exponent,
        components.modulus
    );

    if let Some(public_path) = public_out {
        export.public_only().save(&public_path)?;
        info!("Public key written to {:?}", public_path);
        report.push_str(&format!("\npublic copy: {}", public_path.display()));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_default() {
        assert_eq!(params_from(None, None).unwrap(), KeyGenParams::default());
    }

    #[test]
    fn test_params_overrides() {
        let params = params_from(Some((500, 700)), None).unwrap();
        assert_eq!(params.prime_range, 500..700);
        assert_eq!(params.max_attempts, DEFAULT_MAX_ATTEMPTS);

        let params = params_from(None, Some(5)).unwrap();
        assert_eq!(params.prime_range, DEFAULT_PRIME_RANGE);
        assert_eq!(params.max_attempts, 5);
    }

    #[test]
    fn test_params_rejects_barren_range() {
        assert!(matches!(
            params_from(Some((24, 29)), None),
            Err(CliError::Crypto(_))
        ));
    }
}
