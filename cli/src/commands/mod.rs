pub mod decrypt;
pub mod encrypt;
pub mod keygen;

use crate::errors::CliError;

use std::io::Read;

/// Uses the positional argument when given, otherwise reads standard input.
pub(crate) fn argument_or_stdin(argument: Option<String>) -> Result<String, CliError> {
    match argument {
        Some(value) => Ok(value),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Stdin)?;
            Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}
