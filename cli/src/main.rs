mod args;
mod commands;
mod errors;
mod export;

use crate::args::{Command, USAGE};
use crate::commands::{argument_or_stdin, decrypt, encrypt, keygen};
use crate::errors::CliError;

use std::process::ExitCode;

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Keygen {
            out,
            public_out,
            range,
            max_attempts,
        } => {
            let params = keygen::params_from(range, max_attempts)?;
            keygen::run(out, public_out, &params)
        }
        Command::Encrypt {
            key,
            wrapping,
            text,
        } => encrypt::run(&key, wrapping, &argument_or_stdin(text)?),
        Command::Decrypt {
            key,
            wrapping,
            ciphertext,
        } => decrypt::run(&key, wrapping, &argument_or_stdin(ciphertext)?),
        Command::Help => Ok(USAGE.to_string()),
    }
}

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let result = args::parse(std::env::args().skip(1)).and_then(run);

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("Command failed: {:?}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
