use crate::errors::CliError;

use rsa_crypto::Mode;

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage:
  rsa-chat keygen [--out PATH] [--public PATH] [--range START..END] [--max-attempts N]
  rsa-chat encrypt --key PATH [--compat | --sealed] [TEXT]
  rsa-chat decrypt --key PATH [--compat | --sealed] [CIPHERTEXT_JSON]
  rsa-chat help

TEXT and CIPHERTEXT_JSON are read from standard input when omitted.
Set RUST_LOG=debug for diagnostics.";

/// How a message is wrapped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Wrapping {
    Plain(Mode),
    Sealed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Keygen {
        out: Option<PathBuf>,
        public_out: Option<PathBuf>,
        range: Option<(u64, u64)>,
        max_attempts: Option<usize>,
    },
    Encrypt {
        key: PathBuf,
        wrapping: Wrapping,
        text: Option<String>,
    },
    Decrypt {
        key: PathBuf,
        wrapping: Wrapping,
        ciphertext: Option<String>,
    },
    Help,
}

/// Parses the arguments that follow the program name.
pub fn parse<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(subcommand) = args.next() else {
        return Ok(Command::Help);
    };

    match subcommand.as_str() {
        "keygen" => parse_keygen(args),
        "encrypt" => {
            let (key, wrapping, positional) = parse_cipher_args(args)?;
            Ok(Command::Encrypt {
                key,
                wrapping,
                text: positional,
            })
        }
        "decrypt" => {
            let (key, wrapping, positional) = parse_cipher_args(args)?;
            Ok(Command::Decrypt {
                key,
                wrapping,
                ciphertext: positional,
            })
        }
        "help" | "-h" | "--help" => Ok(Command::Help),
        other => Err(CliError::Usage(format!("Unknown command {:?}", other))),
    }
}

fn parse_keygen(mut args: impl Iterator<Item = String>) -> Result<Command, CliError> {
    let mut out = None;
    let mut public_out = None;
    let mut range = None;
    let mut max_attempts = None;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--out" => out = Some(PathBuf::from(value_of(&flag, &mut args)?)),
            "--public" => public_out = Some(PathBuf::from(value_of(&flag, &mut args)?)),
            "--range" => range = Some(parse_range(&value_of(&flag, &mut args)?)?),
            "--max-attempts" => {
                let value = value_of(&flag, &mut args)?;
                max_attempts = Some(value.parse().map_err(|_| {
                    CliError::Usage(format!("--max-attempts expects a number, got {:?}", value))
                })?);
            }
            other => return Err(CliError::Usage(format!("Unexpected argument {:?}", other))),
        }
    }

    Ok(Command::Keygen {
        out,
        public_out,
        range,
        max_attempts,
    })
}

fn parse_cipher_args(
    mut args: impl Iterator<Item = String>,
) -> Result<(PathBuf, Wrapping, Option<String>), CliError> {
    let mut key = None;
    let mut compat = false;
    let mut sealed = false;
    let mut positional = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--key" => {
                key = Some(PathBuf::from(value_of(&arg, &mut args)?));
                continue;
            }
            "--compat" => {
                compat = true;
                continue;
            }
            "--sealed" => {
                sealed = true;
                continue;
            }
            _ => {}
        }

        if positional.is_some() {
            return Err(CliError::Usage(format!("Unexpected argument {:?}", arg)));
        }
        positional = Some(arg);
    }

    let key = key.ok_or_else(|| CliError::Usage("--key is required".to_string()))?;
    let wrapping = match (compat, sealed) {
        (true, true) => {
            return Err(CliError::Usage(
                "--compat and --sealed cannot be combined".to_string(),
            ));
        }
        (true, false) => Wrapping::Plain(Mode::Compat),
        (false, true) => Wrapping::Sealed,
        (false, false) => Wrapping::Plain(Mode::Checked),
    };

    Ok((key, wrapping, positional))
}

fn value_of(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("{} expects a value", flag)))
}

fn parse_range(value: &str) -> Result<(u64, u64), CliError> {
    let invalid = || CliError::Usage(format!("--range expects START..END, got {:?}", value));

    let (start, end) = value.split_once("..").ok_or_else(invalid)?;
    let start = start.trim().parse().map_err(|_| invalid())?;
    let end = end.trim().parse().map_err(|_| invalid())?;

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_no_arguments_shows_help() {
        assert_eq!(parse(Vec::new()).unwrap(), Command::Help);
        assert_eq!(parse(args("--help")).unwrap(), Command::Help);
    }

    #[test]
    fn test_keygen_flags() {
        let command = parse(args(
            "keygen --out alice.json --public alice.pub.json --range 500..700 --max-attempts 50",
        ))
        .unwrap();

        assert_eq!(
            command,
            Command::Keygen {
                out: Some(PathBuf::from("alice.json")),
                public_out: Some(PathBuf::from("alice.pub.json")),
                range: Some((500, 700)),
                max_attempts: Some(50),
            }
        );
    }

    #[test]
    fn test_keygen_defaults() {
        assert_eq!(
            parse(args("keygen")).unwrap(),
            Command::Keygen {
                out: None,
                public_out: None,
                range: None,
                max_attempts: None,
            }
        );
    }

    #[test]
    fn test_bad_range() {
        assert!(matches!(
            parse(args("keygen --range 500-700")),
            Err(CliError::Usage(_))
        ));
        assert!(parse(args("keygen --range a..b")).is_err());
        assert!(parse(args("keygen --range")).is_err());
    }

    #[test]
    fn test_encrypt_modes() {
        assert_eq!(
            parse(args("encrypt --key bob.json hello")).unwrap(),
            Command::Encrypt {
                key: PathBuf::from("bob.json"),
                wrapping: Wrapping::Plain(Mode::Checked),
                text: Some("hello".to_string()),
            }
        );
        assert_eq!(
            parse(args("encrypt --compat --key bob.json")).unwrap(),
            Command::Encrypt {
                key: PathBuf::from("bob.json"),
                wrapping: Wrapping::Plain(Mode::Compat),
                text: None,
            }
        );
    }

    #[test]
    fn test_decrypt_sealed() {
        assert_eq!(
            parse(args("decrypt --key bob.json --sealed [1,2,3]")).unwrap(),
            Command::Decrypt {
                key: PathBuf::from("bob.json"),
                wrapping: Wrapping::Sealed,
                ciphertext: Some("[1,2,3]".to_string()),
            }
        );
    }

    #[test]
    fn test_cipher_arg_errors() {
        assert!(parse(args("encrypt hello")).is_err());
        assert!(parse(args("encrypt --key k.json --compat --sealed hi")).is_err());
        assert!(parse(args("decrypt --key k.json one two")).is_err());
        assert!(parse(args("sign --key k.json")).is_err());
    }
}
