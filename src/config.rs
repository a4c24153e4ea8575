//! Command-line configuration for the `chess_rules` binary.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const USAGE: &str = "usage: chess_rules [LOG_FILE] [--white human|random] \
[--black human|random] [--seed N] [-v|--verbose]";

/// Who supplies the moves for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Human,
    Random,
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "console" => Ok(SourceKind::Human),
            "random" => Ok(SourceKind::Random),
            _ => Err(ConfigError::InvalidSource {
                found: s.to_string(),
            }),
        }
    }
}

/// Error type for command-line parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option given without its value
    MissingValue { option: String },
    /// Unknown move source name
    InvalidSource { found: String },
    /// Seed is not an unsigned integer
    InvalidSeed { found: String },
    /// Unrecognised option or a second log file
    UnexpectedArgument { arg: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue { option } => write!(f, "Option '{option}' needs a value"),
            ConfigError::InvalidSource { found } => {
                write!(f, "Invalid move source '{found}', expected 'human' or 'random'")
            }
            ConfigError::InvalidSeed { found } => write!(f, "Invalid seed '{found}'"),
            ConfigError::UnexpectedArgument { arg } => write!(f, "Unexpected argument '{arg}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for one run of the binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// FEN log to resume from and append to; `None` plays a fresh game
    pub log_path: Option<PathBuf>,
    pub white: SourceKind,
    pub black: SourceKind,
    /// Seed for random move sources; `None` draws from entropy
    pub seed: Option<u64>,
    pub verbose: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_path: None,
            white: SourceKind::Human,
            black: SourceKind::Human,
            seed: None,
            verbose: false,
            help: false,
        }
    }
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            let mut value = |option: &str| {
                args.next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| ConfigError::MissingValue {
                        option: option.to_string(),
                    })
            };
            match arg {
                "--white" => config.white = value(arg)?.parse()?,
                "--black" => config.black = value(arg)?.parse()?,
                "--seed" => {
                    let seed = value(arg)?;
                    config.seed = Some(
                        seed.parse()
                            .map_err(|_| ConfigError::InvalidSeed { found: seed.clone() })?,
                    );
                }
                "-v" | "--verbose" => config.verbose = true,
                "-h" | "--help" => config.help = true,
                _ if arg.starts_with('-') || config.log_path.is_some() => {
                    return Err(ConfigError::UnexpectedArgument {
                        arg: arg.to_string(),
                    })
                }
                _ => config.log_path = Some(PathBuf::from(arg)),
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_command_line() {
        let config = Config::from_args([
            "game.log", "--white", "random", "--black", "Human", "--seed", "42", "-v",
        ])
        .unwrap();
        assert_eq!(config.log_path, Some(PathBuf::from("game.log")));
        assert_eq!(config.white, SourceKind::Random);
        assert_eq!(config.black, SourceKind::Human);
        assert_eq!(config.seed, Some(42));
        assert!(config.verbose);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Config::from_args(["--white"]),
            Err(ConfigError::MissingValue {
                option: "--white".to_string()
            })
        );
        assert_eq!(
            Config::from_args(["--black", "robot"]),
            Err(ConfigError::InvalidSource {
                found: "robot".to_string()
            })
        );
        assert_eq!(
            Config::from_args(["--seed", "-1"]),
            Err(ConfigError::InvalidSeed {
                found: "-1".to_string()
            })
        );
        assert_eq!(
            Config::from_args(["a.log", "b.log"]),
            Err(ConfigError::UnexpectedArgument {
                arg: "b.log".to_string()
            })
        );
    }
}
