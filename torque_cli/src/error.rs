use std::path::PathBuf;

use thiserror::Error;
use torque_core::CalcError;

pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Could not read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CliError {
    /// Engine error, if this wraps one
    pub fn as_calc(&self) -> Option<&CalcError> {
        match self {
            CliError::Calc(e) => Some(e),
            _ => None,
        }
    }
}
