//! CLI error type and exit code mapping

use thiserror::Error;
use xepnotify_core::{ExError, ExErrorKind, XepError};

/// Process exit codes
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const NOT_INTERACTIVE: i32 = 2;
    pub const MISSING_CONFIG: i32 = 3;
    pub const ABORTED: i32 = 4;
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Registry(#[from] XepError),

    #[error("Cannot ask for confirmation (stdio is not a TTY), but -y is not given either. Aborting.")]
    NotInteractive,

    #[error("Missing configuration: option {option:?} in section [smtp]")]
    MissingConfig { option: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid mail address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("SMTP error: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotInteractive => exit_code::NOT_INTERACTIVE,
            CliError::MissingConfig { .. } => exit_code::MISSING_CONFIG,
            CliError::Registry(_)
            | CliError::InvalidConfig(_)
            | CliError::InvalidAddress { .. }
            | CliError::Transport(_)
            | CliError::Io(_) => exit_code::FAILURE,
        }
    }
}

impl From<&CliError> for ExError {
    fn from(err: &CliError) -> Self {
        let kind = match err {
            CliError::Registry(xep_err) => return ExError::from(xep_err.clone()),
            CliError::NotInteractive
            | CliError::MissingConfig { .. }
            | CliError::InvalidConfig(_) => ExErrorKind::Config,
            CliError::InvalidAddress { .. } => ExErrorKind::InvalidValue,
            CliError::Transport(_) => ExErrorKind::Transport,
            CliError::Io(_) => ExErrorKind::Io,
        };
        ExError::new(kind).with_message(err.to_string())
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::InvalidConfig(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for CliError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        CliError::Transport(err.to_string())
    }
}
