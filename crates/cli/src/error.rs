//! Unified error handling for the CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end a console session early.
///
/// Bad user input is never one of these; it is reported on the console and
/// the user is asked again.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input reached end-of-file while a value was expected.
    #[error("Input closed")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        assert_eq!(CliError::InputClosed.to_string(), "Input closed");

        let err = CliError::from(ConfigError::InvalidEnvVar(
            "INKWELL_CURRENCY".to_string(),
            "bad".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid environment variable INKWELL_CURRENCY: bad"
        );
    }
}
