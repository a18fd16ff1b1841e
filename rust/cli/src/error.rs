//! Error types for the CLI application.
//!
//! Every variant maps to exit code [`crate::exit_code::ERROR`] in [`crate::run`].

use hog_ai::ExperimentError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error writing to stdout or stderr, or reading a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Experiment failed: {0}")]
    Experiment(#[from] ExperimentError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use hog_engine::errors::GameError;

    #[test]
    fn messages_name_the_failure() {
        let err = CliError::from(ConfigError::Invalid("goal must be >= 1".into()));
        assert_eq!(err.to_string(), "Invalid configuration: goal must be >= 1");

        let err = CliError::from(ExperimentError::UnknownStrategy("coin".into()));
        assert_eq!(err.to_string(), "Experiment failed: Unknown strategy: coin");
    }

    #[test]
    fn game_errors_convert_through_experiments() {
        let err = CliError::from(ExperimentError::from(GameError::NoRolls));
        assert!(matches!(
            err,
            CliError::Experiment(ExperimentError::Game(GameError::NoRolls))
        ));
    }
}
