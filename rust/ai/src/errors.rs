use hog_engine::errors::GameError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExperimentError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("Averaging needs at least one sample")]
    NoSamples,
    #[error(transparent)]
    Game(#[from] GameError),
}
