use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid number of rolls: {num_rolls}, maximum: {maximum}")]
    InvalidRollCount { num_rolls: u32, maximum: u32 },
    #[error("Must roll at least once")]
    NoRolls,
    #[error("The game should be over: score {score} has reached goal {goal}")]
    GameOver { score: u32, goal: u32 },
    #[error("Invalid player index: {0} (expected 0 or 1)")]
    InvalidPlayer(usize),
    #[error("Test dice need at least one outcome")]
    EmptyDiceSequence,
    #[error("Dice outcome must be positive, got {0}")]
    InvalidOutcome(u32),
}
