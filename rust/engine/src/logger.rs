use serde::{Deserialize, Serialize};

use crate::dice::DiceKind;

/// What happened during a single turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Player who took the turn (0 or 1)
    pub player: usize,
    /// Dice the strategy asked for
    pub num_rolls: u32,
    /// Dice used, or None for Free Bacon
    pub dice: Option<DiceKind>,
    /// Points scored by the player
    pub gain: u32,
    /// Points awarded to the opponent by Piggy Back
    #[serde(default)]
    pub opponent_gain: u32,
    /// Whether Swine Swap exchanged the scores after the turn
    pub swapped: bool,
    /// Scores after the turn, player 0 first
    pub scores: [u32; 2],
}

/// Turn-by-turn history of a finished game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub goal: u32,
    pub turns: Vec<TurnRecord>,
    pub final_scores: [u32; 2],
}

impl GameRecord {
    pub fn new(goal: u32, starting_scores: [u32; 2]) -> Self {
        Self {
            goal,
            turns: Vec::new(),
            final_scores: starting_scores,
        }
    }

    pub fn push(&mut self, turn: TurnRecord) {
        self.final_scores = turn.scores;
        self.turns.push(turn);
    }

    pub fn swaps(&self) -> usize {
        self.turns.iter().filter(|t| t.swapped).count()
    }
}
