//! Swine Swap strategy.

use hog_engine::player::Strategy;
use hog_engine::rules::{free_bacon, is_swap};

/// Rolls 0 dice when Free Bacon would leave the player behind but trigger a
/// swap with the opponent, and `num_rolls` dice otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStrategy {
    pub num_rolls: u32,
}

impl SwapStrategy {
    pub fn new(num_rolls: u32) -> Self {
        Self { num_rolls }
    }

    /// Whether taking Free Bacon now swaps into the opponent's higher score.
    pub fn beneficial_swap(score: u32, opponent_score: u32) -> bool {
        let after_bacon = score + free_bacon(opponent_score);
        after_bacon < opponent_score && is_swap(after_bacon, opponent_score)
    }
}

impl Default for SwapStrategy {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        if Self::beneficial_swap(score, opponent_score) {
            0
        } else {
            self.num_rolls
        }
    }

    fn name(&self) -> &str {
        "swap_strategy"
    }
}
