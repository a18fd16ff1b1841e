//! Combined strategy built from the Swine Swap and Free Bacon rules.
//!
//! The decision runs through these checks in order:
//!
//! 1. Take Free Bacon when it swaps the player up into the opponent's score.
//! 2. Take Free Bacon when it scores at least `bacon.margin` points, unless
//!    the player is ahead and the bacon would swap the lead away; then roll
//!    the fallback.
//! 3. From `late_game_score` on, play `late_game` (smaller margin, fewer dice).
//! 4. When Hog Wild applies (four-sided dice), play `hog_wild`.
//! 5. Otherwise roll `fallback` dice.
//!
//! Every threshold is a public field so variants can be compared with the
//! experiment harness.

use hog_engine::dice::DiceKind;
use hog_engine::player::Strategy;
use hog_engine::rules::{free_bacon, is_swap, select_dice};

use crate::bacon::BaconStrategy;
use crate::swap::SwapStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalStrategy {
    pub swap: SwapStrategy,
    pub bacon: BaconStrategy,
    pub late_game_score: u32,
    pub late_game: BaconStrategy,
    pub hog_wild: BaconStrategy,
    pub fallback: u32,
}

impl Default for FinalStrategy {
    fn default() -> Self {
        Self {
            swap: SwapStrategy::default(),
            bacon: BaconStrategy::default(),
            late_game_score: 40,
            late_game: BaconStrategy::new(5, 3),
            hog_wild: BaconStrategy::new(3, 2),
            fallback: 4,
        }
    }
}

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        if self.swap.num_rolls(score, opponent_score) == 0 {
            return 0;
        }
        if self.bacon.num_rolls(score, opponent_score) == 0 {
            let after_bacon = score + free_bacon(opponent_score);
            if score > opponent_score && is_swap(opponent_score, after_bacon) {
                return self.fallback;
            }
            return 0;
        }
        if score >= self.late_game_score {
            return self.late_game.num_rolls(score, opponent_score);
        }
        if select_dice(score, opponent_score) == DiceKind::FourSided {
            return self.hog_wild.num_rolls(score, opponent_score);
        }
        self.fallback
    }

    fn name(&self) -> &str {
        "final_strategy"
    }
}
