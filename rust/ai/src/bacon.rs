//! Free Bacon strategy.

use hog_engine::player::Strategy;
use hog_engine::rules::free_bacon;

/// Rolls 0 dice when Free Bacon would score at least `margin` points and
/// `num_rolls` dice otherwise.
///
/// # Example
///
/// ```rust
/// use hog_ai::bacon::BaconStrategy;
/// use hog_ai::Strategy;
///
/// let bacon = BaconStrategy::default();
/// // Free Bacon against 70 scores 8
/// assert_eq!(bacon.num_rolls(0, 70), 0);
/// // against 50 it only scores 6
/// assert_eq!(bacon.num_rolls(0, 50), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaconStrategy {
    pub margin: u32,
    pub num_rolls: u32,
}

impl BaconStrategy {
    pub fn new(margin: u32, num_rolls: u32) -> Self {
        Self { margin, num_rolls }
    }
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self::new(8, 5)
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if free_bacon(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }

    fn name(&self) -> &str {
        "bacon_strategy"
    }
}
