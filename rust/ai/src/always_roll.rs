//! The simplest strategy: a fixed number of dice every turn.

use hog_engine::player::Strategy;

/// Rolls the same number of dice regardless of the scores.
///
/// # Example
///
/// ```rust
/// use hog_ai::always_roll::always_roll;
/// use hog_ai::Strategy;
///
/// let strategy = always_roll(5);
/// assert_eq!(strategy.num_rolls(0, 0), 5);
/// assert_eq!(strategy.num_rolls(99, 99), 5);
/// assert_eq!(strategy.name(), "always_roll(5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlwaysRoll {
    n: u32,
    name: String,
}

impl AlwaysRoll {
    pub fn new(n: u32) -> Self {
        Self {
            n,
            name: format!("always_roll({})", n),
        }
    }

    pub fn dice(&self) -> u32 {
        self.n
    }
}

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.n
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll::new(n)
}
