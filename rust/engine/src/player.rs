/// A player's decision policy: given the player's own score and the
/// opponent's score, how many dice (0 to 10) to roll this turn.
///
/// Strategies are stateless: asking twice with the same scores must give the
/// same answer. Any `Fn(u32, u32) -> u32` closure is a strategy.
///
/// ```
/// use hog_engine::player::Strategy;
///
/// let cautious = |score: u32, _opponent: u32| if score > 90 { 1 } else { 4 };
/// assert_eq!(cautious.num_rolls(95, 10), 1);
/// assert_eq!(cautious.name(), "custom");
/// ```
pub trait Strategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> u32,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}
