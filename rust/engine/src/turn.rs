use crate::dice::Dice;
use crate::errors::GameError;
use crate::rules::{free_bacon, hogtimus_prime, MAX_ROLLS};

/// Rolls `dice` exactly `num_rolls` times and returns the sum of the
/// outcomes, or 0 if any outcome was a 1 (Pig Out).
///
/// Every die is rolled even after a 1 shows up. No Hogtimus Prime bump is
/// applied here; see [`take_turn`].
///
/// # Errors
///
/// [`GameError::NoRolls`] when `num_rolls` is zero.
pub fn roll_dice(num_rolls: u32, dice: &mut dyn Dice) -> Result<u32, GameError> {
    if num_rolls == 0 {
        return Err(GameError::NoRolls);
    }
    let mut total = 0;
    let mut pig_out = false;
    for _ in 0..num_rolls {
        let outcome = dice.roll();
        if outcome == 1 {
            pig_out = true;
        } else {
            total += outcome;
        }
    }
    Ok(if pig_out { 0 } else { total })
}

/// Resolves one turn and returns the points it scores.
///
/// Rolling zero dice takes Free Bacon, which never touches the dice.
/// Otherwise the dice are rolled via [`roll_dice`]. Either way a prime
/// result is bumped to the next prime.
///
/// # Errors
///
/// - [`GameError::InvalidRollCount`] when `num_rolls` exceeds 10
/// - [`GameError::GameOver`] when `opponent_score` has already reached `goal`
///
/// # Examples
///
/// ```
/// use hog_engine::dice::TestDice;
/// use hog_engine::turn::take_turn;
///
/// let mut dice = TestDice::new([4, 3]).unwrap();
/// // 4 + 3 = 7 is prime, so the turn scores 11
/// assert_eq!(take_turn(2, 0, 100, &mut dice).unwrap(), 11);
/// // Free Bacon against 35: 1 + 5
/// assert_eq!(take_turn(0, 35, 100, &mut dice).unwrap(), 6);
/// ```
pub fn take_turn(
    num_rolls: u32,
    opponent_score: u32,
    goal: u32,
    dice: &mut dyn Dice,
) -> Result<u32, GameError> {
    if num_rolls > MAX_ROLLS {
        return Err(GameError::InvalidRollCount {
            num_rolls,
            maximum: MAX_ROLLS,
        });
    }
    if opponent_score >= goal {
        return Err(GameError::GameOver {
            score: opponent_score,
            goal,
        });
    }
    if num_rolls == 0 {
        return Ok(free_bacon(opponent_score));
    }
    let rolled = roll_dice(num_rolls, dice)?;
    Ok(hogtimus_prime(rolled))
}
