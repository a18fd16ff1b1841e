use serde::{Deserialize, Serialize};

use crate::dice::DiceKind;
use crate::errors::GameError;

/// The goal of Hog is to score 100 points.
pub const GOAL_SCORE: u32 = 100;

/// Most dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

/// Game-wide parameters.
///
/// `piggy_back` enables the opponent bonus for busted turns: when a player
/// rolls at least one die and scores 0, the opponent gains points equal to
/// the number of dice rolled. It is off by default, so a bust only costs the
/// active player the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub goal: u32,
    pub piggy_back: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            piggy_back: false,
        }
    }
}

/// Trial division primality test. 0 and 1 are not prime.
///
/// ```
/// use hog_engine::rules::is_prime;
///
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(is_prime(13));
/// assert!(!is_prime(21));
/// ```
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Smallest prime strictly greater than `n`.
pub fn next_prime(n: u32) -> u32 {
    let mut candidate = n + 1;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Hogtimus Prime: a prime turn score is bumped to the next prime.
pub fn hogtimus_prime(points: u32) -> u32 {
    if is_prime(points) {
        next_prime(points)
    } else {
        points
    }
}

fn largest_digit(mut n: u32) -> u32 {
    let mut largest = n % 10;
    while n > 0 {
        largest = largest.max(n % 10);
        n /= 10;
    }
    largest
}

/// Points scored by rolling zero dice: one more than the largest digit of
/// the opponent's score, with Hogtimus Prime applied.
///
/// ```
/// use hog_engine::rules::free_bacon;
///
/// assert_eq!(free_bacon(35), 6);
/// assert_eq!(free_bacon(46), 11); // 7 is prime
/// assert_eq!(free_bacon(0), 1);
/// ```
pub fn free_bacon(opponent_score: u32) -> u32 {
    hogtimus_prime(1 + largest_digit(opponent_score))
}

/// Hog Wild: four-sided dice when the sum of both scores is a multiple of 7.
pub fn select_dice(score: u32, opponent_score: u32) -> DiceKind {
    if (score + opponent_score) % 7 == 0 {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}

/// Swine Swap: true when the last two digits of the scores mirror each other,
/// such as 19 and 91.
pub fn is_swap(score0: u32, score1: u32) -> bool {
    let tens = |n: u32| (n / 10) % 10;
    let ones = |n: u32| n % 10;
    tens(score0) == ones(score1) && tens(score1) == ones(score0)
}

/// The other player, for a player numbered 0 or 1.
pub fn other(player: usize) -> Result<usize, GameError> {
    match player {
        0 | 1 => Ok(1 - player),
        _ => Err(GameError::InvalidPlayer(player)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_below_thirty() {
        let primes: Vec<u32> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn next_prime_is_strictly_greater() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 3);
        assert_eq!(next_prime(7), 11);
        assert_eq!(next_prime(13), 17);
        assert_eq!(next_prime(24), 29);
    }

    #[test]
    fn hogtimus_prime_leaves_composites_alone() {
        assert_eq!(hogtimus_prime(0), 0);
        assert_eq!(hogtimus_prime(1), 1);
        assert_eq!(hogtimus_prime(9), 9);
        assert_eq!(hogtimus_prime(11), 13);
        assert_eq!(hogtimus_prime(23), 29);
    }

    #[test]
    fn largest_digit_of_scores() {
        assert_eq!(largest_digit(0), 0);
        assert_eq!(largest_digit(7), 7);
        assert_eq!(largest_digit(70), 7);
        assert_eq!(largest_digit(49), 9);
        assert_eq!(largest_digit(100), 1);
    }

    #[test]
    fn free_bacon_values() {
        assert_eq!(free_bacon(9), 10);
        assert_eq!(free_bacon(82), 9);
        assert_eq!(free_bacon(12), 5); // 3 -> 5
        assert_eq!(free_bacon(41), 7); // 5 -> 7
        assert_eq!(free_bacon(60), 11); // 7 -> 11
        assert_eq!(free_bacon(70), 8);
    }

    #[test]
    fn hog_wild_selects_four_sided_on_multiples_of_seven() {
        assert_eq!(select_dice(3, 4), DiceKind::FourSided);
        assert_eq!(select_dice(3, 5), DiceKind::SixSided);
        assert_eq!(select_dice(0, 0), DiceKind::FourSided);
        assert_eq!(select_dice(50, 20), DiceKind::FourSided);
    }

    #[test]
    fn swine_swap_digits() {
        assert!(is_swap(19, 91));
        assert!(is_swap(12, 21));
        assert!(!is_swap(10, 20));
        assert!(is_swap(1, 10));
        assert!(is_swap(119, 91));
        assert!(!is_swap(13, 91));
    }

    #[test]
    fn other_flips_players() {
        assert_eq!(other(0), Ok(1));
        assert_eq!(other(1), Ok(0));
        for p in 0..2 {
            assert_eq!(other(other(p).unwrap()), Ok(p));
        }
        assert_eq!(other(2), Err(GameError::InvalidPlayer(2)));
    }
}
