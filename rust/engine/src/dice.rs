use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Mixed into the base seed so the four-sided stream differs from the six-sided one.
const FOUR_SIDED_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// A source of dice outcomes. Each call to [`Dice::roll`] yields one positive
/// integer outcome.
///
/// Any `FnMut() -> u32` closure is a `Dice`, so ad-hoc sources can be passed
/// wherever the engine expects dice:
///
/// ```
/// use hog_engine::dice::Dice;
/// use hog_engine::turn::roll_dice;
///
/// let mut always_three = || 3;
/// assert_eq!(roll_dice(2, &mut always_three).unwrap(), 6);
/// ```
pub trait Dice {
    fn roll(&mut self) -> u32;
}

impl<F> Dice for F
where
    F: FnMut() -> u32,
{
    fn roll(&mut self) -> u32 {
        self()
    }
}

/// The two standard dice used by Hog.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiceKind {
    /// Outcomes 1..=4, used when Hog Wild applies
    FourSided,
    /// Outcomes 1..=6
    SixSided,
}

impl DiceKind {
    pub fn sides(self) -> u32 {
        match self {
            DiceKind::FourSided => 4,
            DiceKind::SixSided => 6,
        }
    }
}

/// Fair dice driven by a seeded ChaCha20 RNG. The same seed always produces
/// the same sequence of outcomes.
#[derive(Debug, Clone)]
pub struct SeededDice {
    kind: DiceKind,
    rng: ChaCha20Rng,
}

impl SeededDice {
    pub fn new(kind: DiceKind, seed: u64) -> Self {
        Self {
            kind,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn kind(&self) -> DiceKind {
        self.kind
    }
}

impl Dice for SeededDice {
    fn roll(&mut self) -> u32 {
        let outcome = self.rng.random_range(1..=self.kind.sides());
        tracing::trace!(sides = self.kind.sides(), outcome, "rolled");
        outcome
    }
}

/// Scripted dice that replay a fixed sequence of outcomes, starting over
/// once the sequence is exhausted.
///
/// # Examples
///
/// ```
/// use hog_engine::dice::{Dice, TestDice};
///
/// let mut dice = TestDice::new([4, 1, 2]).unwrap();
/// let rolled: Vec<u32> = (0..5).map(|_| dice.roll()).collect();
/// assert_eq!(rolled, vec![4, 1, 2, 4, 1]);
/// assert_eq!(dice.rolls_made(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct TestDice {
    outcomes: Vec<u32>,
    position: usize,
    rolls_made: usize,
}

impl TestDice {
    pub fn new(outcomes: impl Into<Vec<u32>>) -> Result<Self, GameError> {
        let outcomes = outcomes.into();
        if outcomes.is_empty() {
            return Err(GameError::EmptyDiceSequence);
        }
        if let Some(&bad) = outcomes.iter().find(|&&o| o == 0) {
            return Err(GameError::InvalidOutcome(bad));
        }
        Ok(Self {
            outcomes,
            position: 0,
            rolls_made: 0,
        })
    }

    /// Number of times this source has been rolled.
    pub fn rolls_made(&self) -> usize {
        self.rolls_made
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> u32 {
        let outcome = self.outcomes[self.position];
        self.position = (self.position + 1) % self.outcomes.len();
        self.rolls_made += 1;
        outcome
    }
}

/// Holds the dice a game may need and hands out the kind the rules select.
pub struct DiceBox {
    six_sided: Box<dyn Dice>,
    // None means the six-sided source also serves four-sided rolls
    four_sided: Option<Box<dyn Dice>>,
}

impl DiceBox {
    pub fn new(six_sided: impl Dice + 'static, four_sided: impl Dice + 'static) -> Self {
        Self {
            six_sided: Box::new(six_sided),
            four_sided: Some(Box::new(four_sided)),
        }
    }

    /// Fair six- and four-sided dice on independent streams derived from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            SeededDice::new(DiceKind::SixSided, seed),
            SeededDice::new(DiceKind::FourSided, seed ^ FOUR_SIDED_STREAM),
        )
    }

    /// A single source used for every roll regardless of the selected kind.
    pub fn uniform(dice: impl Dice + 'static) -> Self {
        Self {
            six_sided: Box::new(dice),
            four_sided: None,
        }
    }

    pub fn select(&mut self, kind: DiceKind) -> &mut dyn Dice {
        match (kind, self.four_sided.as_mut()) {
            (DiceKind::FourSided, Some(four)) => four.as_mut(),
            _ => self.six_sided.as_mut(),
        }
    }
}

impl std::fmt::Debug for DiceBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiceBox")
            .field("uniform", &self.four_sided.is_none())
            .finish()
    }
}
