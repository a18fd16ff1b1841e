//! Monte Carlo experiments for comparing strategies.
//!
//! Everything here draws from a caller-supplied [`DiceBox`], so a seeded box
//! makes a whole experiment run reproducible.

use hog_engine::dice::{Dice, DiceBox, DiceKind};
use hog_engine::errors::GameError;
use hog_engine::game::Game;
use hog_engine::player::Strategy;
use hog_engine::rules::{MAX_ROLLS, Rules};
use hog_engine::turn::roll_dice;
use serde::{Deserialize, Serialize};

use crate::always_roll::always_roll;
use crate::bacon::BaconStrategy;
use crate::create_strategy;
use crate::errors::ExperimentError;
use crate::final_strategy::FinalStrategy;
use crate::swap::SwapStrategy;

/// Default Monte Carlo sample count.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Wraps `f` so that each call runs it `num_samples` times with the same
/// arguments and returns the mean result.
///
/// # Examples
///
/// ```
/// use hog_ai::harness::make_averaged;
/// use hog_engine::dice::TestDice;
/// use hog_engine::turn::roll_dice;
///
/// let mut dice = TestDice::new([3, 1, 5, 6]).unwrap();
/// let mut averaged = make_averaged(|n| roll_dice(n, &mut dice), 1000);
/// // 3 and 1 bust to 0, 5 and 6 score 11
/// assert_eq!(averaged(2).unwrap(), 5.5);
/// ```
pub fn make_averaged<A, T, F>(
    mut f: F,
    num_samples: usize,
) -> impl FnMut(A) -> Result<f64, ExperimentError>
where
    A: Clone,
    T: Into<f64>,
    F: FnMut(A) -> Result<T, GameError>,
{
    move |args: A| {
        if num_samples == 0 {
            return Err(ExperimentError::NoSamples);
        }
        let mut total = 0.0;
        for _ in 0..num_samples {
            total += f(args.clone())?.into();
        }
        Ok(total / num_samples as f64)
    }
}

/// Number of dice (1 to 10) with the highest average [`roll_dice`] score.
///
/// Ties go to the fewest dice; if every average is zero the answer is 1.
pub fn max_scoring_num_rolls(
    dice: &mut dyn Dice,
    num_samples: usize,
) -> Result<u32, ExperimentError> {
    let mut best_rolls = 1;
    let mut best_average = 0.0;
    for num_rolls in 1..=MAX_ROLLS {
        let average = make_averaged(|n| roll_dice(n, &mut *dice), num_samples)(num_rolls)?;
        tracing::trace!(num_rolls, average, "averaged roll");
        if average > best_average {
            best_average = average;
            best_rolls = num_rolls;
        }
    }
    Ok(best_rolls)
}

/// Winner of a finished game: 0 if player 0 scored strictly more, else 1.
/// A tie goes to player 1.
pub fn winner_of(score0: u32, score1: u32) -> usize {
    if score0 > score1 { 0 } else { 1 }
}

/// Plays one game and returns the index of the winner.
pub fn winner(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    rules: Rules,
    dice: &mut DiceBox,
) -> Result<usize, GameError> {
    let (score0, score1) = Game::new(strategy0, strategy1)
        .with_rules(rules)
        .play(dice)?;
    Ok(winner_of(score0, score1))
}

/// Average win rate of `strategy` against `baseline`, taken over games where
/// it moves first and games where it moves second.
pub fn average_win_rate(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    rules: Rules,
    dice: &mut DiceBox,
    num_samples: usize,
) -> Result<f64, ExperimentError> {
    let as_player_0 = 1.0
        - make_averaged(
            |()| winner(strategy, baseline, rules, &mut *dice).map(|w| w as f64),
            num_samples,
        )(())?;
    let as_player_1 = make_averaged(
        |()| winner(baseline, strategy, rules, &mut *dice).map(|w| w as f64),
        num_samples,
    )(())?;
    Ok((as_player_0 + as_player_1) / 2.0)
}

/// Which experiments [`run_experiments`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentToggles {
    pub max_scoring_num_rolls: bool,
    pub always_roll_8: bool,
    pub bacon_strategy: bool,
    pub swap_strategy: bool,
    pub final_strategy: bool,
}

impl ExperimentToggles {
    pub fn all() -> Self {
        Self {
            max_scoring_num_rolls: true,
            always_roll_8: true,
            bacon_strategy: true,
            swap_strategy: true,
            final_strategy: true,
        }
    }

    pub fn any(&self) -> bool {
        self.max_scoring_num_rolls
            || self.always_roll_8
            || self.bacon_strategy
            || self.swap_strategy
            || self.final_strategy
    }
}

impl Default for ExperimentToggles {
    fn default() -> Self {
        Self {
            max_scoring_num_rolls: false,
            always_roll_8: false,
            bacon_strategy: false,
            swap_strategy: true,
            final_strategy: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub num_samples: usize,
    pub rules: Rules,
    /// Strategy name understood by [`create_strategy`]
    pub baseline: String,
    pub toggles: ExperimentToggles,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_samples: DEFAULT_SAMPLES,
            rules: Rules::default(),
            baseline: "always_roll(5)".into(),
            toggles: ExperimentToggles::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxScoringRolls {
    pub six_sided: u32,
    pub four_sided: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRate {
    pub strategy: String,
    pub win_rate: f64,
}

/// Results of a [`run_experiments`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub num_samples: usize,
    pub baseline: String,
    #[serde(default)]
    pub max_scoring_num_rolls: Option<MaxScoringRolls>,
    #[serde(default)]
    pub win_rates: Vec<WinRate>,
}

/// Runs every experiment enabled in `config.toggles`.
pub fn run_experiments(
    config: &ExperimentConfig,
    dice: &mut DiceBox,
) -> Result<ExperimentReport, ExperimentError> {
    let baseline = create_strategy(&config.baseline)?;
    let mut report = ExperimentReport {
        num_samples: config.num_samples,
        baseline: baseline.name().to_string(),
        max_scoring_num_rolls: None,
        win_rates: Vec::new(),
    };
    let toggles = config.toggles;

    if toggles.max_scoring_num_rolls {
        let six_sided =
            max_scoring_num_rolls(dice.select(DiceKind::SixSided), config.num_samples)?;
        let four_sided =
            max_scoring_num_rolls(dice.select(DiceKind::FourSided), config.num_samples)?;
        tracing::info!(six_sided, four_sided, "max scoring num rolls");
        report.max_scoring_num_rolls = Some(MaxScoringRolls {
            six_sided,
            four_sided,
        });
    }

    let mut candidates: Vec<Box<dyn Strategy>> = Vec::new();
    if toggles.always_roll_8 {
        candidates.push(Box::new(always_roll(8)));
    }
    if toggles.bacon_strategy {
        candidates.push(Box::new(BaconStrategy::default()));
    }
    if toggles.swap_strategy {
        candidates.push(Box::new(SwapStrategy::default()));
    }
    if toggles.final_strategy {
        candidates.push(Box::new(FinalStrategy::default()));
    }

    for candidate in &candidates {
        let win_rate = average_win_rate(
            candidate.as_ref(),
            baseline.as_ref(),
            config.rules,
            dice,
            config.num_samples,
        )?;
        tracing::info!(strategy = candidate.name(), win_rate, "win rate");
        report.win_rates.push(WinRate {
            strategy: candidate.name().to_string(),
            win_rate,
        });
    }

    Ok(report)
}
