//! # hog-ai: Strategies for Hog
//!
//! Strategy implementations for the Hog dice game and a Monte Carlo harness
//! for comparing them.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait every strategy implements (re-exported from `hog-engine`)
//! - [`always_roll`] - Fixed number of dice every turn
//! - [`bacon`] - Take Free Bacon when it is worth enough
//! - [`swap`] - Take Free Bacon when it triggers a favourable Swine Swap
//! - [`final_strategy`] - Combined decision tree built from the rules above
//! - [`harness`] - Averaging, win rates and experiment runs
//! - [`create_strategy`] - Factory function for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use hog_ai::create_strategy;
//! use hog_ai::harness::average_win_rate;
//! use hog_engine::dice::DiceBox;
//! use hog_engine::rules::Rules;
//!
//! let candidate = create_strategy("final").unwrap();
//! let baseline = create_strategy("always_roll(5)").unwrap();
//! let mut dice = DiceBox::seeded(42);
//!
//! let rate = average_win_rate(
//!     candidate.as_ref(),
//!     baseline.as_ref(),
//!     Rules::default(),
//!     &mut dice,
//!     50,
//! )
//! .unwrap();
//! assert!((0.0..=1.0).contains(&rate));
//! ```
//!
//! ## Strategy Names
//!
//! - `"always_roll(N)"` or `"always:N"` - roll N dice (0 to 10)
//! - `"bacon"` / `"bacon_strategy"` - [`bacon::BaconStrategy`] with default margin
//! - `"swap"` / `"swap_strategy"` - [`swap::SwapStrategy`]
//! - `"final"` / `"final_strategy"` - [`final_strategy::FinalStrategy`]

pub use hog_engine::player::Strategy;
use hog_engine::rules::MAX_ROLLS;

pub mod always_roll;
pub mod bacon;
pub mod errors;
pub mod final_strategy;
pub mod harness;
pub mod swap;

pub use errors::ExperimentError;

/// Factory function to create strategies by name.
///
/// # Example
///
/// ```rust
/// use hog_ai::{Strategy, create_strategy};
///
/// let strategy = create_strategy("always:6").unwrap();
/// assert_eq!(strategy.name(), "always_roll(6)");
/// assert_eq!(strategy.num_rolls(10, 20), 6);
///
/// assert!(create_strategy("reckless").is_err());
/// ```
///
/// # Errors
///
/// [`ExperimentError::UnknownStrategy`] for a name that matches no strategy,
/// including `always_roll` with more than 10 dice.
pub fn create_strategy(name: &str) -> Result<Box<dyn Strategy>, ExperimentError> {
    let normalized = name.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "bacon" | "bacon_strategy" => Ok(Box::new(bacon::BaconStrategy::default())),
        "swap" | "swap_strategy" => Ok(Box::new(swap::SwapStrategy::default())),
        "final" | "final_strategy" => Ok(Box::new(final_strategy::FinalStrategy::default())),
        other => parse_always_roll(other)
            .map(|n| Box::new(always_roll::always_roll(n)) as Box<dyn Strategy>)
            .ok_or_else(|| ExperimentError::UnknownStrategy(name.to_string())),
    }
}

fn parse_always_roll(name: &str) -> Option<u32> {
    let count = name
        .strip_prefix("always:")
        .or_else(|| {
            name.strip_prefix("always_roll(")
                .and_then(|rest| rest.strip_suffix(')'))
        })?;
    let n: u32 = count.trim().parse().ok()?;
    (n <= MAX_ROLLS).then_some(n)
}
