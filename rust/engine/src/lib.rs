//! # hog-engine: Hog Rules Engine
//!
//! A deterministic engine for the two-player dice game Hog. Players take
//! turns rolling up to ten dice; the first to reach the goal score wins.
//!
//! ## Core Modules
//!
//! - [`dice`] - Dice sources: seeded fair dice, scripted test dice, and the [`dice::DiceBox`]
//! - [`rules`] - House rules: Free Bacon, Hogtimus Prime, Hog Wild, Swine Swap
//! - [`turn`] - Turn resolution, including Pig Out
//! - [`game`] - The game loop alternating two strategies
//! - [`player`] - The [`player::Strategy`] trait
//! - [`logger`] - Turn and game records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use hog_engine::dice::DiceBox;
//! use hog_engine::game::play;
//!
//! let always_five = |_: u32, _: u32| 5;
//! let mut dice = DiceBox::seeded(42);
//!
//! let (score0, score1) = play(&always_five, &always_five, &mut dice).unwrap();
//! assert!(score0 >= 100 || score1 >= 100);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Seeded dice reproduce the same game:
//!
//! ```rust
//! use hog_engine::dice::DiceBox;
//! use hog_engine::game::play;
//!
//! let four = |_: u32, _: u32| 4;
//! let first = play(&four, &four, &mut DiceBox::seeded(7)).unwrap();
//! let second = play(&four, &four, &mut DiceBox::seeded(7)).unwrap();
//! assert_eq!(first, second);
//! ```

pub mod dice;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod turn;
