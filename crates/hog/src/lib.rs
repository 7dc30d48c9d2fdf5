// ABOUTME: Core library for simulating the dice game Hog.
// ABOUTME: Provides turn scoring, the game loop, strategies, and Monte Carlo evaluation.

//! # Hog
//!
//! A simulator for Hog, a two-player dice game where the first player to
//! reach 100 points wins.
//!
//! ## Quick Start
//!
//! ```
//! use hog::{always_roll, average_win_rate_vs_baseline, play, BaconStrategy, StandardDice};
//!
//! let mut dice = StandardDice::with_seed(42);
//!
//! // Play one game
//! let result = play(&always_roll(4), &BaconStrategy::default(), &mut dice).unwrap();
//! println!("{}", result);  // e.g., "87 - 104"
//!
//! // Estimate a strategy's strength against always rolling 5
//! let rate = average_win_rate_vs_baseline(&BaconStrategy::default(), 1000, &mut dice).unwrap();
//! println!("Win rate: {:.3}", rate);  // ~0.55
//! ```
//!
//! ## Rules
//!
//! - Pig Out: rolling any 1 makes the whole turn worth 1 point.
//! - Free Bacon: rolling zero dice scores one more than the largest digit of
//!   the opponent's score.
//! - Hog Wild: four-sided dice are used when the scores sum to a multiple of 7.
//! - Swine Swap: the scores are exchanged when one is exactly double the other.

pub mod dice;
pub mod error;
pub mod eval;
pub mod game;
pub mod strategy;
pub mod turn;

pub use dice::{Dice, DiceKind, DiceSet, FairDice, StandardDice, TestDice};
pub use error::{Error, Result};
pub use eval::{
    average_win_rate, average_win_rate_vs_baseline, make_averaged, max_scoring_num_rolls, winner,
    Averaged, Outcome, Trial, DEFAULT_TRIALS,
};
pub use game::{
    play, play_with, swine_swap, Alternate, Game, GameConfig, GameResult, GameState, Player, Turn,
    TurnOrder,
};
pub use strategy::{
    always_roll, AlwaysRoll, BaconStrategy, Strategy, StrategySpec, SwapStrategy, BACON_MARGIN,
    BASELINE_NUM_ROLLS,
};
pub use turn::{free_bacon, roll_dice, select_dice, take_turn, GOAL_SCORE, MAX_ROLLS};
