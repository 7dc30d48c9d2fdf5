// ABOUTME: Python bindings for the hog library using PyO3.
// ABOUTME: Exposes turn rules, games, and strategy experiments to Python.

use ::hog as core;
use ::hog::{FairDice, StandardDice, StrategySpec};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: core::Error) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse_strategy(spec: &str) -> PyResult<StrategySpec> {
    spec.parse().map_err(to_py_err)
}

fn standard_dice(seed: Option<u64>) -> StandardDice {
    match seed {
        Some(seed) => StandardDice::with_seed(seed),
        None => StandardDice::new(),
    }
}

/// Final scores of a game.
#[pyclass]
#[derive(Clone)]
pub struct GameResult {
    #[pyo3(get)]
    pub score0: u32,
    #[pyo3(get)]
    pub score1: u32,
}

#[pymethods]
impl GameResult {
    /// The winning player, 0 or 1. Ties go to player 1.
    fn winner(&self) -> usize {
        core::GameResult {
            score0: self.score0,
            score1: self.score1,
        }
        .winner()
        .index()
    }

    fn __repr__(&self) -> String {
        format!("GameResult(score0={}, score1={})", self.score0, self.score1)
    }
}

/// Points scored for rolling zero dice against the opponent's score.
///
/// Example:
///     >>> free_bacon(39)
///     10
#[pyfunction]
fn free_bacon(opponent_score: u32) -> PyResult<u32> {
    core::free_bacon(opponent_score).map_err(to_py_err)
}

/// Number of sides of the dice used for a turn (Hog Wild).
///
/// Example:
///     >>> select_dice(4, 24)
///     4
#[pyfunction]
fn select_dice(player_score: u32, opponent_score: u32) -> u32 {
    core::select_dice(player_score, opponent_score).sides()
}

/// Play one game between two strategies.
///
/// Args:
///     strategy0: Strategy spec for player 0, like "always:5", "bacon", or "swap"
///     strategy1: Strategy spec for player 1
///     goal: Score that ends the game (default: 100)
///     score0: Starting score for player 0
///     score1: Starting score for player 1
///     seed: Optional seed for reproducible dice
///
/// Example:
///     >>> result = play("bacon", "always:5", seed=1)
///     >>> max(result.score0, result.score1) >= 100
///     True
#[pyfunction]
#[pyo3(signature = (strategy0, strategy1, goal=core::GOAL_SCORE, score0=0, score1=0, seed=None))]
fn play(
    strategy0: &str,
    strategy1: &str,
    goal: u32,
    score0: u32,
    score1: u32,
    seed: Option<u64>,
) -> PyResult<GameResult> {
    let strategy0 = parse_strategy(strategy0)?;
    let strategy1 = parse_strategy(strategy1)?;
    let config = core::GameConfig {
        goal,
        score0,
        score1,
    };
    core::play_with(&strategy0, &strategy1, config, &mut standard_dice(seed))
        .map(|r| GameResult {
            score0: r.score0,
            score1: r.score1,
        })
        .map_err(to_py_err)
}

/// Play one game and return the winner, 0 or 1.
#[pyfunction]
#[pyo3(signature = (strategy0, strategy1, seed=None))]
fn winner(strategy0: &str, strategy1: &str, seed: Option<u64>) -> PyResult<usize> {
    let strategy0 = parse_strategy(strategy0)?;
    let strategy1 = parse_strategy(strategy1)?;
    core::winner(&strategy0, &strategy1, &mut standard_dice(seed))
        .map(|player| player.index())
        .map_err(to_py_err)
}

/// Win rate of a strategy against a baseline, averaged over both seats.
///
/// Args:
///     strategy: Strategy spec to evaluate
///     baseline: Strategy spec to play against (default: "always:5")
///     num_trials: Games per seat (default: 1000)
///     seed: Optional seed for reproducible dice
#[pyfunction]
#[pyo3(signature = (strategy, baseline="always:5", num_trials=core::DEFAULT_TRIALS, seed=None))]
fn average_win_rate(
    strategy: &str,
    baseline: &str,
    num_trials: usize,
    seed: Option<u64>,
) -> PyResult<f64> {
    let strategy = parse_strategy(strategy)?;
    let baseline = parse_strategy(baseline)?;
    core::average_win_rate(&strategy, &baseline, num_trials, &mut standard_dice(seed))
        .map_err(to_py_err)
}

/// Number of dice from 1 to 10 with the highest average turn score.
#[pyfunction]
#[pyo3(signature = (sides=6, trials_count=core::DEFAULT_TRIALS, seed=None))]
fn max_scoring_num_rolls(sides: u32, trials_count: usize, seed: Option<u64>) -> PyResult<u32> {
    let mut dice = match seed {
        Some(seed) => FairDice::with_seed(sides, seed),
        None => FairDice::new(sides),
    }
    .map_err(to_py_err)?;
    core::max_scoring_num_rolls(&mut dice, trials_count).map_err(to_py_err)
}

/// Python module for hog.
#[pymodule]
fn hog(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(free_bacon, m)?)?;
    m.add_function(wrap_pyfunction!(select_dice, m)?)?;
    m.add_function(wrap_pyfunction!(play, m)?)?;
    m.add_function(wrap_pyfunction!(winner, m)?)?;
    m.add_function(wrap_pyfunction!(average_win_rate, m)?)?;
    m.add_function(wrap_pyfunction!(max_scoring_num_rolls, m)?)?;
    m.add_class::<GameResult>()?;
    m.add("GOAL_SCORE", core::GOAL_SCORE)?;
    Ok(())
}
