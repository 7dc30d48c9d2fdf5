// ABOUTME: Monte Carlo evaluation of hog rolls and strategies.
// ABOUTME: Averages repeated trials to find the best roll count and strategy win rates.

use crate::dice::{Dice, DiceSet};
use crate::error::Result;
use crate::game::{play, Player};
use crate::strategy::{always_roll, Strategy, BASELINE_NUM_ROLLS};
use crate::turn::{roll_dice, MAX_ROLLS};

/// Default number of trials for averaged experiments.
pub const DEFAULT_TRIALS: usize = 1000;

/// A value a single trial can produce.
pub trait Outcome {
    fn into_value(self) -> Result<f64>;
}

impl Outcome for f64 {
    fn into_value(self) -> Result<f64> {
        Ok(self)
    }
}

impl Outcome for u32 {
    fn into_value(self) -> Result<f64> {
        Ok(f64::from(self))
    }
}

impl Outcome for Player {
    fn into_value(self) -> Result<f64> {
        Ok(self.index() as f64)
    }
}

impl<T: Outcome> Outcome for Result<T> {
    fn into_value(self) -> Result<f64> {
        self.and_then(Outcome::into_value)
    }
}

/// A function that can be called with the argument tuple `Args`.
///
/// Implemented for closures taking zero, one, or two arguments.
pub trait Trial<Args> {
    type Output: Outcome;

    fn run(&mut self, args: Args) -> Self::Output;
}

impl<F, T> Trial<()> for F
where
    F: FnMut() -> T,
    T: Outcome,
{
    type Output = T;

    fn run(&mut self, _args: ()) -> T {
        (*self)()
    }
}

impl<F, A, T> Trial<(A,)> for F
where
    F: FnMut(A) -> T,
    T: Outcome,
{
    type Output = T;

    fn run(&mut self, (a,): (A,)) -> T {
        (*self)(a)
    }
}

impl<F, A, B, T> Trial<(A, B)> for F
where
    F: FnMut(A, B) -> T,
    T: Outcome,
{
    type Output = T;

    fn run(&mut self, (a, b): (A, B)) -> T {
        (*self)(a, b)
    }
}

/// A function wrapped to return its mean over repeated calls.
pub struct Averaged<F> {
    function: F,
    num_trials: usize,
}

/// Wrap `function` so that each call runs it `num_trials` times and
/// averages the results.
///
/// Arguments are passed as a tuple and cloned for every trial.
///
/// ```
/// use hog::{make_averaged, roll_dice, TestDice};
///
/// let mut dice = TestDice::new([4, 2, 5, 1]).unwrap();
/// let mut averaged = make_averaged(|| roll_dice(1, &mut dice), 1000);
/// assert_eq!(averaged.call(()).unwrap(), 3.0);
/// ```
pub fn make_averaged<F>(function: F, num_trials: usize) -> Averaged<F> {
    Averaged {
        function,
        num_trials,
    }
}

impl<F> Averaged<F> {
    pub fn call<Args>(&mut self, args: Args) -> Result<f64>
    where
        F: Trial<Args>,
        Args: Clone,
    {
        if self.num_trials == 0 {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for _ in 0..self.num_trials {
            total += self.function.run(args.clone()).into_value()?;
        }
        Ok(total / self.num_trials as f64)
    }

    pub fn num_trials(&self) -> usize {
        self.num_trials
    }
}

/// The number of dice from 1 to 10 with the highest average turn score.
///
/// Pig Out is part of the average. Ties go to the smaller roll count.
pub fn max_scoring_num_rolls<D: Dice + ?Sized>(dice: &mut D, trials_count: usize) -> Result<u32> {
    let mut averaged = make_averaged(|num_rolls: u32| roll_dice(num_rolls, &mut *dice), trials_count);

    let mut best = 1;
    let mut best_average = f64::NEG_INFINITY;
    for num_rolls in 1..=MAX_ROLLS {
        let average = averaged.call((num_rolls,))?;
        if average > best_average {
            best = num_rolls;
            best_average = average;
        }
    }
    Ok(best)
}

/// Play one game and return who won. Ties go to player 1.
pub fn winner<D: DiceSet + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut D,
) -> Result<Player> {
    Ok(play(strategy0, strategy1, dice)?.winner())
}

/// Win rate of `strategy` against `baseline`, averaged over going first
/// and going second.
pub fn average_win_rate<D: DiceSet + ?Sized>(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    num_trials: usize,
    dice: &mut D,
) -> Result<f64> {
    let mut averaged_winner = make_averaged(
        |strategy0: &dyn Strategy, strategy1: &dyn Strategy| winner(strategy0, strategy1, &mut *dice),
        num_trials,
    );

    let win_rate_as_player_0 = 1.0 - averaged_winner.call((strategy, baseline))?;
    let win_rate_as_player_1 = averaged_winner.call((baseline, strategy))?;

    Ok((win_rate_as_player_0 + win_rate_as_player_1) / 2.0)
}

/// Win rate of `strategy` against always rolling [`BASELINE_NUM_ROLLS`].
pub fn average_win_rate_vs_baseline<D: DiceSet + ?Sized>(
    strategy: &dyn Strategy,
    num_trials: usize,
    dice: &mut D,
) -> Result<f64> {
    average_win_rate(strategy, &always_roll(BASELINE_NUM_ROLLS), num_trials, dice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{FairDice, StandardDice, TestDice};
    use crate::error::Error;
    use crate::strategy::{BaconStrategy, SwapStrategy};

    #[test]
    fn test_make_averaged_test_dice() {
        let mut dice = TestDice::new([4, 2, 5, 1]).unwrap();
        let mut averaged = make_averaged(|| dice.roll(), 1000);
        assert_eq!(averaged.call(()).unwrap(), 3.0);
    }

    #[test]
    fn test_make_averaged_zero_trials() {
        let mut calls = 0;
        let mut averaged = make_averaged(
            || {
                calls += 1;
                7.0
            },
            0,
        );
        assert_eq!(averaged.call(()).unwrap(), 0.0);
        drop(averaged);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_make_averaged_constant() {
        let mut averaged = make_averaged(|| 7u32, 1000);
        assert_eq!(averaged.call(()).unwrap(), 7.0);
        assert_eq!(averaged.num_trials(), 1000);
    }

    #[test]
    fn test_make_averaged_forwards_args() {
        let mut seen = Vec::new();
        let mut averaged = make_averaged(
            |a: u32, b: u32| {
                seen.push((a, b));
                f64::from(a + b)
            },
            3,
        );
        assert_eq!(averaged.call((2, 5)).unwrap(), 7.0);
        drop(averaged);
        assert_eq!(seen, vec![(2, 5); 3]);
    }

    #[test]
    fn test_make_averaged_unary() {
        let mut averaged = make_averaged(|x: u32| x * 2, 10);
        assert_eq!(averaged.call((21,)).unwrap(), 42.0);
    }

    #[test]
    fn test_make_averaged_propagates_errors() {
        let mut dice = TestDice::new([3]).unwrap();
        let mut averaged = make_averaged(|n: u32| roll_dice(n, &mut dice), 5);
        assert_eq!(averaged.call((0,)), Err(Error::NoDice));
    }

    #[test]
    fn test_max_scoring_num_rolls_pig_out() {
        let mut dice = TestDice::new([1, 6]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 1000).unwrap(), 1);
    }

    #[test]
    fn test_max_scoring_num_rolls_no_ones() {
        // Without ones, more dice always score more.
        let mut dice = TestDice::new([3]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 10).unwrap(), 10);
    }

    #[test]
    fn test_max_scoring_num_rolls_total_too_large() {
        let mut dice = TestDice::new([u32::MAX]).unwrap();
        let err = max_scoring_num_rolls(&mut dice, 10).unwrap_err();
        assert_eq!(err, Error::ScoreOverflow(2 * u64::from(u32::MAX)));
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_max_scoring_num_rolls_tie() {
        // Every roll count pigs out to 1, so the lowest count wins.
        let mut dice = TestDice::new([1]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 10).unwrap(), 1);
    }

    #[test]
    fn test_max_scoring_num_rolls_zero_trials() {
        let mut dice = TestDice::new([6]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 0).unwrap(), 1);
        assert_eq!(dice.rolls(), 0);
    }

    #[test]
    fn test_max_scoring_num_rolls_six_sided() {
        // Expected scores peak around 8.6-8.7 points at five and six dice.
        let mut dice = FairDice::with_seed(6, 2024).unwrap();
        let best = max_scoring_num_rolls(&mut dice, 20_000).unwrap();
        assert!((5..=7).contains(&best), "best = {best}");
    }

    #[test]
    fn test_winner() {
        let mut dice = TestDice::new([4]).unwrap();
        // Player 0 scores 40 a turn and reaches the goal first.
        assert_eq!(winner(&always_roll(10), &always_roll(1), &mut dice).unwrap(), Player::Zero);
        let mut dice = TestDice::new([4]).unwrap();
        assert_eq!(winner(&always_roll(1), &always_roll(10), &mut dice).unwrap(), Player::One);
    }

    #[test]
    fn test_average_win_rate_deterministic() {
        let mut dice = TestDice::new([4]).unwrap();
        let rate = average_win_rate(&always_roll(10), &always_roll(1), 10, &mut dice).unwrap();
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn test_average_win_rate_self_play() {
        let mut dice = StandardDice::with_seed(5);
        let strategy = always_roll(BASELINE_NUM_ROLLS);
        let rate = average_win_rate_vs_baseline(&strategy, 2000, &mut dice).unwrap();
        assert!((rate - 0.5).abs() < 0.05, "rate = {rate}");
    }

    #[test]
    fn test_average_win_rate_strategies_beat_baseline() {
        let mut dice = StandardDice::with_seed(9);
        let bacon = average_win_rate_vs_baseline(&BaconStrategy::default(), 2000, &mut dice).unwrap();
        let swap = average_win_rate_vs_baseline(&SwapStrategy::default(), 2000, &mut dice).unwrap();
        assert!(bacon > 0.5, "bacon = {bacon}");
        assert!(swap > 0.5, "swap = {swap}");
    }

    #[test]
    fn test_average_win_rate_single_die_loses() {
        let mut dice = StandardDice::with_seed(13);
        let rate = average_win_rate_vs_baseline(&always_roll(1), 2000, &mut dice).unwrap();
        assert!(rate < 0.2, "rate = {rate}");
    }

    #[test]
    fn test_average_win_rate_zero_trials() {
        let mut dice = TestDice::new([4]).unwrap();
        let rate = average_win_rate(&always_roll(3), &always_roll(5), 0, &mut dice).unwrap();
        assert_eq!(rate, 0.5);
    }
}
