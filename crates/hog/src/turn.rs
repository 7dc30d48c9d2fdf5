// ABOUTME: Turn scoring rules for hog: Pig Out, Free Bacon, and Hog Wild dice selection.
// ABOUTME: Computes the points a single turn is worth given a roll count and the dice.

use crate::dice::{Dice, DiceKind};
use crate::error::{Error, Result};

/// The game ends once a player reaches this score.
pub const GOAL_SCORE: u32 = 100;

/// Most dice a player may roll in a single turn.
pub const MAX_ROLLS: u32 = 10;

/// Roll `dice` exactly `num_rolls` times.
///
/// Returns the sum of the outcomes, unless any outcome is a 1 (Pig Out), in
/// which case the turn is worth exactly 1. Every die is rolled even after a 1
/// shows up, so the dice are consumed the same way either way.
pub fn roll_dice<D: Dice + ?Sized>(num_rolls: u32, dice: &mut D) -> Result<u32> {
    if num_rolls == 0 {
        return Err(Error::NoDice);
    }
    if num_rolls > MAX_ROLLS {
        return Err(Error::InvalidRollCount(num_rolls));
    }

    let mut total: u64 = 0;
    let mut pig_out = false;
    for _ in 0..num_rolls {
        let value = dice.roll();
        pig_out |= value == 1;
        total += u64::from(value);
    }

    if pig_out {
        return Ok(1);
    }
    u32::try_from(total).map_err(|_| Error::ScoreOverflow(total))
}

/// Points scored for rolling zero dice: one more than the largest digit of
/// the opponent's score.
pub fn free_bacon(opponent_score: u32) -> Result<u32> {
    if opponent_score >= GOAL_SCORE {
        return Err(Error::GameOver {
            score: opponent_score,
            goal: GOAL_SCORE,
        });
    }
    Ok(bacon_points(opponent_score))
}

/// The Free Bacon digit rule without the game-over check.
pub(crate) fn bacon_points(mut score: u32) -> u32 {
    let mut max_digit = 0;
    while score > 0 {
        max_digit = max_digit.max(score % 10);
        score /= 10;
    }
    max_digit + 1
}

/// Points scored for one turn rolling `num_rolls` dice, which may be zero.
pub fn take_turn<D: Dice + ?Sized>(num_rolls: u32, opponent_score: u32, dice: &mut D) -> Result<u32> {
    if num_rolls > MAX_ROLLS {
        return Err(Error::InvalidRollCount(num_rolls));
    }
    if opponent_score >= GOAL_SCORE {
        return Err(Error::GameOver {
            score: opponent_score,
            goal: GOAL_SCORE,
        });
    }

    if num_rolls == 0 {
        free_bacon(opponent_score)
    } else {
        roll_dice(num_rolls, dice)
    }
}

/// Hog Wild: four-sided dice when the two scores sum to a multiple of 7.
pub fn select_dice(player_score: u32, opponent_score: u32) -> DiceKind {
    if (u64::from(player_score) + u64::from(opponent_score)) % 7 == 0 {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}
