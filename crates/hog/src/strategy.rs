// ABOUTME: Strategies that decide how many dice to roll each turn.
// ABOUTME: Constant, Free Bacon margin, and Swine Swap aware strategies plus a parseable spec.

use crate::error::{Error, Result};
use crate::turn::{bacon_points, MAX_ROLLS};
use std::fmt;
use std::str::FromStr;

/// Roll count used by the baseline strategy.
pub const BASELINE_NUM_ROLLS: u32 = 5;

/// Free Bacon points worth rolling zero dice for.
pub const BACON_MARGIN: u32 = 8;

/// Decides how many dice to roll given the player's and opponent's scores.
///
/// Any `Fn(u32, u32) -> u32` closure is a strategy.
pub trait Strategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> u32,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}

/// Always roll the same number of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlwaysRoll(pub u32);

/// Return a strategy that always rolls `n` dice.
pub fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll(n)
}

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }
}

/// Roll zero dice when Free Bacon is worth at least `margin` points,
/// otherwise roll `num_rolls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaconStrategy {
    pub margin: u32,
    pub num_rolls: u32,
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self {
            margin: BACON_MARGIN,
            num_rolls: BASELINE_NUM_ROLLS,
        }
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if bacon_points(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

/// Like [`BaconStrategy`], but also looks at whether Free Bacon would trigger
/// a Swine Swap.
///
/// Rolls zero dice when the swap would hand over the opponent's larger score,
/// and never rolls zero when the swap would give ours away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStrategy {
    pub margin: u32,
    pub num_rolls: u32,
}

impl Default for SwapStrategy {
    fn default() -> Self {
        Self {
            margin: BACON_MARGIN,
            num_rolls: BASELINE_NUM_ROLLS,
        }
    }
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let gain = bacon_points(opponent_score);
        let after = u64::from(score) + u64::from(gain);
        let opponent_score = u64::from(opponent_score);
        if opponent_score == 2 * after {
            0
        } else if after == 2 * opponent_score {
            self.num_rolls
        } else if gain >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

/// A named strategy that can be parsed from a short string.
///
/// Accepted forms: `always:N`, `bacon`, `bacon:MARGIN:ROLLS`, `swap`,
/// `swap:MARGIN:ROLLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategySpec {
    Always(AlwaysRoll),
    Bacon(BaconStrategy),
    Swap(SwapStrategy),
}

impl Strategy for StrategySpec {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        match self {
            StrategySpec::Always(s) => s.num_rolls(score, opponent_score),
            StrategySpec::Bacon(s) => s.num_rolls(score, opponent_score),
            StrategySpec::Swap(s) => s.num_rolls(score, opponent_score),
        }
    }
}

impl FromStr for StrategySpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidStrategy(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();
        let count = |part: &str| -> Result<u32> {
            let n: u32 = part.parse().map_err(|_| invalid())?;
            if n > MAX_ROLLS {
                return Err(invalid());
            }
            Ok(n)
        };

        match parts.as_slice() {
            ["always", n] => Ok(StrategySpec::Always(AlwaysRoll(count(*n)?))),
            ["bacon"] => Ok(StrategySpec::Bacon(BaconStrategy::default())),
            ["swap"] => Ok(StrategySpec::Swap(SwapStrategy::default())),
            ["bacon", margin, n] => Ok(StrategySpec::Bacon(BaconStrategy {
                margin: margin.parse().map_err(|_| invalid())?,
                num_rolls: count(*n)?,
            })),
            ["swap", margin, n] => Ok(StrategySpec::Swap(SwapStrategy {
                margin: margin.parse().map_err(|_| invalid())?,
                num_rolls: count(*n)?,
            })),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySpec::Always(AlwaysRoll(n)) => write!(f, "always:{}", n),
            StrategySpec::Bacon(s) if *s == BaconStrategy::default() => write!(f, "bacon"),
            StrategySpec::Bacon(s) => write!(f, "bacon:{}:{}", s.margin, s.num_rolls),
            StrategySpec::Swap(s) if *s == SwapStrategy::default() => write!(f, "swap"),
            StrategySpec::Swap(s) => write!(f, "swap:{}:{}", s.margin, s.num_rolls),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_roll() {
        let strategy = always_roll(5);
        assert_eq!(strategy.num_rolls(0, 0), 5);
        assert_eq!(strategy.num_rolls(99, 99), 5);
    }

    #[test]
    fn test_closure_strategy() {
        let strategy = |score: u32, _opponent: u32| -> u32 { if score > 50 { 2 } else { 7 } };
        assert_eq!(strategy.num_rolls(60, 0), 2);
        assert_eq!(strategy.num_rolls(10, 0), 7);
    }

    #[test]
    fn test_bacon_strategy() {
        let strategy = BaconStrategy::default();
        assert_eq!(strategy.num_rolls(0, 0), 5); // 1 point
        assert_eq!(strategy.num_rolls(0, 70), 0); // 8 points
        assert_eq!(strategy.num_rolls(0, 79), 0); // 10 points
        assert_eq!(strategy.num_rolls(0, 61), 5); // 7 points
    }

    #[test]
    fn test_bacon_strategy_custom() {
        let strategy = BaconStrategy {
            margin: 3,
            num_rolls: 4,
        };
        assert_eq!(strategy.num_rolls(0, 12), 0);
        assert_eq!(strategy.num_rolls(0, 11), 4);
    }

    #[test]
    fn test_swap_strategy() {
        let strategy = SwapStrategy::default();
        // 23 + 7 = 30, opponent has double: beneficial swap
        assert_eq!(strategy.num_rolls(23, 60), 0);
        // 27 + 9 = 36, double the opponent: harmful swap
        assert_eq!(strategy.num_rolls(27, 18), 5);
        // 9 points of Free Bacon
        assert_eq!(strategy.num_rolls(50, 80), 0);
        assert_eq!(strategy.num_rolls(12, 12), 5);
    }

    #[test]
    fn test_strategies_past_goal() {
        assert_eq!(BaconStrategy::default().num_rolls(0, 109), 0);
        assert_eq!(SwapStrategy::default().num_rolls(0, 100), 5);
        // 4294967295 has a 9 digit, so Free Bacon is worth 10
        assert_eq!(BaconStrategy::default().num_rolls(u32::MAX, u32::MAX), 0);
        assert_eq!(SwapStrategy::default().num_rolls(0, u32::MAX), 0);
        assert_eq!(SwapStrategy::default().num_rolls(u32::MAX, 0), 5);
        assert_eq!(SwapStrategy::default().num_rolls(u32::MAX, u32::MAX), 0);
        // 2147483647 + 1 doubled is exactly 2^32
        assert_eq!(SwapStrategy::default().num_rolls(2_147_483_647, 0), 5);
    }

    #[test]
    fn test_parse_spec() {
        assert_eq!(
            "always:8".parse::<StrategySpec>().unwrap(),
            StrategySpec::Always(AlwaysRoll(8))
        );
        assert_eq!(
            "bacon".parse::<StrategySpec>().unwrap(),
            StrategySpec::Bacon(BaconStrategy::default())
        );
        assert_eq!(
            "swap:6:4".parse::<StrategySpec>().unwrap(),
            StrategySpec::Swap(SwapStrategy {
                margin: 6,
                num_rolls: 4
            })
        );
    }

    #[test]
    fn test_parse_spec_invalid() {
        for spec in ["", "always", "always:11", "always:x", "bacon:8", "final"] {
            assert_eq!(
                spec.parse::<StrategySpec>(),
                Err(Error::InvalidStrategy(spec.to_string())),
                "{spec}"
            );
        }
    }

    #[test]
    fn test_spec_display_roundtrip() {
        for spec in ["always:3", "bacon", "bacon:9:6", "swap", "swap:7:2"] {
            assert_eq!(spec.parse::<StrategySpec>().unwrap().to_string(), spec);
        }
    }

    #[test]
    fn test_spec_dispatch() {
        let spec: StrategySpec = "swap".parse().unwrap();
        assert_eq!(spec.num_rolls(23, 60), 0);
        assert_eq!(spec.num_rolls(27, 18), 5);
    }
}
