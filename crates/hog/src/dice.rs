// ABOUTME: Dice sources for the hog simulator.
// ABOUTME: Fair fastrand-backed dice and cycling test dice behind a common trait.

use crate::error::{Error, Result};

/// A source of single die outcomes, allowing for testing with fixed values.
pub trait Dice {
    /// Roll once and return the face value.
    fn roll(&mut self) -> u32;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

/// The two kinds of dice a turn can be played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiceKind {
    FourSided,
    SixSided,
}

impl DiceKind {
    /// Returns the number of sides for this dice kind.
    pub fn sides(&self) -> u32 {
        match self {
            DiceKind::FourSided => 4,
            DiceKind::SixSided => 6,
        }
    }
}

/// Maps a [`DiceKind`] to the dice that should be rolled for it.
pub trait DiceSet {
    fn select(&mut self, kind: DiceKind) -> &mut dyn Dice;
}

/// A fair die with faces `1..=sides`, using fastrand.
pub struct FairDice {
    sides: u32,
    rng: fastrand::Rng,
}

impl FairDice {
    pub fn new(sides: u32) -> Result<Self> {
        Self::from_rng(sides, fastrand::Rng::new())
    }

    pub fn with_seed(sides: u32, seed: u64) -> Result<Self> {
        Self::from_rng(sides, fastrand::Rng::with_seed(seed))
    }

    fn from_rng(sides: u32, rng: fastrand::Rng) -> Result<Self> {
        if sides == 0 {
            return Err(Error::InvalidSides(sides));
        }
        Ok(Self { sides, rng })
    }

    pub fn six_sided() -> Self {
        Self {
            sides: 6,
            rng: fastrand::Rng::new(),
        }
    }

    pub fn four_sided() -> Self {
        Self {
            sides: 4,
            rng: fastrand::Rng::new(),
        }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl Dice for FairDice {
    fn roll(&mut self) -> u32 {
        self.rng.u32(1..=self.sides)
    }
}

/// A fair four-sided and a fair six-sided die, one for each [`DiceKind`].
pub struct StandardDice {
    four_sided: FairDice,
    six_sided: FairDice,
}

impl StandardDice {
    pub fn new() -> Self {
        Self {
            four_sided: FairDice::four_sided(),
            six_sided: FairDice::six_sided(),
        }
    }

    /// Seed both dice from one seed so whole games can be reproduced.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let four_sided = FairDice {
            sides: 4,
            rng: rng.fork(),
        };
        let six_sided = FairDice { sides: 6, rng };
        Self {
            four_sided,
            six_sided,
        }
    }
}

impl Default for StandardDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSet for StandardDice {
    fn select(&mut self, kind: DiceKind) -> &mut dyn Dice {
        match kind {
            DiceKind::FourSided => &mut self.four_sided,
            DiceKind::SixSided => &mut self.six_sided,
        }
    }
}

/// Deterministic dice that cycle through a fixed sequence of outcomes.
///
/// Serves every [`DiceKind`] from the same sequence, so a whole game can be
/// driven by one fixture.
#[derive(Debug, Clone)]
pub struct TestDice {
    values: Vec<u32>,
    index: usize,
}

impl TestDice {
    pub fn new(values: impl Into<Vec<u32>>) -> Result<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(Error::ExhaustedSequence);
        }
        Ok(Self { values, index: 0 })
    }

    /// Number of outcomes handed out so far.
    pub fn rolls(&self) -> usize {
        self.index
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> u32 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

impl DiceSet for TestDice {
    fn select(&mut self, _kind: DiceKind) -> &mut dyn Dice {
        self
    }
}
