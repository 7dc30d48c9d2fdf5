// ABOUTME: The hog game loop: alternating turns, Swine Swap, and end-of-game detection.
// ABOUTME: Seats pair a score with a strategy; swaps exchange scores, never strategies.

use crate::dice::{DiceKind, DiceSet};
use crate::error::{Error, Result};
use crate::strategy::Strategy;
use crate::turn::{select_dice, take_turn, GOAL_SCORE};
use std::fmt;

/// One of the two players, numbered 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Swine Swap: true when either score is exactly double the other.
pub fn swine_swap(score0: u32, score1: u32) -> bool {
    let (score0, score1) = (u64::from(score0), u64::from(score1));
    score0 == 2 * score1 || score1 == 2 * score0
}

/// Decides who plays next once a turn has resolved.
pub trait TurnOrder {
    fn next_player(&self, player: Player, player_score: u32, opponent_score: u32) -> Player;
}

/// Players simply take turns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alternate;

impl TurnOrder for Alternate {
    fn next_player(&self, player: Player, _player_score: u32, _opponent_score: u32) -> Player {
        player.other()
    }
}

/// Goal and starting scores for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub goal: u32,
    pub score0: u32,
    pub score1: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            score0: 0,
            score1: 0,
        }
    }
}

/// Final scores, player 0 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub score0: u32,
    pub score1: u32,
}

impl GameResult {
    /// Player 0 wins only with a strictly greater score; ties go to player 1.
    pub fn winner(&self) -> Player {
        if self.score0 > self.score1 {
            Player::Zero
        } else {
            Player::One
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.score0, self.score1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Finished(GameResult),
}

/// What happened during one resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub num_rolls: u32,
    pub dice: DiceKind,
    pub points: u32,
    pub swapped: bool,
    /// Scores after the turn (and any swap), player 0 first.
    pub scores: (u32, u32),
}

struct Seat<'s> {
    score: u32,
    strategy: &'s dyn Strategy,
}

/// A game of hog between two strategies.
pub struct Game<'s> {
    goal: u32,
    seats: [Seat<'s>; 2],
    current: Player,
    order: Box<dyn TurnOrder + 's>,
    turns: Vec<Turn>,
}

impl<'s> Game<'s> {
    pub fn new(strategy0: &'s dyn Strategy, strategy1: &'s dyn Strategy, config: GameConfig) -> Result<Self> {
        if config.goal == 0 || config.goal > GOAL_SCORE {
            return Err(Error::InvalidGoal(config.goal));
        }
        Ok(Self {
            goal: config.goal,
            seats: [
                Seat {
                    score: config.score0,
                    strategy: strategy0,
                },
                Seat {
                    score: config.score1,
                    strategy: strategy1,
                },
            ],
            current: Player::Zero,
            order: Box::new(Alternate),
            turns: Vec::new(),
        })
    }

    /// Replace the default alternating turn order.
    pub fn with_turn_order(mut self, order: impl TurnOrder + 's) -> Self {
        self.order = Box::new(order);
        self
    }

    pub fn score(&self, player: Player) -> u32 {
        self.seats[player.index()].score
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn result(&self) -> GameResult {
        GameResult {
            score0: self.seats[0].score,
            score1: self.seats[1].score,
        }
    }

    pub fn state(&self) -> GameState {
        if self.seats.iter().any(|seat| seat.score >= self.goal) {
            GameState::Finished(self.result())
        } else {
            GameState::InProgress
        }
    }

    /// Play a single turn for the current player, unless the game is over.
    pub fn step<D: DiceSet + ?Sized>(&mut self, dice: &mut D) -> Result<GameState> {
        if let GameState::Finished(result) = self.state() {
            return Ok(GameState::Finished(result));
        }

        let player = self.current;
        let opponent = player.other();
        let score = self.score(player);
        let opponent_score = self.score(opponent);

        let num_rolls = self.seats[player.index()].strategy.num_rolls(score, opponent_score);
        let kind = select_dice(score, opponent_score);
        let points = take_turn(num_rolls, opponent_score, dice.select(kind))?;
        let seat = &mut self.seats[player.index()];
        seat.score = seat
            .score
            .checked_add(points)
            .ok_or(Error::ScoreOverflow(u64::from(seat.score) + u64::from(points)))?;

        let swapped = swine_swap(self.score(player), self.score(opponent));
        if swapped {
            self.swap_scores();
        }

        self.turns.push(Turn {
            player,
            num_rolls,
            dice: kind,
            points,
            swapped,
            scores: (self.seats[0].score, self.seats[1].score),
        });
        self.current = self
            .order
            .next_player(player, self.score(player), self.score(opponent));

        Ok(self.state())
    }

    /// Play turns until someone reaches the goal.
    pub fn run<D: DiceSet + ?Sized>(&mut self, dice: &mut D) -> Result<GameResult> {
        loop {
            if let GameState::Finished(result) = self.step(dice)? {
                return Ok(result);
            }
        }
    }

    fn swap_scores(&mut self) {
        let [first, second] = &mut self.seats;
        std::mem::swap(&mut first.score, &mut second.score);
    }
}

/// Play a game from zero to [`GOAL_SCORE`].
pub fn play<D: DiceSet + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut D,
) -> Result<GameResult> {
    play_with(strategy0, strategy1, GameConfig::default(), dice)
}

/// Play a game with a custom goal and starting scores.
pub fn play_with<D: DiceSet + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    config: GameConfig,
    dice: &mut D,
) -> Result<GameResult> {
    Game::new(strategy0, strategy1, config)?.run(dice)
}
