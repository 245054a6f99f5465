//! State shared between the game and its actors

use std::cell::{Cell, RefCell};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::input::Controls;

/// Level, lives and score of the running game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Current level; level `n` starts with `n` large rocks
    pub level: u32,

    /// Ships left, including the one in play
    pub lives: u32,

    /// Points scored
    pub score: u32,

    previous_score: u32,
}

impl Scoreboard {
    /// Start a new game
    pub fn reset(&mut self, lives: u32) {
        *self = Self {
            lives,
            ..Self::default()
        };
    }

    /// Take a life away; true while ships remain
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives > 0
    }

    /// Grant a ship if the score crossed a multiple of `threshold` since the
    /// last call
    pub fn award_extra_ship(&mut self, threshold: u32) -> bool {
        let crossed = threshold > 0 && self.score / threshold > self.previous_score / threshold;
        if crossed {
            self.lives += 1;
        }
        self.previous_score = self.score;
        crossed
    }
}

/// Rules state reachable from every game actor
///
/// Owned by [`Game`](crate::game::Game) and shared with the actors it
/// creates. Interior mutability lets actors score points while the stage
/// pass holds the game immutably.
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    scoreboard: RefCell<Scoreboard>,
    controls: Cell<Controls>,
    rng: RefCell<StdRng>,
}

impl GameState {
    /// Create state for a game, seeding the RNG from the configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            scoreboard: RefCell::new(Scoreboard::default()),
            controls: Cell::new(Controls::empty()),
            rng: RefCell::new(rng),
        }
    }

    /// Game configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Controls held this frame
    pub fn controls(&self) -> Controls {
        self.controls.get()
    }

    pub(crate) fn set_controls(&self, controls: Controls) {
        self.controls.set(controls);
    }

    /// Copy of the scoreboard
    pub fn scoreboard(&self) -> Scoreboard {
        *self.scoreboard.borrow()
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.scoreboard.borrow().score
    }

    /// Ships left
    pub fn lives(&self) -> u32 {
        self.scoreboard.borrow().lives
    }

    /// Current level
    pub fn level(&self) -> u32 {
        self.scoreboard.borrow().level
    }

    /// Add to the score
    pub fn add_points(&self, points: u32) {
        let mut scoreboard = self.scoreboard.borrow_mut();
        scoreboard.score = scoreboard.score.saturating_add(points);
    }

    /// Run `f` against the scoreboard
    pub(crate) fn update_scoreboard<R>(&self, f: impl FnOnce(&mut Scoreboard) -> R) -> R {
        f(&mut *self.scoreboard.borrow_mut())
    }

    /// Run `f` with the game's random number generator
    pub fn with_rng<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        f(&mut *self.rng.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_lose_life() {
        let mut board = Scoreboard::default();
        board.reset(2);

        assert!(board.lose_life());
        assert!(!board.lose_life());
        assert!(!board.lose_life());
        assert_eq!(board.lives, 0);
    }

    #[test]
    fn test_extra_ship_on_each_threshold() {
        let mut board = Scoreboard::default();
        board.reset(3);

        board.score = 9_980;
        assert!(!board.award_extra_ship(10_000));
        board.score = 10_020;
        assert!(board.award_extra_ship(10_000));
        assert!(!board.award_extra_ship(10_000));
        board.score = 20_000;
        assert!(board.award_extra_ship(10_000));

        assert_eq!(board.lives, 5);
    }

    #[test]
    fn test_reset_forgets_previous_score() {
        let mut board = Scoreboard::default();
        board.score = 9_000;
        board.award_extra_ship(10_000);

        board.reset(4);
        board.score = 100;

        assert!(!board.award_extra_ship(10_000));
        assert_eq!(board.lives, 4);
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        let config = GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        };
        let a = GameState::new(config.clone());
        let b = GameState::new(config);

        let x: u64 = a.with_rng(|rng| rng.gen());
        let y: u64 = b.with_rng(|rng| rng.gen());

        assert_eq!(x, y);
    }
}
