//! Game rules
//!
//! [`Game`] owns the stage and the shared [`GameState`] and applies the
//! rules that sit above individual actors once per frame, before the stage
//! passes run:
//!
//! - command keys (new game, bounds overlay, bonus points)
//! - respawning the ship while lives remain, or starting over
//! - advancing to the next level when every rock is gone
//! - awarding an extra ship at each score threshold

use std::rc::Rc;

use log::info;
use rocks_engine::render::Canvas;
use rocks_engine::stage::Stage;

use crate::actors::{LivesDisplay, Rock, RockSize, ScoreDisplay, Ship};
use crate::config::GameConfig;
use crate::error::GameResult;
use crate::input::{Controls, KeyLatch};
use crate::state::{GameState, Scoreboard};

/// A running game of asteroids
pub struct Game {
    stage: Stage,
    state: Rc<GameState>,
    latch: KeyLatch,
}

impl Game {
    /// Build the stage from `config` and start the first level
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let stage = Stage::new(&config.stage);
        let mut game = Self {
            stage,
            state: Rc::new(GameState::new(config)),
            latch: KeyLatch::new(),
        };
        game.reset()?;
        Ok(game)
    }

    /// The stage holding every actor
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// State shared with the actors
    pub fn state(&self) -> &Rc<GameState> {
        &self.state
    }

    /// Level, lives and score
    pub fn scoreboard(&self) -> Scoreboard {
        self.state.scoreboard()
    }

    /// Start a new game: empty stage, full lives, zero score, level 1
    ///
    /// The ship is spawned by the next [`Self::update`].
    pub fn reset(&mut self) -> GameResult<()> {
        self.stage.reset();
        let lives = self.state.config().rules.starting_lives;
        self.state.update_scoreboard(|board| board.reset(lives));

        self.stage.spawn(ScoreDisplay::new(&self.stage, Rc::clone(&self.state)))?;
        self.stage.spawn(LivesDisplay::new(&self.stage, Rc::clone(&self.state)))?;
        self.new_level(1)
    }

    /// Spawn `level` large rocks
    pub fn new_level(&mut self, level: u32) -> GameResult<()> {
        info!("Starting level {level}");
        self.state.update_scoreboard(|board| board.level = level);
        for _ in 0..level {
            Rock::spawn(&self.stage, &self.state, RockSize::Large, None)?;
        }
        Ok(())
    }

    /// Run one frame: apply the rules, then update and draw every actor
    pub fn update(&mut self, dt: f32, controls: Controls, canvas: &mut dyn Canvas) -> GameResult<()> {
        let pressed = self.latch.pressed(controls);
        if pressed.contains(Controls::RESET) {
            info!("New game requested");
            self.reset()?;
        }
        if pressed.contains(Controls::TOGGLE_BOUNDS) {
            self.stage.toggle_draw_actor_bounds();
        }
        if pressed.contains(Controls::BONUS) {
            self.state.add_points(self.state.config().rules.bonus_points);
        }
        self.state.set_controls(controls);

        if self.stage.find_actors_by_kind(Ship::KIND).is_none() {
            if self.state.update_scoreboard(Scoreboard::lose_life) {
                Ship::spawn(&self.stage, Rc::clone(&self.state))?;
            } else {
                info!("Game over with {} points", self.state.score());
                self.reset()?;
            }
        }

        if self.stage.find_actors_by_kind(Rock::KIND).is_none() {
            self.new_level(self.state.level() + 1)?;
        }

        let threshold = self.state.config().rules.extra_ship_points;
        if self.state.update_scoreboard(|board| board.award_extra_ship(threshold)) {
            info!("Extra ship awarded, {} lives", self.state.lives());
        }

        self.stage.update(dt)?;
        self.stage.draw(canvas);
        Ok(())
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("stage", &self.stage)
            .field("scoreboard", &self.scoreboard())
            .finish_non_exhaustive()
    }
}
