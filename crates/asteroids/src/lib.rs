//! # Asteroids
//!
//! The classic arcade game on top of `rocks_engine`: a ship, rocks that
//! split when shot, levels, lives and score.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod actors;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod state;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::Game;
pub use input::{Controls, KeyLatch};
