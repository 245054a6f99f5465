//! Game configuration
//!
//! Every tunable of the rules layer. Values default to the classic
//! arcade feel; `asteroids.toml` (or `.ron`) overrides any subset.

use std::path::Path;

use log::{info, warn};
use rocks_engine::config::{Config, StageConfig};
use serde::{Deserialize, Serialize};

use crate::actors::RockSize;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// World and rendering setup
    pub stage: StageConfig,

    /// Lives and scoring
    pub rules: RulesConfig,

    /// Player ship handling
    pub ship: ShipConfig,

    /// Ship projectiles
    pub shot: ShotConfig,

    /// Rocks
    pub rocks: RockConfig,

    /// Score and lives displays
    pub hud: HudConfig,

    /// Fixed RNG seed; a fresh one is drawn every run when absent
    pub seed: Option<u64>,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load from `path`, falling back to defaults if it cannot be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Loaded game configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Using default game configuration ({}): {e}", path.display());
                Self::default()
            }
        }
    }
}

/// Lives and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Lives at the start of a game, including the first ship
    pub starting_lives: u32,

    /// An extra ship is awarded each time the score crosses a multiple of this
    pub extra_ship_points: u32,

    /// Points added by the bonus key
    pub bonus_points: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_lives: 4,
            extra_ship_points: 10_000,
            bonus_points: 1_000,
        }
    }
}

/// Player ship handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Thrust acceleration in units per second squared
    pub acceleration: f32,

    /// Turn speed in radians per second
    pub turn_speed: f32,

    /// Minimum time between shots in seconds
    pub fire_cooldown: f32,

    /// Uniform scale
    pub scale: f32,

    /// Sprite frame
    pub frame: usize,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            acceleration: 600.0,
            turn_speed: 5.0,
            fire_cooldown: 0.1,
            scale: 1.5,
            frame: 8,
        }
    }
}

/// Ship projectiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    /// Spawn distance ahead of the ship
    pub muzzle_offset: f32,

    /// Speed in units per second added to the ship velocity
    pub speed: f32,

    /// Uniform scale
    pub scale: f32,

    /// Lifetime in seconds
    pub timeout: f32,

    /// Sprite frame
    pub frame: usize,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            muzzle_offset: 25.0,
            speed: 300.0,
            scale: 0.4,
            timeout: 1.5,
            frame: 6,
        }
    }
}

/// Per-size values of a rock property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerSize<T> {
    /// First generation
    pub large: T,
    /// Second generation
    pub medium: T,
    /// Last generation
    pub small: T,
}

impl<T: Copy> PerSize<T> {
    /// Value for `size`
    pub fn get(&self, size: RockSize) -> T {
        match size {
            RockSize::Large => self.large,
            RockSize::Medium => self.medium,
            RockSize::Small => self.small,
        }
    }
}

/// Rocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RockConfig {
    /// Points scored for destroying a rock
    pub points: PerSize<u32>,

    /// Uniform scale
    pub scales: PerSize<f32>,

    /// Linear speed in units per second
    pub speed: f32,

    /// Magnitude of the spin in radians per second; the sign is random
    pub spin: f32,

    /// Rock sprites are frames `0..frame_count`
    pub frame_count: usize,
}

impl Default for RockConfig {
    fn default() -> Self {
        Self {
            points: PerSize {
                large: 20,
                medium: 50,
                small: 100,
            },
            scales: PerSize {
                large: 5.0,
                medium: 3.0,
                small: 1.5,
            },
            speed: 60.0,
            spin: 0.5,
            frame_count: 8,
        }
    }
}

/// Score and lives displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Distance of the score baseline below the top edge
    pub score_offset: f32,

    /// Text scale of the score
    pub score_scale: f32,

    /// Offset of the first life icon from the top-left corner
    pub lives_offset: [f32; 2],

    /// Horizontal distance between life icons
    pub lives_spacing: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            score_offset: 30.0,
            score_scale: 2.0,
            lives_offset: [20.0, 25.0],
            lives_spacing: 30.0,
        }
    }
}
