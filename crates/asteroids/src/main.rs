//! Headless asteroids session
//!
//! Plays a scripted game without a window: the ship circles and fires while
//! the draw passes are recorded into a [`DrawList`]. Settings are read from
//! `asteroids.toml` in the working directory when present.

use asteroids::{Controls, Game, GameConfig};
use rocks_engine::foundation::logging;
use rocks_engine::foundation::time::Timer;
use rocks_engine::render::DrawList;

const CONFIG_PATH: &str = "asteroids.toml";
const TICK: f32 = 1.0 / 60.0;
const SESSION_TICKS: u64 = 60 * 60;

/// Controls "held" at simulation tick `tick`
fn scripted_controls(tick: u64) -> Controls {
    let second = tick / 60;
    let mut controls = Controls::FIRE;
    controls.set(Controls::LEFT, second % 4 < 2);
    controls.set(Controls::RIGHT, second % 4 == 3);
    controls.set(Controls::THRUST, second % 6 == 0);
    controls.set(Controls::TOGGLE_BOUNDS, tick == 300 || tick == 900);
    controls.set(Controls::BONUS, (600..610).contains(&tick));
    controls
}

fn run(config: GameConfig, ticks: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::new(config)?;
    let mut canvas = DrawList::new();
    let mut timer = Timer::new();

    for tick in 0..ticks {
        timer.update();
        canvas.clear();
        game.update(TICK, scripted_controls(tick), &mut canvas)?;

        if (tick + 1) % 600 == 0 {
            let board = game.scoreboard();
            log::info!(
                "t={}s level={} lives={} score={} actors={} draw_commands={}",
                (tick + 1) / 60,
                board.level,
                board.lives,
                board.score,
                game.stage().len(),
                canvas.len()
            );
        }
    }

    let board = game.scoreboard();
    log::info!(
        "Session over after {} frames ({:.0} fps wall clock): level {}, score {}, {} lives left",
        timer.frame_count(),
        timer.average_fps(),
        board.level,
        board.score,
        board.lives
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting headless asteroids session");

    let config = GameConfig::load_or_default(CONFIG_PATH);
    match run(config, SESSION_TICKS) {
        Ok(()) => {
            log::info!("Asteroids session completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Asteroids session failed: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_holds_fire_and_toggles_once() {
        assert!(scripted_controls(0).contains(Controls::FIRE | Controls::LEFT | Controls::THRUST));
        assert!(scripted_controls(200).contains(Controls::RIGHT));
        assert!(scripted_controls(300).contains(Controls::TOGGLE_BOUNDS));
        assert!(!scripted_controls(301).contains(Controls::TOGGLE_BOUNDS));
    }

    #[test]
    fn test_short_session_runs() {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };

        assert!(run(config, 10 * 60).is_ok());
    }
}
