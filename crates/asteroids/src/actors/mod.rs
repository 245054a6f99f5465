//! Game actor kinds

pub mod lives;
pub mod rock;
pub mod score;
pub mod ship;
pub mod shot;

pub use lives::LivesDisplay;
pub use rock::{Rock, RockSize};
pub use score::ScoreDisplay;
pub use ship::Ship;
pub use shot::Shot;
