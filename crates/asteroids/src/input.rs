//! Player input
//!
//! The frame loop samples the keyboard into a [`Controls`] set once per
//! frame. Held controls (turning, thrust, fire) are read as-is; command keys
//! (reset, debug overlay, bonus) go through a [`KeyLatch`] so holding one
//! down acts only once.

use bitflags::bitflags;

bitflags! {
    /// Controls held down during a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Controls: u8 {
        /// Turn counter-clockwise (A / Left)
        const LEFT = 1 << 0;
        /// Turn clockwise (D / Right)
        const RIGHT = 1 << 1;
        /// Accelerate forward (W / Up)
        const THRUST = 1 << 2;
        /// Fire (S / Down / Space)
        const FIRE = 1 << 3;
        /// Start a new game (R)
        const RESET = 1 << 4;
        /// Toggle the collision bounds overlay (B)
        const TOGGLE_BOUNDS = 1 << 5;
        /// Add bonus points (P)
        const BONUS = 1 << 6;

        /// Keys that act once per press
        const COMMANDS = Self::RESET.bits() | Self::TOGGLE_BOUNDS.bits() | Self::BONUS.bits();
    }
}

/// Edge detector for held keys
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLatch {
    held: Controls,
}

impl KeyLatch {
    /// Create a latch with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's controls and get the ones that went down since
    /// the previous frame
    pub fn pressed(&mut self, current: Controls) -> Controls {
        let pressed = current & !self.held;
        self.held = current;
        pressed
    }

    /// Controls held as of the last frame fed in
    pub fn held(&self) -> Controls {
        self.held
    }
}
