//! Stage errors

use thiserror::Error;

use crate::actor::ActorId;
use crate::render::FrameId;

/// Registry invariant violations
///
/// These signal programming errors, not recoverable runtime conditions:
/// callers propagate them to the top of the frame loop and stop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// An actor with this identity is already mounted
    #[error("actor {id} has already been added")]
    DuplicateMount {
        /// Offending actor
        id: ActorId,
    },

    /// The actor's id was allocated by another stage
    #[error("actor {id} was not allocated by this stage")]
    ForeignId {
        /// Offending actor
        id: ActorId,
    },

    /// This actor is not mounted on the stage
    #[error("actor {id} not found on stage")]
    MissingUnmount {
        /// Offending actor
        id: ActorId,
    },

    /// The sprite sheet has no frame with this index
    #[error("sprite frame {} out of range ({available} frames)", .frame.0)]
    UnknownFrame {
        /// Requested frame
        frame: FrameId,
        /// Number of frames in the sheet
        available: usize,
    },
}
