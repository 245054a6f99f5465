//! Actor without a visual representation

use super::{Actor, ActorCore, ActorId};
use crate::stage::Stage;

/// The plainest actor kind: a point that moves and rotates
///
/// Its bounds collapse onto its position and it draws nothing.
#[derive(Debug, Clone)]
pub struct BaseActor {
    core: ActorCore,
}

impl BaseActor {
    /// Create an unmounted actor with an id from `stage`
    pub fn new(stage: &Stage, kind: impl Into<String>) -> Self {
        Self {
            core: ActorCore::new(stage, kind),
        }
    }

    /// Create an unmounted actor with an explicit id
    pub fn with_id(id: ActorId, kind: impl Into<String>) -> Self {
        Self {
            core: ActorCore::with_id(id, kind),
        }
    }
}

impl Actor for BaseActor {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }
}
