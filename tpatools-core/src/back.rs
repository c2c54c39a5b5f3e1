//! `/back`: return to the position held before the last plugin teleport.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tpatools_utils::{ActorId, Message, Position, translations::keys};

use crate::host::{Host, HostError};

/// Somewhere to record where an actor stood before a plugin teleport.
pub trait PositionHistory {
    /// Overwrites the actor's previous position.
    fn record(&mut self, actor: ActorId, position: Position);
}

/// Error returned by [`BackTracker::teleport_back`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackError {
    /// Nothing was recorded for the actor.
    #[error("No previous position recorded")]
    NoPreviousPosition,
    /// The recorded world is gone; the entry was dropped.
    #[error("Previous position is in a missing world")]
    InvalidDimension,
    /// The host failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl BackError {
    /// The message shown to the invoker.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Self::NoPreviousPosition => keys::BACK_NO_POSITION.plain(),
            Self::InvalidDimension => keys::BACK_INVALID_DIMENSION.plain(),
            Self::Host(_) => keys::ERROR.plain(),
        }
    }
}

/// Last positions before plugin teleports. Kept in memory only.
#[derive(Default)]
pub struct BackTracker {
    previous: FxHashMap<ActorId, Position>,
}

impl BackTracker {
    /// A tracker with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded position for `actor`, if any.
    #[must_use]
    pub fn previous(&self, actor: ActorId) -> Option<&Position> {
        self.previous.get(&actor)
    }

    /// Moves the actor back, recording the spot it leaves so `/back` toggles.
    pub fn teleport_back(&mut self, host: &dyn Host, actor: ActorId) -> Result<(), BackError> {
        let destination = self
            .previous
            .get(&actor)
            .cloned()
            .ok_or(BackError::NoPreviousPosition)?;

        if !host.world_exists(&destination.world) {
            self.previous.remove(&actor);
            log::debug!(
                "Dropped back position of {actor} in missing world {}",
                destination.world
            );
            return Err(BackError::InvalidDimension);
        }

        let current = host.position_of(actor)?;
        host.move_player(actor, &destination)?;
        self.record(actor, current);
        log::debug!("{actor} went back to {}", destination.world);

        host.send_message(actor, keys::BACK_SUCCESS.plain())?;
        Ok(())
    }
}

impl PositionHistory for BackTracker {
    fn record(&mut self, actor: ActorId, position: Position) {
        self.previous.insert(actor, position);
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use tpatools_utils::Identifier;

    use super::*;
    use crate::host::mock::MockHost;

    #[test]
    fn nothing_recorded() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let mut back = BackTracker::new();
        assert_eq!(
            back.teleport_back(&host, alice),
            Err(BackError::NoPreviousPosition)
        );
    }

    #[test]
    fn back_toggles_between_two_spots() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let start = host.position(alice);
        let elsewhere = Position::new(Identifier::THE_NETHER, DVec3::new(1.0, 2.0, 3.0), 90.0, 0.0);

        let mut back = BackTracker::new();
        back.record(alice, elsewhere.clone());

        back.teleport_back(&host, alice).expect("first back");
        assert_eq!(host.position(alice), elsewhere);
        assert_eq!(back.previous(alice), Some(&start));

        back.teleport_back(&host, alice).expect("second back");
        assert_eq!(host.position(alice), start);
        assert_eq!(host.keys_for(alice), [keys::BACK_SUCCESS.key; 2]);
    }

    #[test]
    fn missing_world_forgets_the_entry() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let mut back = BackTracker::new();
        back.record(
            alice,
            Position::new(Identifier::THE_END, DVec3::ZERO, 0.0, 0.0),
        );

        assert_eq!(
            back.teleport_back(&host, alice),
            Err(BackError::InvalidDimension)
        );
        assert!(back.previous(alice).is_none());
        assert!(host.moves.borrow().is_empty());
    }
}
