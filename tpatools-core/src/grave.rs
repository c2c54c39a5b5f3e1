//! `/grave`: teleport to where the player last died.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tpatools_utils::{ActorId, Message, Position, translations::keys};

use crate::{
    back::PositionHistory,
    host::{Host, HostError},
    storage::{StateStore, load_json, save_json},
};

/// Document holding death positions.
pub const GRAVES_FILE: &str = "tpatool_graves.json";

/// Error returned by [`GraveTracker::teleport_to_grave`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraveError {
    /// The player has not died since the records began.
    #[error("No death position recorded")]
    NoDeathPosition,
    /// The death position is in a world that no longer exists; it was dropped.
    #[error("Death position is in a missing world")]
    InvalidDimension,
    /// The host failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl GraveError {
    /// The message shown to the invoker.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Self::NoDeathPosition => keys::GRAVE_NO_POSITION.plain(),
            Self::InvalidDimension => keys::GRAVE_INVALID_DIMENSION.plain(),
            Self::Host(_) => keys::ERROR.plain(),
        }
    }
}

/// Last death position per player, persisted across restarts.
pub struct GraveTracker {
    store: Arc<dyn StateStore>,
    graves: FxHashMap<ActorId, Position>,
}

impl GraveTracker {
    /// A tracker with no graves.
    #[must_use]
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            graves: FxHashMap::default(),
        }
    }

    /// Restores death positions.
    pub fn load_state(&mut self) {
        self.graves = load_json(self.store.as_ref(), GRAVES_FILE).unwrap_or_default();
        log::info!("Loaded {} graves", self.graves.len());
    }

    /// Writes death positions to the store.
    pub fn save_state(&self) {
        save_json(self.store.as_ref(), GRAVES_FILE, &self.graves);
    }

    /// The recorded death position of `actor`.
    #[must_use]
    pub fn grave_of(&self, actor: ActorId) -> Option<&Position> {
        self.graves.get(&actor)
    }

    /// Records where `actor` died.
    pub fn on_player_death(&mut self, actor: ActorId, position: Position) {
        log::debug!(
            "Recorded grave for {actor} at {} {:?}",
            position.world,
            position.pos
        );
        self.graves.insert(actor, position);
        self.save_state();
    }

    /// Moves `actor` to their death position. The grave is kept, so the
    /// command can be repeated.
    pub fn teleport_to_grave(
        &mut self,
        host: &dyn Host,
        history: &mut dyn PositionHistory,
        actor: ActorId,
    ) -> Result<(), GraveError> {
        let destination = self
            .graves
            .get(&actor)
            .cloned()
            .ok_or(GraveError::NoDeathPosition)?;

        if !host.world_exists(&destination.world) {
            self.graves.remove(&actor);
            self.save_state();
            return Err(GraveError::InvalidDimension);
        }

        let origin = host.position_of(actor)?;
        host.move_player(actor, &destination)?;
        history.record(actor, origin);
        log::debug!("{actor} teleported to grave in {}", destination.world);

        host.send_message(actor, keys::GRAVE_SUCCESS.plain())?;
        Ok(())
    }
}
