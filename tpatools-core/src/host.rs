//! The contract the host game server fulfils for the plugin.
//!
//! Everything that touches the world (positions, movement, liveness, chat
//! delivery, profiles, inventories) goes through [`Host`]. The plugin never
//! holds player handles; it only keeps [`ActorId`]s and asks the host.

use thiserror::Error;
use tpatools_utils::{ActorId, Identifier, Message, Position};

/// A failure reported by the host while the plugin delegated work to it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    /// The player is not online anymore.
    #[error("Player {0} is not online")]
    PlayerOffline(ActorId),
    /// The world does not exist on this server.
    #[error("Unknown world {0}")]
    UnknownWorld(Identifier),
    /// Delivering a message or notification failed.
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Host game server operations consumed by the plugin.
///
/// All calls are synchronous and happen on the game logic thread.
pub trait Host {
    /// Monotonic time in milliseconds.
    fn now(&self) -> u64;

    /// Whether the player is online and alive.
    fn is_alive(&self, actor: ActorId) -> bool;

    /// The player's current position.
    fn position_of(&self, actor: ActorId) -> Result<Position, HostError>;

    /// Whether a world with this identifier is loaded.
    fn world_exists(&self, world: &Identifier) -> bool;

    /// Moves the player to `destination`, keeping the destination's rotation.
    fn move_player(&self, actor: ActorId, destination: &Position) -> Result<(), HostError>;

    /// Sends a localized system message to the player.
    fn send_message(&self, actor: ActorId, message: Message) -> Result<(), HostError>;

    /// The current name of the player, online or not, if the profile cache knows it.
    fn player_name(&self, actor: ActorId) -> Option<String>;

    /// Looks a profile up by name (case-insensitive), online or not.
    fn find_profile(&self, name: &str) -> Option<ActorId>;

    /// Every player currently online.
    fn online_players(&self) -> Vec<ActorId>;

    /// Display name of the item in hotbar slot `slot` (0-8), `None` when empty.
    fn hotbar_item(&self, actor: ActorId, slot: usize) -> Option<String>;

    /// Shows `title` to `target` and plays the ping sound.
    fn notify_mention(&self, target: ActorId, title: Message) -> Result<(), HostError>;

    /// Whether the player has operator permission.
    fn is_operator(&self, actor: ActorId) -> bool;
}

/// Sends every message, returning the first failure after trying them all.
pub(crate) fn notify_all(
    host: &dyn Host,
    messages: impl IntoIterator<Item = (ActorId, Message)>,
) -> Result<(), HostError> {
    let mut first_error = None;
    for (actor, message) in messages {
        if let Err(e) = host.send_message(actor, message) {
            log::warn!("Failed to notify {actor}: {e}");
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}
