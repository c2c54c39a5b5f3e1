//! Teleport requests between players (`/tpa`, `/tpahere`, `/tpaccept`, ...).
//!
//! The [`TeleportTracker`] owns every pending request plus the cooldown, mute
//! and lock registries. Requests are resolved by a command (accept, deny,
//! cancel) or removed by the heartbeat once they are older than the timeout
//! window.

mod error;
mod request;
mod tracker;

pub use error::TeleportError;
pub use request::{TeleportMode, TeleportRequest};
pub use tracker::{LOCKS_FILE, TOGGLES_FILE, TeleportTracker};
