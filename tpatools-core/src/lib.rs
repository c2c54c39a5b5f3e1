//! # TPATools core
//!
//! Player teleport utilities for a game server: teleport requests between
//! players (`/tpa`, `/tpahere`), `/back`, `/grave`, named and shareable homes,
//! chat mentions with item links, and the `/tpatools` admin commands.
//!
//! The crate never talks to a game server directly. Everything world related
//! goes through the [`host::Host`] trait, and state is persisted through a
//! [`storage::StateStore`]. [`plugin::TpaTools`] wires all components together.

pub mod back;
pub mod chat;
pub mod config;
pub mod grave;
pub mod home;
pub mod host;
pub mod permissions;
pub mod plugin;
pub mod settings;
pub mod storage;
pub mod teleport;

pub use config::TpaConfig;
pub use host::{Host, HostError};
pub use plugin::{CommandError, TpaTools};
pub use storage::{JsonFileStore, MemoryStore, StateStore};
