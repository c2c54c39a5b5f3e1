//! Shared value types for TPATools: actor ids, world identifiers, positions,
//! translation keys and the lock aliases used across the workspace.

pub mod actor;
pub mod identifier;
pub mod locks;
pub mod position;
pub mod translations;

/// Code generated by the build script.
#[allow(missing_docs, reason = "generated")]
pub mod generated {
    /// Translation keys generated from `build_assets/en_us.json`.
    pub mod translations;
}

pub use actor::ActorId;
pub use identifier::Identifier;
pub use position::Position;
pub use translations::{Message, MessageArg, TranslationKey, Translations};
