use thiserror::Error;
use tpatools_utils::{ActorId, Message, MessageArg, translations::keys};

use crate::host::HostError;

/// Expected, user-facing failures of tracker operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TeleportError {
    /// A player tried to send a request to themselves.
    #[error("Cannot send a request to yourself")]
    SelfTarget,
    /// The sender sent a request too recently.
    #[error("On cooldown for another {0} ms")]
    OnCooldown(u64),
    /// The target is offline or dead.
    #[error("Target is unavailable")]
    TargetUnavailable,
    /// The target refuses all requests.
    #[error("Target {0} has requests disabled")]
    TargetMuted(ActorId),
    /// The target blocked this sender.
    #[error("Target {0} has locked requests from the sender")]
    TargetLocked(ActorId),
    /// Nothing is pending for the target.
    #[error("No pending request")]
    NoPendingRequest,
    /// Nothing is pending from the given sender.
    #[error("No pending request from {0}")]
    NoRequestFromSender(ActorId),
    /// The sender of the selected request is offline or dead. The request was dropped.
    #[error("Sender is unavailable")]
    SenderUnavailable,
    /// The sender had no matching request.
    #[error("Nothing to cancel")]
    NothingToCancel,
    /// A player tried to lock or unlock themselves.
    #[error("Cannot lock yourself")]
    SelfLock,
    /// The player is already on the block list.
    #[error("{0} is already locked")]
    AlreadyLocked(ActorId),
    /// The player is not on the block list.
    #[error("{0} is not locked")]
    NotLocked(ActorId),
    /// The host failed while the operation delegated to it.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl TeleportError {
    /// The message shown to the invoker.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Self::SelfTarget => keys::TPA_SELF.plain(),
            Self::OnCooldown(remaining_ms) => {
                let seconds = i64::try_from(remaining_ms / 1000).unwrap_or(i64::MAX);
                keys::TPA_COOLDOWN.message([MessageArg::Number(seconds)])
            }
            Self::TargetUnavailable => keys::TPA_TARGET_DEAD.plain(),
            Self::TargetMuted(target) => keys::TPA_TOGGLED_OFF.message([(*target).into()]),
            Self::TargetLocked(target) => keys::TPA_LOCKED.message([(*target).into()]),
            Self::NoPendingRequest => keys::TPA_NO_REQUEST.plain(),
            Self::NoRequestFromSender(sender) => {
                keys::TPA_NO_REQUEST_FROM.message([(*sender).into()])
            }
            Self::SenderUnavailable => keys::TPA_SENDER_DEAD.plain(),
            Self::NothingToCancel => keys::TPA_NO_REQUESTS_TO_CANCEL.plain(),
            Self::SelfLock => keys::TPA_LOCK_SELF.plain(),
            Self::AlreadyLocked(player) => keys::TPA_ALREADY_LOCKED.message([(*player).into()]),
            Self::NotLocked(player) => keys::TPA_NOT_LOCKED.message([(*player).into()]),
            Self::Host(_) => keys::ERROR.plain(),
        }
    }
}
