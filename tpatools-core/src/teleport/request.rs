use tpatools_utils::{ActorId, TranslationKey, translations::keys};

/// Who moves when a request is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeleportMode {
    /// `/tpa`: the sender moves to the target.
    ToTarget,
    /// `/tpahere`: the target moves to the sender.
    BringTarget,
}

impl TeleportMode {
    /// Message the target gets when the request arrives.
    #[must_use]
    pub const fn received_key(self) -> TranslationKey {
        match self {
            Self::ToTarget => keys::TPA_RECEIVED,
            Self::BringTarget => keys::TPAHERE_RECEIVED,
        }
    }

    /// Message the target gets after accepting.
    #[must_use]
    pub const fn accepted_key(self) -> TranslationKey {
        match self {
            Self::ToTarget => keys::TPA_ACCEPTED,
            Self::BringTarget => keys::TPAHERE_ACCEPTED,
        }
    }

    /// Message the target gets after denying.
    #[must_use]
    pub const fn denied_key(self) -> TranslationKey {
        match self {
            Self::ToTarget => keys::TPA_DENIED,
            Self::BringTarget => keys::TPAHERE_DENIED,
        }
    }

    /// Message the target gets when the request times out.
    #[must_use]
    pub const fn timeout_key(self) -> TranslationKey {
        match self {
            Self::ToTarget => keys::TPA_TIMEOUT,
            Self::BringTarget => keys::TPAHERE_TIMEOUT,
        }
    }
}

/// A pending teleport request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeleportRequest {
    /// Who asked.
    pub sender: ActorId,
    /// Who has to answer.
    pub target: ActorId,
    /// Who moves on accept.
    pub mode: TeleportMode,
    /// Monotonic millis at creation.
    pub created_at: u64,
}

impl TeleportRequest {
    /// The actor that moves on accept and the actor whose position it moves to.
    #[must_use]
    pub const fn mover_and_anchor(&self) -> (ActorId, ActorId) {
        match self.mode {
            TeleportMode::ToTarget => (self.sender, self.target),
            TeleportMode::BringTarget => (self.target, self.sender),
        }
    }

    /// Whether the request is at least `timeout_ms` old at `now`.
    #[must_use]
    pub const fn is_expired(&self, now: u64, timeout_ms: u64) -> bool {
        now.saturating_sub(self.created_at) >= timeout_ms
    }
}
