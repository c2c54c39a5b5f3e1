use thiserror::Error;
use tpatools_utils::{ActorId, Message, MessageArg, translations::keys};

use crate::host::HostError;

/// Failures of home operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HomeError {
    /// The owner already has the maximum number of homes.
    #[error("Home limit of {0} reached")]
    LimitExceeded(usize),
    /// A home with that name already exists.
    #[error("Home {0} already exists")]
    NameExists(String),
    /// The owner has no home with that name.
    #[error("Home {0} not found")]
    NotFound(String),
    /// The home is in a world that no longer exists.
    #[error("Home {0} is in a missing world")]
    InvalidDimension(String),
    /// The owner has no homes at all.
    #[error("No homes set")]
    NoHomes,
    /// The home is already shared with the player.
    #[error("Home {home} is already shared with {player}")]
    AlreadyShared {
        /// The home name.
        home: String,
        /// The player it is shared with.
        player: ActorId,
    },
    /// Unsharing everything from a home that nobody can use.
    #[error("Home {0} is not shared with anyone")]
    NotSharedWithAnyone(String),
    /// No profile with that name exists.
    #[error("Player {0} not found")]
    PlayerNotFound(String),
    /// The home is not shared with the named player.
    #[error("Home {home} is not shared with {player}")]
    NotSharedWith {
        /// The home name.
        home: String,
        /// The player name as typed.
        player: String,
    },
    /// The home is already public.
    #[error("Home {0} is already public")]
    AlreadyPublic(String),
    /// The home is not public.
    #[error("Home {0} is not public")]
    NotPublic(String),
    /// Another player's home must be named `owner:home`.
    #[error("Expected owner:home")]
    InvalidFormat,
    /// The other home does not exist or the player may not use it.
    #[error("Home {0} not found or not accessible")]
    OtherNotFound(String),
    /// No public homes exist.
    #[error("No public homes")]
    NoOtherHomes,
    /// Nobody shared a home with the player.
    #[error("No homes shared with you")]
    ShareListInEmpty,
    /// The player shared none of their homes.
    #[error("No shared homes")]
    ShareListOutEmpty,
    /// `sharelist` takes `in` or `out`.
    #[error("Share list type must be `in` or `out`")]
    InvalidShareListType,
    /// The host failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl HomeError {
    /// The message shown to the invoker.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Self::LimitExceeded(max) => keys::HOME_LIMIT_EXCEEDED
                .message([MessageArg::Number(i64::try_from(*max).unwrap_or(i64::MAX))]),
            Self::NameExists(name) => keys::HOME_NAME_EXISTS.message([name.as_str().into()]),
            Self::NotFound(name) => keys::HOME_NOT_FOUND.message([name.as_str().into()]),
            Self::InvalidDimension(name) => {
                keys::HOME_INVALID_DIMENSION.message([name.as_str().into()])
            }
            Self::NoHomes => keys::HOME_LIST_EMPTY.plain(),
            Self::AlreadyShared { home, player } => {
                keys::HOME_ALREADY_SHARED.message([home.as_str().into(), (*player).into()])
            }
            Self::NotSharedWithAnyone(name) => {
                keys::UNSHARE_NO_PLAYERS.message([name.as_str().into()])
            }
            Self::PlayerNotFound(name) => {
                keys::UNSHARE_PLAYER_NOT_FOUND.message([name.as_str().into()])
            }
            Self::NotSharedWith { home, player } => {
                keys::UNSHARE_NOT_SHARED.message([home.as_str().into(), player.as_str().into()])
            }
            Self::AlreadyPublic(name) => keys::HOME_ALREADY_PUBLIC.message([name.as_str().into()]),
            Self::NotPublic(name) => keys::HOME_NOT_PUBLIC.message([name.as_str().into()]),
            Self::InvalidFormat => keys::HOME_INVALID_FORMAT.plain(),
            Self::OtherNotFound(arg) => keys::HOME_OTHER_NOT_FOUND.message([arg.as_str().into()]),
            Self::NoOtherHomes => keys::HOME_OTHERLIST_EMPTY.plain(),
            Self::ShareListInEmpty => keys::SHARELIST_IN_EMPTY.plain(),
            Self::ShareListOutEmpty => keys::SHARELIST_OUT_EMPTY.plain(),
            Self::InvalidShareListType => keys::SHARELIST_INVALID_TYPE.plain(),
            Self::Host(_) => keys::ERROR.plain(),
        }
    }
}
