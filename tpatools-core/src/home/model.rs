use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tpatools_utils::{ActorId, Position};

use super::HomeError;

/// A named saved position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    /// Where the home is.
    pub position: Position,
    /// Players allowed to use the home, in the order they were added.
    #[serde(default)]
    pub shared_players: Vec<ActorId>,
}

impl Home {
    /// A home at `position`, shared with nobody.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            shared_players: Vec::new(),
        }
    }

    /// Whether `player` may teleport to this home.
    #[must_use]
    pub fn is_shared_with(&self, player: ActorId) -> bool {
        self.shared_players.contains(&player)
    }
}

/// Listing entry for a public home.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHomeInfo {
    /// Player owning the home.
    pub owner: ActorId,
    /// Owner name when the home was made public; used when the profile cache forgets it.
    pub owner_name: String,
    /// Name of the home.
    pub home_name: String,
}

/// Which side of sharing `/home sharelist` shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareListKind {
    /// Homes other players shared with me.
    In,
    /// My homes that I shared with others.
    Out,
}

impl FromStr for ShareListKind {
    type Err = HomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(HomeError::InvalidShareListType),
        }
    }
}
