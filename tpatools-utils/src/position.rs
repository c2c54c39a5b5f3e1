//! A full player placement: world, coordinates and look direction.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Identifier;

/// Where a player stands and which way they face.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// The world (dimension) the position is in.
    pub world: Identifier,
    /// Block coordinates, feet position.
    pub pos: DVec3,
    /// Horizontal rotation in degrees.
    pub yaw: f32,
    /// Vertical rotation in degrees.
    pub pitch: f32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(world: Identifier, pos: DVec3, yaw: f32, pitch: f32) -> Self {
        Self {
            world,
            pos,
            yaw,
            pitch,
        }
    }

    /// Coordinates rendered the way listings show them (`x`, `y`, `z` with two decimals).
    #[must_use]
    pub fn coordinate_strings(&self) -> [String; 3] {
        [
            format!("{:.2}", self.pos.x),
            format!("{:.2}", self.pos.y),
            format!("{:.2}", self.pos.z),
        ]
    }
}
