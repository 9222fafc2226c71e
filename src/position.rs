//! Spatial addressing for the Scripty server API.
//!
//! This module provides the [`Position`] value type, the unit of spatial
//! addressing used by every block-placement and entity-spawn request.

use serde::Serialize;

/// World name used when no world is specified.
pub const DEFAULT_WORLD: &str = "world";

/// An immutable 3D coordinate plus the world it belongs to.
///
/// A position has no identity beyond its fields: it is created at the call
/// site, serialized into a request body and discarded. It serializes to a
/// flat mapping of its four fields, which is exactly the shape the server
/// plugin expects.
///
/// # Examples
///
/// ```
/// use scriptymc::Position;
///
/// let pos = Position::new(100.0, 64.0, 100.0);
/// assert_eq!(pos.world, "world");
///
/// let nether = Position::in_world(0.0, 70.0, 0.0, "world_nether");
/// assert_eq!(nether.world, "world_nether");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Position {
    /// X coordinate (east/west axis)
    pub x: f64,
    /// Y coordinate (vertical axis)
    pub y: f64,
    /// Z coordinate (north/south axis)
    pub z: f64,
    /// Name of the world the coordinate lives in
    pub world: String,
}

impl Position {
    /// Create a position in the default world (`"world"`).
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::in_world(x, y, z, DEFAULT_WORLD)
    }

    /// Create a position in a specific world.
    pub fn in_world(x: f64, y: f64, z: f64, world: &str) -> Self {
        Position {
            x,
            y,
            z,
            world: world.to_string(),
        }
    }

    /// Return a new position shifted by the given offsets, in the same world.
    ///
    /// This is how the structure generator derives each block coordinate
    /// from the anchor; the anchor itself is never mutated.
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
            world: self.world.clone(),
        }
    }
}
