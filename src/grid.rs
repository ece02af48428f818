//! Tile coordinates and cardinal directions.
use glam::{IVec2, Vec2};

use crate::TILE_SIZE;

/// Integer tile coordinate on the map grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column.
    pub x: i32,
    /// Row, growing upwards.
    pub y: i32,
}

impl GridPos {
    /// Creates a tile coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// World-space centre of this tile.
    #[expect(
        clippy::cast_precision_loss,
        reason = "Tile indices stay far below the 2^24 limit of exact f32 integers."
    )]
    #[must_use]
    pub fn to_world(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32) * TILE_SIZE
    }

    /// Tile containing the world point `position`, rounding to the nearest
    /// tile centre.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec2;
    /// use tilestep::GridPos;
    /// assert_eq!(GridPos::from_world(Vec2::new(0.6, -1.4)), GridPos::new(1, -1));
    /// ```
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Rounded world coordinates of a playable map fit within i32."
    )]
    #[must_use]
    pub fn from_world(position: Vec2) -> Self {
        let tile = (position / TILE_SIZE).round();
        Self::new(tile.x as i32, tile.y as i32)
    }

    /// Neighbouring tile one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let delta = direction.delta();
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<GridPos> for IVec2 {
    fn from(pos: GridPos) -> Self {
        Self::new(pos.x, pos.y)
    }
}

/// Cardinal direction of a single grid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards positive `y`.
    North,
    /// Towards positive `x`.
    East,
    /// Towards negative `y`.
    South,
    /// Towards negative `x`.
    West,
}

impl Direction {
    /// All four directions in clockwise order starting north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Tile offset for one step.
    #[must_use]
    pub const fn delta(self) -> IVec2 {
        match self {
            Self::North => IVec2::new(0, 1),
            Self::East => IVec2::new(1, 0),
            Self::South => IVec2::new(0, -1),
            Self::West => IVec2::new(-1, 0),
        }
    }

    /// World-space offset for one step.
    #[must_use]
    pub fn world_delta(self) -> Vec2 {
        self.delta().as_vec2() * TILE_SIZE
    }
}
