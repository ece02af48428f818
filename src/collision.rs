//! Blocking layers and the pre-move collision check.
//!
//! A [`Mover`](crate::Mover) only stores its [`LayerMask`]; actors consult a
//! [`CollisionQuery`] with that mask before requesting a move.

use glam::{IVec2, Vec2};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::grid::GridPos;

/// Bit mask selecting the spatial layers treated as obstacles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask matching no layer.
    pub const NONE: Self = Self(0);
    /// Mask matching every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask containing only layer `index`.
    ///
    /// Indices past the width of the mask yield [`LayerMask::NONE`].
    ///
    /// # Examples
    /// ```
    /// use tilestep::LayerMask;
    /// assert_eq!(LayerMask::layer(3), LayerMask(0b1000));
    /// assert_eq!(LayerMask::layer(40), LayerMask::NONE);
    /// ```
    #[must_use]
    pub const fn layer(index: u32) -> Self {
        match 1_u32.checked_shl(index) {
            Some(bits) => Self(bits),
            None => Self::NONE,
        }
    }

    /// Returns `true` when the masks share at least one layer.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Combines both masks.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Collision capability consulted by actors before they call
/// [`Mover::request_move`](crate::Mover::request_move).
pub trait CollisionQuery {
    /// Returns `true` when moving from `from` to `to` is obstructed by anything
    /// on the layers selected by `mask`.
    fn is_blocked(&self, from: Vec2, to: Vec2, mask: LayerMask) -> bool;
}

/// Tile occupancy map answering collision queries by destination tile.
#[derive(Debug, Clone, Default)]
pub struct BlockingGrid {
    cells: HashMap<IVec2, LayerMask>,
}

impl BlockingGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `tile` as occupied on `layers`, merging with existing occupants.
    pub fn insert(&mut self, tile: GridPos, layers: LayerMask) {
        let cell = self.cells.entry(tile.into()).or_default();
        *cell = cell.union(layers);
    }

    /// Clears every layer at `tile`, returning what was there.
    pub fn remove(&mut self, tile: GridPos) -> Option<LayerMask> {
        self.cells.remove(&IVec2::from(tile))
    }

    /// Layers occupying `tile`.
    #[must_use]
    pub fn layers_at(&self, tile: GridPos) -> LayerMask {
        self.cells
            .get(&IVec2::from(tile))
            .copied()
            .unwrap_or_default()
    }
}

impl CollisionQuery for BlockingGrid {
    fn is_blocked(&self, _from: Vec2, to: Vec2, mask: LayerMask) -> bool {
        self.layers_at(GridPos::from_world(to)).intersects(mask)
    }
}
