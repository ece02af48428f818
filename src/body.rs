//! Position handles driven by a [`Mover`](crate::Mover).
//!
//! The mover never owns an actor's position. It reads and writes it through
//! the [`Body`] capability so the same state machine works against a Bevy
//! [`Transform`] or a bare point in standalone simulations.

use bevy::prelude::Transform;
use glam::Vec2;

/// Read/write access to the planar position of an actor.
pub trait Body {
    /// Current position in world units.
    fn position(&self) -> Vec2;

    /// Moves the body to `position`.
    fn set_position(&mut self, position: Vec2);
}

impl Body for Transform {
    fn position(&self) -> Vec2 {
        self.translation.truncate()
    }

    /// Updates `x` and `y` only; the depth used for sprite ordering is kept.
    fn set_position(&mut self, position: Vec2) {
        self.translation.x = position.x;
        self.translation.y = position.y;
    }
}

/// Minimal body storing nothing but a point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointBody(pub Vec2);

impl PointBody {
    /// Creates a body resting at `position`.
    #[must_use]
    pub const fn new(position: Vec2) -> Self {
        Self(position)
    }
}

impl Body for PointBody {
    fn position(&self) -> Vec2 {
        self.0
    }

    fn set_position(&mut self, position: Vec2) {
        self.0 = position;
    }
}
