//! Movement constants shared across the crate.
//!
//! These values describe the default pacing of a grid step and the tolerance
//! used when deciding that an actor has reached its destination.

/// Seconds an actor takes to traverse one grid step unless configured
/// otherwise.
pub const DEFAULT_MOVE_TIME: f32 = 0.1;

/// Squared distance below which an in-flight move counts as arrived.
///
/// Matches the machine epsilon of `f32`, so only residual rounding error is
/// absorbed by the final snap.
pub const ARRIVAL_EPSILON: f32 = f32::EPSILON;

/// World units spanned by a single tile.
pub const TILE_SIZE: f32 = 1.0;
