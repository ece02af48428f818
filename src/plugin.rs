//! Bevy plugin driving [`Mover`] components from the frame clock.
//!
//! Entities carrying both a [`Mover`] and a [`Transform`] are advanced once per
//! frame in [`MoverSystems::Advance`]. Arrival is announced by triggering
//! [`MoveCompleted`] on the entity, so each actor type reacts through its own
//! observer. Systems that request moves should run before the advance set.

use bevy::prelude::*;
use log::debug;

use crate::mover::Mover;

/// Entity event fired once when a mover lands on its destination.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCompleted {
    /// Actor that finished moving.
    pub entity: Entity,
}

/// Entity event asking a mover to start a step towards `target`.
///
/// Rejected requests are dropped; the sender may retry on a later frame.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq)]
pub struct MoveRequest {
    /// Actor that should move.
    pub entity: Entity,
    /// Absolute destination in world units.
    pub target: Vec2,
}

/// System sets exposed for ordering against movement.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoverSystems {
    /// Interpolates every moving entity.
    Advance,
}

/// Advances each moving entity by the frame delta and triggers
/// [`MoveCompleted`] on arrival.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn advance_movers_system(
    time: Res<Time>,
    mut commands: Commands,
    mut movers: Query<(Entity, &mut Mover, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut mover, mut transform) in &mut movers {
        if !mover.is_moving() {
            continue;
        }
        mover.update_step(&mut *transform, dt, &mut || {
            commands.trigger(MoveCompleted { entity });
        });
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn apply_move_request(request: On<MoveRequest>, mut movers: Query<&mut Mover>) {
    let MoveRequest { entity, target } = *request.event();
    let Ok(mut mover) = movers.get_mut(entity) else {
        debug!("move request for {entity} ignored, no mover attached");
        return;
    };
    if !mover.request_move(target) {
        debug!("move request for {entity} dropped, already moving");
    }
}

/// Installs mover systems and observers.
#[derive(Default)]
pub struct MoverPlugin;

impl Plugin for MoverPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(apply_move_request);
        app.add_systems(
            Update,
            advance_movers_system.in_set(MoverSystems::Advance),
        );
    }
}
