//! Utility helpers for tests.
//!
//! Fixtures shared by the integration tests: pre-validated movers, a counting
//! completion handler and a headless Bevy app with a fixed frame delta.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use tilestep::{LayerMask, MoveCompletion, MoveTime, Mover, MoverPlugin};

/// Builds an idle mover with the given step duration and no blocking layers.
///
/// # Panics
/// Panics if `move_time` is not a positive number of seconds.
#[must_use]
pub fn mover(move_time: f32) -> Mover {
    let move_time = MoveTime::new(move_time).unwrap_or_else(|e| panic!("{e}"));
    Mover::new(move_time, LayerMask::NONE)
}

/// Completion handler recording how often it fired.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompletionCounter(pub u32);

impl MoveCompletion for CompletionCounter {
    fn on_move_complete(&mut self) {
        self.0 += 1;
    }
}

/// Creates a headless app with [`MoverPlugin`] whose clock advances `dt`
/// seconds per update.
///
/// The first update only starts the clock; later ones report `dt`.
#[must_use]
pub fn headless_app(dt: f32) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(MoverPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            dt,
        )));
    app
}

/// Runs `app` until `done` holds or `max_updates` elapse, returning the number
/// of updates performed.
pub fn run_until(app: &mut App, max_updates: u32, mut done: impl FnMut(&App) -> bool) -> u32 {
    for update in 1..=max_updates {
        app.update();
        if done(app) {
            return update;
        }
    }
    max_updates
}

/// Planar position of `entity`'s transform.
///
/// # Panics
/// Panics if the entity has no `Transform`.
#[must_use]
pub fn planar_position(app: &App, entity: Entity) -> Vec2 {
    app.world()
        .get::<Transform>(entity)
        .map(|transform| transform.translation.truncate())
        .unwrap_or_else(|| panic!("entity {entity} has no Transform"))
}
