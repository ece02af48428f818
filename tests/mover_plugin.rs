//! Headless Bevy tests for `MoverPlugin`.
//!
//! Entities carrying a `Mover` and a `Transform` are driven by the frame clock
//! and announce arrival through `MoveCompleted` observers.

use anyhow::{ensure, Context, Result};
use bevy::prelude::*;
use test_utils::{headless_app, mover, planar_position, run_until};
use tilestep::{MoveCompleted, MoveRequest, Mover};

#[derive(Resource, Default)]
struct Arrivals(Vec<Entity>);

fn record_arrival(event: On<MoveCompleted>, mut arrivals: ResMut<Arrivals>) {
    arrivals.0.push(event.event().entity);
}

fn app_with_actor(dt: f32, start: Vec3) -> (App, Entity) {
    let mut app = headless_app(dt);
    app.init_resource::<Arrivals>().add_observer(record_arrival);
    let entity = app
        .world_mut()
        .spawn((mover(0.1), Transform::from_translation(start)))
        .id();
    app.update();
    (app, entity)
}

fn is_moving(app: &App, entity: Entity) -> bool {
    app.world()
        .get::<Mover>(entity)
        .is_some_and(Mover::is_moving)
}

#[test]
fn requested_move_arrives_and_notifies_once() -> Result<()> {
    let (mut app, entity) = app_with_actor(0.02, Vec3::new(0.0, 0.0, 4.0));
    app.world_mut().trigger(MoveRequest {
        entity,
        target: Vec2::new(1.0, 0.0),
    });
    ensure!(is_moving(&app, entity), "request was not applied");

    let updates = run_until(&mut app, 50, |app| !is_moving(app, entity));
    ensure!(updates < 50, "mover never arrived");
    ensure!(updates >= 5, "arrived after {updates} updates, faster than the step time");

    for _ in 0..3 {
        app.update();
    }

    ensure!(planar_position(&app, entity) == Vec2::new(1.0, 0.0));
    let transform = app
        .world()
        .get::<Transform>(entity)
        .context("missing Transform")?;
    ensure!(transform.translation.z == 4.0, "depth was altered");
    let arrivals = &app.world().resource::<Arrivals>().0;
    ensure!(arrivals == &vec![entity], "unexpected arrivals {arrivals:?}");
    Ok(())
}

#[test]
fn overlapping_request_keeps_first_target() -> Result<()> {
    let (mut app, entity) = app_with_actor(0.02, Vec3::ZERO);
    app.world_mut().trigger(MoveRequest {
        entity,
        target: Vec2::new(0.0, 1.0),
    });
    app.world_mut().trigger(MoveRequest {
        entity,
        target: Vec2::new(-1.0, 0.0),
    });
    let target = app
        .world()
        .get::<Mover>(entity)
        .and_then(Mover::target)
        .context("mover should be moving")?;
    ensure!(target == Vec2::new(0.0, 1.0), "target replaced with {target}");

    run_until(&mut app, 50, |app| !is_moving(app, entity));
    ensure!(planar_position(&app, entity) == Vec2::new(0.0, 1.0));
    Ok(())
}

#[test]
fn idle_entities_are_left_alone() -> Result<()> {
    let (mut app, entity) = app_with_actor(0.02, Vec3::new(2.0, 3.0, 0.0));
    for _ in 0..5 {
        app.update();
    }
    ensure!(planar_position(&app, entity) == Vec2::new(2.0, 3.0));
    ensure!(app.world().resource::<Arrivals>().0.is_empty());
    Ok(())
}

#[test]
fn entity_observers_see_only_their_own_arrivals() -> Result<()> {
    #[derive(Resource, Default)]
    struct WalkerLandings(u32);

    let (mut app, walker) = app_with_actor(0.05, Vec3::ZERO);
    app.init_resource::<WalkerLandings>();
    let bystander = app
        .world_mut()
        .spawn((mover(0.1), Transform::from_xyz(5.0, 5.0, 0.0)))
        .id();
    app.world_mut().entity_mut(walker).observe(
        |_event: On<MoveCompleted>, mut landings: ResMut<WalkerLandings>| {
            landings.0 += 1;
        },
    );

    for (entity, target) in [(walker, Vec2::new(1.0, 1.0)), (bystander, Vec2::new(5.0, 4.0))] {
        app.world_mut().trigger(MoveRequest { entity, target });
    }
    run_until(&mut app, 50, |app| {
        !is_moving(app, walker) && !is_moving(app, bystander)
    });

    let walker_landings = app.world().resource::<WalkerLandings>().0;
    let arrivals = &app.world().resource::<Arrivals>().0;
    ensure!(walker_landings == 1, "walker observer fired {walker_landings} times");
    ensure!(arrivals.len() == 2, "global observer saw {arrivals:?}");
    ensure!(arrivals.contains(&walker) && arrivals.contains(&bystander));
    Ok(())
}
