//! Concrete grid actors built on a composed [`Mover`].
//!
//! Each actor owns its mover, its body and a small completion handler. The
//! handler is a separate field so [`Mover::update_step`] can borrow the body
//! and the handler at the same time.

use glam::Vec2;
use log::debug;

use crate::body::{Body, PointBody};
use crate::collision::CollisionQuery;
use crate::grid::{Direction, GridPos};
use crate::mover::{MoveCompletion, Mover, StepOutcome};

/// Shared surface of everything that walks the grid.
pub trait Actor {
    /// Movement state of this actor.
    fn mover(&self) -> &Mover;

    /// Current world position.
    fn position(&self) -> Vec2;

    /// Advances any move in flight by `dt` seconds.
    fn update(&mut self, dt: f32) -> StepOutcome;

    /// Tile the actor currently occupies, rounding while between tiles.
    fn tile(&self) -> GridPos {
        GridPos::from_world(self.position())
    }
}

/// Requests a one-tile step in `direction` unless the mover is busy or the
/// destination is blocked on the mover's layers.
fn attempt_step<B, Q>(mover: &mut Mover, body: &B, direction: Direction, query: &Q) -> bool
where
    B: Body + ?Sized,
    Q: CollisionQuery + ?Sized,
{
    if mover.is_moving() {
        return false;
    }
    let from = body.position();
    let delta = direction.world_delta();
    if query.is_blocked(from, from + delta, mover.blocking_layer()) {
        debug!("step {direction:?} from {from} blocked");
        return false;
    }
    mover.request_step(body, delta)
}

/// Player-side bookkeeping run when a step lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTurn {
    food: u32,
    turn_over: bool,
}

impl MoveCompletion for PlayerTurn {
    fn on_move_complete(&mut self) {
        self.food = self.food.saturating_sub(1);
        self.turn_over = true;
        debug!("player step complete, food left {}", self.food);
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    mover: Mover,
    body: PointBody,
    turn: PlayerTurn,
}

impl Player {
    /// Places a player on `start` with `food` points.
    #[must_use]
    pub fn new(mover: Mover, start: GridPos, food: u32) -> Self {
        Self {
            mover,
            body: PointBody::new(start.to_world()),
            turn: PlayerTurn {
                food,
                turn_over: false,
            },
        }
    }

    /// Tries to step one tile in `direction`.
    ///
    /// Returns `false` when a step is already in flight or the destination is
    /// blocked.
    pub fn attempt_move<Q: CollisionQuery + ?Sized>(
        &mut self,
        direction: Direction,
        query: &Q,
    ) -> bool {
        attempt_step(&mut self.mover, &self.body, direction, query)
    }

    /// Hands control back to the player for a new turn.
    pub const fn begin_turn(&mut self) {
        self.turn.turn_over = false;
    }

    /// Returns `true` once the player's last step has landed.
    #[must_use]
    pub const fn is_turn_over(&self) -> bool {
        self.turn.turn_over
    }

    /// Remaining food points.
    #[must_use]
    pub const fn food(&self) -> u32 {
        self.turn.food
    }
}

impl Actor for Player {
    fn mover(&self) -> &Mover {
        &self.mover
    }

    fn position(&self) -> Vec2 {
        self.body.position()
    }

    fn update(&mut self, dt: f32) -> StepOutcome {
        self.mover.update_step(&mut self.body, dt, &mut self.turn)
    }
}

/// Enemy-side bookkeeping run when a step lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyTurn {
    skip_move: bool,
    moves: u32,
}

impl MoveCompletion for EnemyTurn {
    fn on_move_complete(&mut self) {
        self.moves += 1;
    }
}

/// A hostile actor chasing a target tile, moving on every other turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    mover: Mover,
    body: PointBody,
    turn: EnemyTurn,
}

impl Enemy {
    /// Places an enemy on `start`.
    #[must_use]
    pub fn new(mover: Mover, start: GridPos) -> Self {
        Self {
            mover,
            body: PointBody::new(start.to_world()),
            turn: EnemyTurn::default(),
        }
    }

    /// Direction closing the larger of the two axis gaps to `target`.
    ///
    /// Ties favour the horizontal axis. Returns `None` when already on
    /// `target`.
    #[must_use]
    pub fn chase_direction(&self, target: GridPos) -> Option<Direction> {
        let here = self.tile();
        let dx = target.x - here.x;
        let dy = target.y - here.y;
        if dx == 0 && dy == 0 {
            return None;
        }
        let direction = if dx.abs() >= dy.abs() {
            if dx > 0 {
                Direction::East
            } else {
                Direction::West
            }
        } else if dy > 0 {
            Direction::North
        } else {
            Direction::South
        };
        Some(direction)
    }

    /// Plays one enemy turn against `target`.
    ///
    /// Every other call is skipped outright. Returns `true` if a step was
    /// requested.
    pub fn take_turn<Q: CollisionQuery + ?Sized>(&mut self, target: GridPos, query: &Q) -> bool {
        if self.turn.skip_move {
            self.turn.skip_move = false;
            return false;
        }
        let accepted = self
            .chase_direction(target)
            .is_some_and(|direction| attempt_step(&mut self.mover, &self.body, direction, query));
        self.turn.skip_move = true;
        accepted
    }

    /// Completed steps so far.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.turn.moves
    }
}

impl Actor for Enemy {
    fn mover(&self) -> &Mover {
        &self.mover
    }

    fn position(&self) -> Vec2 {
        self.body.position()
    }

    fn update(&mut self, dt: f32) -> StepOutcome {
        self.mover.update_step(&mut self.body, dt, &mut self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{BlockingGrid, LayerMask};
    use crate::mover::MoveTime;
    use bevy::prelude::Transform;
    use rstest::{fixture, rstest};

    const WALLS: LayerMask = LayerMask::layer(8);

    #[fixture]
    fn mover() -> Mover {
        let move_time = MoveTime::new(0.1).unwrap_or_else(|e| panic!("{e}"));
        Mover::new(move_time, WALLS)
    }

    fn settle(actor: &mut impl Actor) -> StepOutcome {
        let mut outcome = StepOutcome::Idle;
        for _ in 0..100 {
            outcome = actor.update(0.02);
            if !actor.mover().is_moving() {
                break;
            }
        }
        outcome
    }

    #[rstest]
    fn step_targets_the_neighbouring_tile_of_any_body(mut mover: Mover) {
        let mut grid = BlockingGrid::new();
        grid.insert(GridPos::new(2, 4), WALLS);
        let body = Transform::from_xyz(2.0, 3.0, 9.0);

        assert!(!attempt_step(&mut mover, &body, Direction::North, &grid));
        assert!(!mover.is_moving());
        assert!(attempt_step(&mut mover, &body, Direction::West, &grid));
        assert_eq!(mover.target(), Some(Vec2::new(1.0, 3.0)));
        assert!(!attempt_step(&mut mover, &body, Direction::East, &grid));
    }

    #[rstest]
    fn player_step_spends_food_and_ends_turn(mover: Mover) {
        let grid = BlockingGrid::new();
        let mut player = Player::new(mover, GridPos::new(0, 0), 3);

        assert!(player.attempt_move(Direction::North, &grid));
        assert!(!player.is_turn_over());
        assert_eq!(settle(&mut player), StepOutcome::Arrived(Vec2::new(0.0, 1.0)));

        assert!(player.is_turn_over());
        assert_eq!(player.food(), 2);
        assert_eq!(player.tile(), GridPos::new(0, 1));

        player.begin_turn();
        assert!(!player.is_turn_over());
    }

    #[rstest]
    fn player_cannot_walk_into_walls(mover: Mover) {
        let mut grid = BlockingGrid::new();
        grid.insert(GridPos::new(1, 0), WALLS);
        let mut player = Player::new(mover, GridPos::new(0, 0), 3);

        assert!(!player.attempt_move(Direction::East, &grid));
        assert!(!player.mover().is_moving());
        assert!(player.attempt_move(Direction::West, &grid));
    }

    #[rstest]
    fn player_ignores_input_mid_step(mover: Mover) {
        let grid = BlockingGrid::new();
        let mut player = Player::new(mover, GridPos::new(0, 0), 3);
        assert!(player.attempt_move(Direction::East, &grid));
        let _outcome = player.update(0.05);
        assert!(!player.attempt_move(Direction::North, &grid));
        assert_eq!(player.mover().target(), Some(Vec2::new(1.0, 0.0)));
    }

    #[rstest]
    #[case(GridPos::new(3, 1), Some(Direction::East))]
    #[case(GridPos::new(-1, 4), Some(Direction::North))]
    #[case(GridPos::new(0, -2), Some(Direction::South))]
    #[case(GridPos::new(-2, 2), Some(Direction::West))]
    #[case(GridPos::new(0, 0), None)]
    fn enemy_closes_the_wider_gap(
        mover: Mover,
        #[case] target: GridPos,
        #[case] expected: Option<Direction>,
    ) {
        let enemy = Enemy::new(mover, GridPos::new(0, 0));
        assert_eq!(enemy.chase_direction(target), expected);
    }

    #[rstest]
    fn enemy_moves_every_other_turn(mover: Mover) {
        let grid = BlockingGrid::new();
        let target = GridPos::new(5, 0);
        let mut enemy = Enemy::new(mover, GridPos::new(0, 0));

        assert!(enemy.take_turn(target, &grid));
        let _outcome = settle(&mut enemy);
        assert!(!enemy.take_turn(target, &grid));
        assert!(enemy.take_turn(target, &grid));
        let _outcome = settle(&mut enemy);

        assert_eq!(enemy.moves(), 2);
        assert_eq!(enemy.tile(), GridPos::new(2, 0));
    }
}
