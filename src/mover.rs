//! Grid step movement state machine.
//!
//! A [`Mover`] interpolates an actor from its current position to a single
//! destination over [`MoveTime`] seconds. Requests are accepted only while the
//! mover is idle; the host loop advances the interpolation once per frame with
//! [`Mover::update_step`], which snaps the body onto the destination on arrival
//! and notifies the actor through [`MoveCompletion`].
//!
//! ```
//! use glam::Vec2;
//! use tilestep::{LayerMask, MoveTime, Mover, PointBody, StepOutcome};
//!
//! let mut mover = Mover::new(MoveTime::new(0.1).unwrap(), LayerMask::NONE);
//! let mut body = PointBody::default();
//! let mut arrivals = 0;
//!
//! assert!(mover.request_move(Vec2::new(1.0, 0.0)));
//! let outcome = mover.update_step(&mut body, 0.1, &mut || arrivals += 1);
//!
//! assert_eq!(outcome, StepOutcome::Arrived(Vec2::new(1.0, 0.0)));
//! assert_eq!(arrivals, 1);
//! assert!(!mover.is_moving());
//! ```

use bevy::prelude::Component;
use glam::Vec2;
use log::{debug, trace};

use crate::body::Body;
use crate::collision::LayerMask;
use crate::config::MoverConfig;
use crate::error::MoverError;
use crate::vector_math::{move_towards, squared_distance};
use crate::ARRIVAL_EPSILON;

/// Validated duration of a single grid step.
///
/// Stores the reciprocal alongside the duration so per-frame progress is a
/// multiplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTime {
    seconds: f32,
    inverse: f32,
}

impl MoveTime {
    /// Validates `seconds` and caches its reciprocal.
    ///
    /// # Errors
    /// Returns [`MoverError::InvalidMoveTime`] unless `seconds` is finite and
    /// strictly positive.
    pub fn new(seconds: f32) -> Result<Self, MoverError> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(MoverError::InvalidMoveTime(seconds));
        }
        Ok(Self {
            seconds,
            inverse: seconds.recip(),
        })
    }

    /// Seconds per grid step.
    #[must_use]
    pub const fn seconds(self) -> f32 {
        self.seconds
    }

    /// Units travelled per second.
    #[must_use]
    pub const fn inverse(self) -> f32 {
        self.inverse
    }
}

/// Progress of a mover between requests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MoverState {
    /// Waiting for a request.
    #[default]
    Idle,
    /// Interpolating towards `target`.
    Moving {
        /// Destination of the step in progress.
        target: Vec2,
    },
}

/// Result of a single [`Mover::update_step`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Nothing to do; the body was not touched.
    Idle,
    /// The body moved to the contained position and is still travelling.
    Advanced(Vec2),
    /// The body was snapped onto the contained destination and the mover went
    /// idle.
    Arrived(Vec2),
}

/// Notification hook fired once per completed move.
///
/// Each concrete actor supplies its own follow-up here: ending a turn,
/// applying damage, starting an animation.
pub trait MoveCompletion {
    /// Called after the body has been snapped onto the destination.
    fn on_move_complete(&mut self);
}

impl<F: FnMut()> MoveCompletion for F {
    fn on_move_complete(&mut self) {
        self();
    }
}

/// Per-actor movement state, composed into concrete actors.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Mover {
    move_time: MoveTime,
    blocking_layer: LayerMask,
    state: MoverState,
}

impl Mover {
    /// Creates an idle mover.
    #[must_use]
    pub const fn new(move_time: MoveTime, blocking_layer: LayerMask) -> Self {
        Self {
            move_time,
            blocking_layer,
            state: MoverState::Idle,
        }
    }

    /// Creates an idle mover from authored settings.
    ///
    /// # Errors
    /// Returns [`MoverError::InvalidMoveTime`] if the configured move time is
    /// not positive.
    pub fn from_config(config: &MoverConfig) -> Result<Self, MoverError> {
        let move_time = MoveTime::new(config.move_time)?;
        Ok(Self::new(move_time, config.blocking_layer))
    }

    /// Starts a move towards the absolute position `target`.
    ///
    /// Returns `false` and leaves the current move untouched if one is already
    /// in flight. No collision check happens here; callers consult a
    /// [`CollisionQuery`](crate::CollisionQuery) first.
    pub fn request_move(&mut self, target: Vec2) -> bool {
        if let MoverState::Moving { target: current } = self.state {
            debug!("move to {target} rejected, still travelling to {current}");
            return false;
        }
        debug!("move to {target} accepted");
        self.state = MoverState::Moving { target };
        true
    }

    /// Starts a move by `delta` relative to where `body` currently stands.
    pub fn request_step<B: Body + ?Sized>(&mut self, body: &B, delta: Vec2) -> bool {
        self.request_move(body.position() + delta)
    }

    /// Advances the move in flight by `dt` seconds.
    ///
    /// The body travels at most [`MoveTime::inverse`] `* dt` units towards the
    /// destination. Once the remaining squared distance is within
    /// [`ARRIVAL_EPSILON`] the body is placed exactly on the destination, the
    /// mover returns to idle and `completion` fires. Idle movers do nothing.
    pub fn update_step<B, C>(&mut self, body: &mut B, dt: f32, completion: &mut C) -> StepOutcome
    where
        B: Body + ?Sized,
        C: MoveCompletion + ?Sized,
    {
        let MoverState::Moving { target } = self.state else {
            return StepOutcome::Idle;
        };

        let current = body.position();
        if squared_distance(current, target) > ARRIVAL_EPSILON {
            let next = move_towards(current, target, self.move_time.inverse() * dt);
            body.set_position(next);
            if squared_distance(next, target) > ARRIVAL_EPSILON {
                trace!("advanced to {next} towards {target}");
                return StepOutcome::Advanced(next);
            }
        }

        body.set_position(target);
        self.state = MoverState::Idle;
        debug!("arrived at {target}");
        completion.on_move_complete();
        StepOutcome::Arrived(target)
    }

    /// Returns `true` while a move is in flight.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        matches!(self.state, MoverState::Moving { .. })
    }

    /// Destination of the move in flight.
    #[must_use]
    pub const fn target(&self) -> Option<Vec2> {
        match self.state {
            MoverState::Moving { target } => Some(target),
            MoverState::Idle => None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> MoverState {
        self.state
    }

    /// Layers this actor treats as obstacles.
    #[must_use]
    pub const fn blocking_layer(&self) -> LayerMask {
        self.blocking_layer
    }

    /// Duration of one grid step.
    #[must_use]
    pub const fn move_time(&self) -> MoveTime {
        self.move_time
    }
}
