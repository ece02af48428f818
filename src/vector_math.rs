//! Basic vector math helper functions.
//! Small helpers for stepping points towards a destination without overshoot.
use glam::Vec2;

/// Returns the squared distance between two points.
///
/// Cheaper than [`Vec2::distance`] because it skips the square root, which is
/// all the arrival test needs.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use tilestep::vector_math::squared_distance;
/// let d2 = squared_distance(Vec2::ZERO, Vec2::new(3.0, 4.0));
/// assert!((d2 - 25.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn squared_distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length_squared()
}

/// Moves `current` towards `target` by at most `max_delta` units.
///
/// When the remaining distance is within `max_delta` the target itself is
/// returned, so repeated calls never overshoot. A non-positive or non-finite
/// `max_delta` leaves `current` unchanged.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use tilestep::move_towards;
/// let halfway = move_towards(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.5);
/// assert!((halfway.x - 0.5).abs() < 1e-6);
///
/// let clamped = move_towards(Vec2::ZERO, Vec2::new(1.0, 0.0), 5.0);
/// assert_eq!(clamped, Vec2::new(1.0, 0.0));
/// ```
#[must_use]
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    if !max_delta.is_finite() || max_delta <= 0.0 {
        return current;
    }

    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta {
        return target;
    }

    current + to_target / distance * max_delta
}
