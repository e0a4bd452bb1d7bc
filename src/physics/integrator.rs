//! Per-frame motion integration with multiplicative damping.
//!
//! Motion is explicit Euler over one frame followed by a discrete velocity
//! decay: `pos += vel * dt; vel *= damping`. The decay is applied once per
//! frame whatever `dt` is, so it is not a continuous drag law. The trajectory
//! predictor uses [`advance_kinematics`] so forecasts follow the same rule.

use bevy::math::DVec2;

use crate::body::Body;

/// One frame of free motion for a bare position/velocity pair.
#[inline]
pub fn advance_kinematics(pos: DVec2, vel: DVec2, dt: f64, damping: f64) -> (DVec2, DVec2) {
    (pos + vel * dt, vel * damping)
}

/// Whether both velocity components are below `threshold`.
#[inline]
pub fn below_threshold(vel: DVec2, threshold: f64) -> bool {
    vel.x.abs() < threshold && vel.y.abs() < threshold
}

/// Move, damp and settle every active body by one frame.
///
/// Bodies whose speed still exceeds `threshold` on either axis after damping
/// append their new position to their trail; bodies below it on both axes
/// snap to an exact stop.
pub fn integrate_motion(bodies: &mut [Body], dt: f64, damping: f64, threshold: f64) {
    for body in bodies.iter_mut().filter(|b| b.active) {
        body.advance(dt, damping, threshold);
    }
}

/// Whether every active body is at rest.
///
/// A body is at rest when neither velocity component exceeds `threshold`.
/// Inactive bodies are ignored, so an empty or fully knocked-out board
/// counts as settled. This is the turn-completion signal for the host.
pub fn are_all_stationary(bodies: &[Body], threshold: f64) -> bool {
    bodies
        .iter()
        .filter(|b| b.active)
        .all(|b| !b.is_moving(threshold))
}
