//! Trajectory forecast for an aimed shot.
//!
//! The forecast is the advisory dotted line shown while a player drags to
//! aim. It replays the exact per-frame motion rule on a copy of the body's
//! kinematic state and ignores gravity and collisions, so with no other
//! bodies nearby the n-th forecast point is where the body will be after n
//! frames.

use std::iter::FusedIterator;

use bevy::math::DVec2;

use crate::body::Body;
use crate::physics::{PhysicsConfig, advance_kinematics, below_threshold};

/// Number of forecast points the aiming guide asks for.
pub const DEFAULT_PREDICTION_STEPS: usize = 50;

/// A lazily evaluated, finite forecast polyline.
///
/// Holds only the starting state, so it is cheap to copy and every call to
/// [`Trajectory::iter`] restarts from the first point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    origin: DVec2,
    initial_velocity: DVec2,
    max_steps: usize,
    dt: f64,
    damping: f64,
    threshold: f64,
}

impl Trajectory {
    /// Starting position (not itself part of the forecast).
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Velocity the shot would give the body.
    pub fn initial_velocity(&self) -> DVec2 {
        self.initial_velocity
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Iterate the forecast from the beginning.
    pub fn iter(&self) -> TrajectoryIter {
        TrajectoryIter {
            pos: self.origin,
            vel: self.initial_velocity,
            remaining: self.max_steps,
            settled: false,
            dt: self.dt,
            damping: self.damping,
            threshold: self.threshold,
        }
    }

    /// Collect the forecast into a vector.
    pub fn points(&self) -> Vec<DVec2> {
        self.iter().collect()
    }

    /// Where the forecast ends, or `None` when it has no points.
    pub fn end_point(&self) -> Option<DVec2> {
        self.iter().last()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = DVec2;
    type IntoIter = TrajectoryIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over forecast positions.
#[derive(Clone, Debug)]
pub struct TrajectoryIter {
    pos: DVec2,
    vel: DVec2,
    remaining: usize,
    settled: bool,
    dt: f64,
    damping: f64,
    threshold: f64,
}

impl Iterator for TrajectoryIter {
    type Item = DVec2;

    fn next(&mut self) -> Option<DVec2> {
        if self.settled || self.remaining == 0 {
            return None;
        }

        (self.pos, self.vel) = advance_kinematics(self.pos, self.vel, self.dt, self.damping);
        self.remaining -= 1;

        // The point where the body comes to rest is still emitted
        if below_threshold(self.vel, self.threshold) {
            self.settled = true;
        }

        Some(self.pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.settled {
            (0, Some(0))
        } else {
            (self.remaining.min(1), Some(self.remaining))
        }
    }
}

impl FusedIterator for TrajectoryIter {}

/// Forecast where `body` would travel if launched with `force`.
///
/// The body itself is not touched. The initial velocity is `force / mass`,
/// the same rule [`Body::launch`] applies.
///
/// # Arguments
/// * `body` - Body being aimed
/// * `force` - Shot force, usually from [`crate::launch::shoot_force`]
/// * `max_steps` - Upper bound on the number of points
/// * `config` - Supplies damping, rest threshold and frame step
pub fn predict(body: &Body, force: DVec2, max_steps: usize, config: &PhysicsConfig) -> Trajectory {
    Trajectory {
        origin: body.position,
        initial_velocity: force / body.mass(),
        max_steps,
        dt: config.frame_dt,
        damping: config.damping,
        threshold: config.stationary_threshold,
    }
}
