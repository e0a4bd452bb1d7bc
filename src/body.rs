//! Planet bodies in play.
//!
//! A [`Body`] is plain physical state. The physics passes mutate it through
//! the primitives defined here; nothing else owns or caches bodies, so the
//! host decides where the collection lives.

use std::collections::VecDeque;

use bevy::color::Srgba;
use bevy::math::DVec2;

use crate::physics::{advance_kinematics, below_threshold};
use crate::types::{Owner, PlayField, TRAIL_LENGTH};

/// Reasons a body cannot be constructed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("body radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("body position must be finite, got ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },
}

/// Bounded FIFO of recent positions, oldest first.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<DVec2>,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest one when full.
    pub fn push(&mut self, point: DVec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    /// Most recent point, if any.
    pub fn newest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(TRAIL_LENGTH)
    }
}

/// Physical state of one planet on the board.
///
/// `mass` and `radius` are validated at construction and cannot be changed
/// afterwards, so every body in a simulation has strictly positive, finite
/// values for both.
#[derive(Clone, Debug)]
pub struct Body {
    /// Display name, used in log lines.
    pub name: String,
    /// Center position in field units.
    pub position: DVec2,
    /// Velocity in field units per frame.
    pub velocity: DVec2,
    /// Whether the body still takes part in the simulation.
    pub active: bool,
    /// Whether the body may still be launched this round.
    pub can_act: bool,
    pub owner: Owner,
    /// Base color, forwarded in collision events for the cosmetic layer.
    pub color: Srgba,
    mass: f64,
    radius: f64,
    trail: Trail,
}

impl Body {
    /// Create a resting, active body.
    ///
    /// # Errors
    /// Returns [`BodyError`] if `mass` or `radius` is not strictly positive
    /// and finite, or if `position` has a non-finite component.
    pub fn new(position: DVec2, mass: f64, radius: f64) -> Result<Self, BodyError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BodyError::InvalidMass(mass));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BodyError::InvalidRadius(radius));
        }
        if !position.is_finite() {
            return Err(BodyError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }

        Ok(Self {
            name: String::new(),
            position,
            velocity: DVec2::ZERO,
            active: true,
            can_act: true,
            owner: Owner::Unassigned,
            color: Srgba::WHITE,
            mass,
            radius,
            trail: Trail::default(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<Owner>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_color(mut self, color: Srgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Replace the trail with an empty one of the given capacity.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = Trail::with_capacity(capacity);
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Apply an instantaneous force: `velocity += force / mass`.
    ///
    /// There is no `dt` here; the board treats every force as a per-frame
    /// impulse.
    #[inline]
    pub fn apply_force(&mut self, force: DVec2) {
        self.velocity += force / self.mass;
    }

    /// Launch the body with a shot force, replacing its current velocity.
    ///
    /// Returns `false` and leaves the body untouched if it is out of play or
    /// has already been launched this round.
    pub fn launch(&mut self, force: DVec2) -> bool {
        if !self.active || !self.can_act {
            return false;
        }
        self.velocity = force / self.mass;
        self.can_act = false;
        true
    }

    /// Advance one frame: move, damp, record the trail and snap to rest.
    ///
    /// The trail records the new position only while either velocity
    /// component still exceeds `threshold` after damping.
    pub fn advance(&mut self, dt: f64, damping: f64, threshold: f64) {
        (self.position, self.velocity) =
            advance_kinematics(self.position, self.velocity, dt, damping);

        if self.is_moving(threshold) {
            self.trail.push(self.position);
        }

        if below_threshold(self.velocity, threshold) {
            self.velocity = DVec2::ZERO;
        }
    }

    /// Whether either velocity component exceeds `threshold`.
    pub fn is_moving(&self, threshold: f64) -> bool {
        self.velocity.x.abs() > threshold || self.velocity.y.abs() > threshold
    }

    /// Take the body out of play. Returns `true` only on the first call.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Whether the center has left `field` grown by `margin`.
    pub fn is_out_of_bounds(&self, field: &PlayField, margin: f64) -> bool {
        !field.contains(self.position, margin)
    }

    /// Whether `point` lies on or inside the body's circle.
    pub fn contains_point(&self, point: DVec2) -> bool {
        self.position.distance(point) <= self.radius
    }

    /// Center-to-center distance.
    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance(other.position)
    }

    /// Kinetic energy `m v² / 2`.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Linear momentum `m v`.
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Return to `position` at rest for a new round.
    pub fn reset(&mut self, position: DVec2) {
        self.position = position;
        self.velocity = DVec2::ZERO;
        self.trail.clear();
        self.active = true;
        self.can_act = true;
    }
}
