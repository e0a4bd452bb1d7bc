//! Tunable constants for the board physics.

use bevy::prelude::Resource;

use crate::types::{
    BOUNDARY_MARGIN, COLLISION_DAMPING, DAMPING, GRAVITY_CONSTANT, MAX_DRAG_DISTANCE, MAX_POWER,
    PARTICLE_COUNT, STATIONARY_THRESHOLD, TRAIL_LENGTH,
};

/// Rejected configuration values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("gravity_constant must not be negative, got {0}")]
    NegativeGravity(f64),
    #[error("damping must lie in (0, 1], got {0}")]
    Damping(f64),
    #[error("restitution must lie in [0, 1], got {0}")]
    Restitution(f64),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("trail_length must be at least 1")]
    EmptyTrail,
}

/// Physics configuration, passed explicitly to every pass.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravitational constant G. Default: 0.5.
    pub gravity_constant: f64,
    /// Velocity multiplier applied once per frame. Default: 0.98.
    pub damping: f64,
    /// Collision restitution e (1 = perfectly elastic). Default: 0.8.
    pub restitution: f64,
    /// Force of a full-power shot. Default: 15.
    pub max_power: f64,
    /// Drag length that maps to full power. Default: 100.
    pub max_drag_distance: f64,
    /// Distance past the field edge before a body is out. Default: 50.
    pub boundary_margin: f64,
    /// Per-axis rest threshold. Default: 0.1.
    pub stationary_threshold: f64,
    /// Trail capacity for bodies built from this config. Default: 10.
    pub trail_length: usize,
    /// Particle count hint forwarded with collision events. Default: 20.
    pub particle_count: u32,
    /// Position step per frame, in frames. Default: 1.
    pub frame_dt: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_constant: GRAVITY_CONSTANT,
            damping: DAMPING,
            restitution: COLLISION_DAMPING,
            max_power: MAX_POWER,
            max_drag_distance: MAX_DRAG_DISTANCE,
            boundary_margin: BOUNDARY_MARGIN,
            stationary_threshold: STATIONARY_THRESHOLD,
            trail_length: TRAIL_LENGTH,
            particle_count: PARTICLE_COUNT,
            frame_dt: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("gravity_constant", self.gravity_constant),
            ("damping", self.damping),
            ("restitution", self.restitution),
            ("max_power", self.max_power),
            ("max_drag_distance", self.max_drag_distance),
            ("boundary_margin", self.boundary_margin),
            ("stationary_threshold", self.stationary_threshold),
            ("frame_dt", self.frame_dt),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.gravity_constant < 0.0 {
            return Err(ConfigError::NegativeGravity(self.gravity_constant));
        }
        if self.damping <= 0.0 || self.damping > 1.0 {
            return Err(ConfigError::Damping(self.damping));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Restitution(self.restitution));
        }
        for (field, value) in [
            ("max_drag_distance", self.max_drag_distance),
            ("stationary_threshold", self.stationary_threshold),
            ("frame_dt", self.frame_dt),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.max_power < 0.0 {
            return Err(ConfigError::Negative {
                field: "max_power",
                value: self.max_power,
            });
        }
        if self.trail_length == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        Ok(())
    }

    /// Builder-style override of the restitution coefficient.
    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    /// Builder-style override of the gravitational constant.
    pub fn with_gravity(mut self, gravity_constant: f64) -> Self {
        self.gravity_constant = gravity_constant;
        self
    }
}
