//! Board physics: gravity, collisions, boundary exits and motion.
//!
//! [`step`] advances a caller-owned body collection by one frame. It keeps
//! no state of its own, visits bodies strictly in collection order and
//! returns everything the host needs to react to as plain data, so the same
//! input always produces the same output. [`PhysicsPlugin`] wires it into a
//! Bevy app's `FixedUpdate` schedule.

mod boundary;
mod collision;
mod config;
mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use boundary::check_boundaries;
pub use collision::{COINCIDENT_NORMAL, CollisionEvent, resolve_collisions, resolve_pair};
pub use config::{ConfigError, PhysicsConfig};
pub use gravity::{apply_gravity, pair_force};
pub use integrator::{advance_kinematics, are_all_stationary, below_threshold, integrate_motion};

use crate::body::Body;
use crate::types::PlayField;

/// What happened during one [`step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Contacts resolved this frame, in resolution order.
    pub collisions: Vec<CollisionEvent>,
    /// Indices of bodies that left the field this frame.
    pub exited: Vec<usize>,
    /// Whether every active body was at rest after motion.
    pub settled: bool,
}

/// Advance the board by one frame.
///
/// Runs, in this fixed order: gravity, collision resolution, boundary
/// check, motion integration with damping, and the rest check.
///
/// # Arguments
/// * `bodies` - Ordered body collection, owned by the caller
/// * `field` - Playing field the boundary check uses
/// * `config` - Physical constants
pub fn step(bodies: &mut [Body], field: &PlayField, config: &PhysicsConfig) -> StepReport {
    apply_gravity(bodies, config.gravity_constant);
    let collisions = resolve_collisions(bodies, config.restitution);
    let exited = check_boundaries(bodies, field, config.boundary_margin);
    integrate_motion(
        bodies,
        config.frame_dt,
        config.damping,
        config.stationary_threshold,
    );
    let settled = are_all_stationary(bodies, config.stationary_threshold);

    StepReport {
        collisions,
        exited,
        settled,
    }
}

/// Host-owned board state driven by [`PhysicsPlugin`].
#[derive(Resource, Debug)]
pub struct PlanetTable {
    /// Bodies in physics order.
    pub bodies: Vec<Body>,
    /// Skip stepping while set.
    pub paused: bool,
    settled: bool,
}

impl Default for PlanetTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PlanetTable {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            paused: false,
            settled: true,
        }
    }

    /// Whether the last simulated frame ended with every body at rest.
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// A contact, forwarded to the cosmetic layer.
#[derive(Message, Clone, Debug)]
pub struct CollisionMessage {
    pub event: CollisionEvent,
    /// How many particles the renderer should spawn.
    pub particles: u32,
}

/// A body left the field and is out of play.
#[derive(Message, Clone, Copy, Debug)]
pub struct BodyExitedMessage {
    /// Index into [`PlanetTable::bodies`].
    pub index: usize,
}

/// The board came to rest; the turn is over.
#[derive(Message, Clone, Copy, Debug)]
pub struct SettledMessage;

/// Plugin stepping the [`PlanetTable`] once per fixed tick.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<PhysicsConfig>()
            .cloned()
            .unwrap_or_default();
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("Rejected physics configuration ({err}), using defaults");
                PhysicsConfig::default()
            }
        };

        app.insert_resource(config)
            .init_resource::<PlayField>()
            .init_resource::<PlanetTable>()
            .add_message::<CollisionMessage>()
            .add_message::<BodyExitedMessage>()
            .add_message::<SettledMessage>()
            .add_systems(FixedUpdate, physics_step);
    }
}

/// Advance the table by one frame and publish what happened.
fn physics_step(
    mut table: ResMut<PlanetTable>,
    field: Res<PlayField>,
    config: Res<PhysicsConfig>,
    mut collisions: MessageWriter<CollisionMessage>,
    mut exits: MessageWriter<BodyExitedMessage>,
    mut settled: MessageWriter<SettledMessage>,
) {
    if table.paused {
        return;
    }

    let report = step(&mut table.bodies, &field, &config);

    for event in report.collisions {
        collisions.write(CollisionMessage {
            event,
            particles: config.particle_count,
        });
    }

    for index in report.exited {
        exits.write(BodyExitedMessage { index });
    }

    if report.settled && !table.settled {
        settled.write(SettledMessage);
    }
    table.settled = report.settled;
}
