//! Circle-circle collision detection and response.
//!
//! Overlapping pairs are first pushed apart symmetrically along the contact
//! normal, then receive an impulse scaled by the restitution coefficient.
//! Pairs are handled once each, in index order, in a single pass; a tight
//! cluster of three or more bodies may keep a little overlap for one frame,
//! which the next pass removes.

use bevy::color::Srgba;
use bevy::log::trace;
use bevy::math::DVec2;

use crate::body::Body;

/// Contact normal used when two centers coincide exactly.
pub const COINCIDENT_NORMAL: DVec2 = DVec2::X;

/// A contact between two bodies, reported for the cosmetic layer.
///
/// The resolver does no drawing; the renderer decides what to spawn from
/// this.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    /// Index of the first body of the pair (the lower index).
    pub first: usize,
    /// Index of the second body of the pair.
    pub second: usize,
    /// Midpoint between the two centers after separation.
    pub midpoint: DVec2,
    pub first_color: Srgba,
    pub second_color: Srgba,
}

/// Separate and bounce `a` and `b` if their circles overlap.
///
/// Returns `true` when the pair was in contact. The impulse is skipped when
/// the bodies are already separating along the normal, so a pair that stays
/// overlapped for several frames is not pushed twice.
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f64) -> bool {
    let delta = b.position - a.position;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if distance >= min_distance {
        return false;
    }

    let normal = if distance > 0.0 {
        delta / distance
    } else {
        COINCIDENT_NORMAL
    };

    // Each body takes half the correction regardless of mass
    let separation = normal * ((min_distance - distance) * 0.5);
    a.position -= separation;
    b.position += separation;

    let normal_velocity = (b.velocity - a.velocity).dot(normal);
    if normal_velocity >= 0.0 {
        return true;
    }

    let impulse = -(1.0 + restitution) * normal_velocity / (1.0 / a.mass() + 1.0 / b.mass());
    a.velocity -= normal * (impulse / a.mass());
    b.velocity += normal * (impulse / b.mass());

    true
}

/// Resolve every overlapping pair of active bodies.
///
/// # Arguments
/// * `bodies` - Ordered body collection; inactive entries are skipped
/// * `restitution` - Fraction of normal relative velocity kept (1 = elastic)
///
/// # Returns
/// One [`CollisionEvent`] per contact, in the order pairs were resolved.
pub fn resolve_collisions(bodies: &mut [Body], restitution: f64) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            if !bodies[i].active || !bodies[j].active {
                continue;
            }

            let (head, tail) = bodies.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);

            if !resolve_pair(a, b, restitution) {
                continue;
            }

            trace!("collision between {} and {}", a.name, b.name);
            events.push(CollisionEvent {
                first: i,
                second: j,
                midpoint: (a.position + b.position) * 0.5,
                first_color: a.color,
                second_color: b.color,
            });
        }
    }

    events
}
