//! Pairwise gravitational attraction between planets on the board.
//!
//! Every unordered pair of active bodies attracts with `F = G m1 m2 / d²`.
//! The force is applied as an instantaneous impulse through
//! [`Body::apply_force`], equal and opposite on the two bodies.

use bevy::math::DVec2;

use crate::body::Body;

/// Force exerted on `a` by `b`, or `None` when the centers coincide.
///
/// The force on `b` is the negation of the returned vector.
#[inline]
pub fn pair_force(a: &Body, b: &Body, gravity_constant: f64) -> Option<DVec2> {
    let delta = b.position - a.position;
    let distance = delta.length();

    if distance == 0.0 {
        return None;
    }

    let magnitude = gravity_constant * a.mass() * b.mass() / (distance * distance);
    Some(delta / distance * magnitude)
}

/// Apply mutual gravity to every pair of active bodies.
///
/// Pairs are visited in index order `(i, j)` with `i < j`, and each pair's
/// force is computed from the positions as they are at that moment. Pairs
/// whose centers coincide exactly contribute nothing.
///
/// # Arguments
/// * `bodies` - Ordered body collection; inactive entries are skipped
/// * `gravity_constant` - G
pub fn apply_gravity(bodies: &mut [Body], gravity_constant: f64) {
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            if !bodies[i].active || !bodies[j].active {
                continue;
            }

            let Some(force) = pair_force(&bodies[i], &bodies[j], gravity_constant) else {
                continue;
            };

            // i < j, so splitting at j gives disjoint borrows
            let (head, tail) = bodies.split_at_mut(j);
            head[i].apply_force(force);
            tail[0].apply_force(-force);
        }
    }
}
