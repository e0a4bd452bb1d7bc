//! Property-based tests for board physics using proptest.
//!
//! These tests verify physical invariants across a wide range of masses,
//! radii, velocities and placements.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{
    PhysicsConfig, apply_gravity, check_boundaries, integrate_motion, pair_force, resolve_pair,
    step,
};
use crate::body::Body;
use crate::launch::shoot_force;
use crate::prediction::predict;
use crate::test_utils::{assertions, fixtures};
use crate::types::PlayField;

/// An overlapping pair: first at the origin, second at `overlap * (r1 + r2)`
/// along `angle`.
fn overlapping_pair(
    (m1, r1, v1): (f64, f64, DVec2),
    (m2, r2, v2): (f64, f64, DVec2),
    angle: f64,
    overlap: f64,
) -> (Body, Body) {
    let a = fixtures::planet(0.0, 0.0, m1, r1).with_velocity(v1);
    let offset = DVec2::from_angle(angle) * overlap * (r1 + r2);
    let b = fixtures::planet(offset.x, offset.y, m2, r2).with_velocity(v2);
    (a, b)
}

fn velocity() -> impl Strategy<Value = DVec2> {
    (-20.0f64..20.0, -20.0f64..20.0).prop_map(|(x, y)| DVec2::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Verify an overlapping pair ends exactly touching.
    ///
    /// Each body moves half the overlap along the normal, so the centers end
    /// up exactly `r1 + r2` apart.
    #[test]
    fn prop_contact_separates_to_touching(
        m1 in 1.0f64..100.0,
        m2 in 1.0f64..100.0,
        r1 in 2.0f64..40.0,
        r2 in 2.0f64..40.0,
        v1 in velocity(),
        v2 in velocity(),
        angle in 0.0f64..std::f64::consts::TAU,
        overlap in 0.05f64..0.99,
    ) {
        let (mut a, mut b) = overlapping_pair((m1, r1, v1), (m2, r2, v2), angle, overlap);
        let midpoint = (a.position + b.position) * 0.5;

        prop_assert!(resolve_pair(&mut a, &mut b, 0.8));

        let distance = a.distance_to(&b);
        prop_assert!(
            (distance - (r1 + r2)).abs() < 1e-9 * (r1 + r2),
            "distance {} != radius sum {}", distance, r1 + r2
        );
        // Symmetric push keeps the midpoint in place
        let new_mid = (a.position + b.position) * 0.5;
        prop_assert!((new_mid - midpoint).length() < 1e-9);
    }

    /// Verify contacts conserve momentum and never create kinetic energy.
    #[test]
    fn prop_contact_conserves_momentum(
        m1 in 1.0f64..100.0,
        m2 in 1.0f64..100.0,
        r1 in 2.0f64..40.0,
        r2 in 2.0f64..40.0,
        v1 in velocity(),
        v2 in velocity(),
        angle in 0.0f64..std::f64::consts::TAU,
        overlap in 0.05f64..0.99,
        restitution in 0.0f64..=1.0,
    ) {
        let (mut a, mut b) = overlapping_pair((m1, r1, v1), (m2, r2, v2), angle, overlap);
        let p_before = a.momentum() + b.momentum();
        let ke_before = a.kinetic_energy() + b.kinetic_energy();

        resolve_pair(&mut a, &mut b, restitution);

        let p_after = a.momentum() + b.momentum();
        let ke_after = a.kinetic_energy() + b.kinetic_energy();
        let scale = 1.0 + p_before.length().max(ke_before);

        prop_assert!((p_after - p_before).length() < 1e-9 * scale);
        prop_assert!(
            ke_after <= ke_before + 1e-9 * scale,
            "kinetic energy grew: {} -> {}", ke_before, ke_after
        );
    }

    /// Verify an elastic head-on contact of equal masses swaps velocities.
    #[test]
    fn prop_elastic_equal_masses_swap(
        mass in 1.0f64..100.0,
        radius in 2.0f64..30.0,
        speed_a in 0.5f64..20.0,
        speed_b in 0.5f64..20.0,
        overlap in 0.1f64..0.99,
    ) {
        let mut bodies = fixtures::head_on_pair(
            (mass, radius, speed_a),
            (mass, radius, speed_b),
            overlap * 2.0 * radius,
        );
        let (left, right) = bodies.split_at_mut(1);
        resolve_pair(&mut left[0], &mut right[0], 1.0);

        prop_assert!((bodies[0].velocity.x + speed_b).abs() < 1e-9 * (speed_a + speed_b));
        prop_assert!((bodies[1].velocity.x - speed_a).abs() < 1e-9 * (speed_a + speed_b));
    }

    /// Verify one gravity pass leaves total momentum unchanged.
    ///
    /// Every pair exchanges equal and opposite impulses.
    #[test]
    fn prop_gravity_is_momentum_neutral(
        placements in prop::collection::vec(
            (0.0f64..1200.0, 0.0f64..800.0, 1.0f64..100.0),
            2..8,
        ),
        g in 0.0f64..5.0,
    ) {
        let mut bodies: Vec<Body> = placements
            .iter()
            .map(|&(x, y, m)| fixtures::planet(x, y, m, 5.0))
            .collect();
        let before = assertions::total_momentum(&bodies);

        apply_gravity(&mut bodies, g);

        let after = assertions::total_momentum(&bodies);
        let largest = bodies
            .iter()
            .map(|b| b.momentum().length())
            .fold(1.0, f64::max);
        prop_assert!(
            (after - before).length() <= 1e-9 * largest,
            "momentum drifted from {:?} to {:?}", before, after
        );
    }

    /// Verify the gravity pass does not depend on body order.
    ///
    /// Reversing the collection must give each body the same velocity
    /// change, up to floating-point summation order.
    #[test]
    fn prop_gravity_is_order_independent(
        placements in prop::collection::vec(
            (0.0f64..1200.0, 0.0f64..800.0, 1.0f64..100.0),
            2..8,
        ),
        g in 0.0f64..5.0,
    ) {
        let forward: Vec<Body> = placements
            .iter()
            .map(|&(x, y, m)| fixtures::planet(x, y, m, 5.0))
            .collect();
        let mut reversed: Vec<Body> = forward.iter().rev().cloned().collect();
        let mut forward_run = forward.clone();

        apply_gravity(&mut forward_run, g);
        apply_gravity(&mut reversed, g);
        reversed.reverse();

        for (i, (a, b)) in forward_run.iter().zip(&reversed).enumerate() {
            // Sum of contribution magnitudes bounds the rounding error
            let scale: f64 = forward
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .filter_map(|(_, other)| pair_force(&forward[i], other, g))
                .map(|f| f.length() / forward[i].mass())
                .sum();
            prop_assert!(
                (a.velocity - b.velocity).length() <= 1e-12 * (1.0 + scale),
                "body {} got {:?} forward but {:?} reversed", i, a.velocity, b.velocity
            );
        }
    }

    /// Verify the boundary check reports each exit once.
    #[test]
    fn prop_boundary_check_is_idempotent(
        positions in prop::collection::vec((-300.0f64..1500.0, -300.0f64..1100.0), 1..10),
    ) {
        let field = PlayField::default();
        let mut bodies: Vec<Body> = positions
            .iter()
            .map(|&(x, y)| fixtures::planet(x, y, 10.0, 5.0))
            .collect();

        let first = check_boundaries(&mut bodies, &field, 50.0);
        let second = check_boundaries(&mut bodies, &field, 50.0);

        prop_assert!(second.is_empty());
        for (i, body) in bodies.iter().enumerate() {
            prop_assert_eq!(body.active, !first.contains(&i));
        }
    }

    /// Verify the forecast matches the motion of a lone launched body.
    ///
    /// With nothing to collide with and gravity acting on no pair, the n-th
    /// forecast point is the body's position after n frames.
    #[test]
    fn prop_forecast_matches_motion(
        mass in 1.0f64..100.0,
        drag_x in -150.0f64..150.0,
        drag_y in -150.0f64..150.0,
    ) {
        let config = PhysicsConfig::default();
        let start = DVec2::new(600.0, 400.0);
        let Some(shot) = shoot_force(start, start + DVec2::new(drag_x, drag_y), &config) else {
            return Ok(());
        };

        let mut bodies = vec![fixtures::planet(start.x, start.y, mass, 10.0)];
        let forecast = predict(&bodies[0], shot.force, 50, &config);
        prop_assert!(bodies[0].launch(shot.force));

        for point in forecast.iter() {
            integrate_motion(
                &mut bodies,
                config.frame_dt,
                config.damping,
                config.stationary_threshold,
            );
            prop_assert!((bodies[0].position - point).length() < 1e-9);
        }
    }

    /// Verify shot power is normalized and drives the force magnitude.
    #[test]
    fn prop_shot_power_in_range(
        dx in -500.0f64..500.0,
        dy in -500.0f64..500.0,
    ) {
        let config = PhysicsConfig::default();
        if let Some(shot) = shoot_force(DVec2::ZERO, DVec2::new(dx, dy), &config) {
            prop_assert!((0.0..=1.0).contains(&shot.power));
            let expected = shot.power * config.max_power;
            prop_assert!((shot.force.length() - expected).abs() < 1e-9 * (1.0 + expected));
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_overlapping_pair_fixture() {
        let (a, b) = overlapping_pair(
            (10.0, 5.0, DVec2::ZERO),
            (10.0, 5.0, DVec2::ZERO),
            0.0,
            0.5,
        );
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_long_run_stays_finite() {
        let config = PhysicsConfig::default();
        let field = PlayField::default();
        let mut bodies = fixtures::busy_board();

        for _ in 0..1000 {
            step(&mut bodies, &field, &config);
        }
        assertions::assert_finite(&bodies);
    }
}
