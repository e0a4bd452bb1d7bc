//! Converting an aiming drag into a shot force.

use bevy::math::DVec2;

use crate::physics::PhysicsConfig;

/// A shot ready to be applied with [`crate::body::Body::launch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    /// Force along the drag direction.
    pub force: DVec2,
    /// Drag length as a fraction of the maximum, in `[0, 1]`. UI feedback only.
    pub power: f64,
}

/// Turn a drag from `start` to `end` into a shot.
///
/// The drag length is divided by `config.max_drag_distance`, clamped to
/// `[0, 1]` and scaled by `config.max_power`. The force points from `start`
/// toward `end`.
///
/// # Returns
/// `None` for a zero-length drag, which has no direction and means no shot.
pub fn shoot_force(start: DVec2, end: DVec2, config: &PhysicsConfig) -> Option<Shot> {
    let drag = end - start;
    let distance = drag.length();

    if distance == 0.0 || !distance.is_finite() {
        return None;
    }

    let power = (distance / config.max_drag_distance).clamp(0.0, 1.0);
    Some(Shot {
        force: drag / distance * (power * config.max_power),
        power,
    })
}
