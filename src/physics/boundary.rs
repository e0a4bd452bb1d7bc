//! Detection of bodies that have left the playing field.

use bevy::log::debug;

use crate::body::Body;
use crate::types::PlayField;

/// Deactivate every active body whose center lies outside the field grown
/// by `margin`.
///
/// # Returns
/// Indices of the bodies deactivated by this call, in ascending order.
/// Bodies that were already inactive are never reported again, so calling
/// this twice on unchanged state returns an empty list the second time.
pub fn check_boundaries(bodies: &mut [Body], field: &PlayField, margin: f64) -> Vec<usize> {
    let mut exited = Vec::new();

    for (index, body) in bodies.iter_mut().enumerate() {
        if body.active && body.is_out_of_bounds(field, margin) && body.deactivate() {
            debug!(
                "{} left the field at ({:.1}, {:.1})",
                body.name, body.position.x, body.position.y
            );
            exited.push(index);
        }
    }

    exited
}
