//! Core game types and default physical constants.
//!
//! The constants are the reference tuning of the board: velocities are
//! measured in field units per frame, masses and radii in the same
//! arbitrary units the planet archetypes use.

use bevy::prelude::*;
use bevy::math::DVec2;

/// Default gravitational constant for pairwise attraction.
pub const GRAVITY_CONSTANT: f64 = 0.5;

/// Default per-frame multiplicative velocity decay.
pub const DAMPING: f64 = 0.98;

/// Default restitution coefficient used in collisions.
pub const COLLISION_DAMPING: f64 = 0.8;

/// Default cap on the force a single shot can impart.
pub const MAX_POWER: f64 = 15.0;

/// Drag length (field units) that maps to a full-power shot.
pub const MAX_DRAG_DISTANCE: f64 = 100.0;

/// How far past the field edge a center may travel before the body is out.
pub const BOUNDARY_MARGIN: f64 = 50.0;

/// Per-axis speed below which a body counts as resting.
pub const STATIONARY_THRESHOLD: f64 = 0.1;

/// Number of recent positions kept in a body's trail.
pub const TRAIL_LENGTH: usize = 10;

/// Particles the cosmetic layer spawns per collision.
pub const PARTICLE_COUNT: u32 = 20;

/// Default field width.
pub const FIELD_WIDTH: f64 = 1200.0;

/// Default field height.
pub const FIELD_HEIGHT: f64 = 800.0;

/// One of the two competing players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Who a body belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Neutral body (not drafted by either player).
    #[default]
    Unassigned,
    /// Drafted by a player.
    Player(Player),
}

impl Owner {
    /// The owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::Unassigned => None,
            Owner::Player(player) => Some(player),
        }
    }

    /// Whether this tag names `player`.
    pub fn is(self, player: Player) -> bool {
        self == Owner::Player(player)
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        Owner::Player(player)
    }
}

/// Dimensions of the playing field. The origin is the top-left corner.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct PlayField {
    pub width: f64,
    pub height: f64,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl PlayField {
    /// Create a field of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point of the field.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `pos` lies inside the field grown by `margin` on every side.
    /// Points exactly on the grown edge are still inside.
    pub fn contains(&self, pos: DVec2, margin: f64) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }
}
