//! Drafted planets and their starting line-up.
//!
//! Provides the nine planet archetypes and helpers to place a drafted
//! roster on the board and to put it back in position between rounds.

pub mod presets;

use bevy::color::Srgba;
use bevy::log::info;
use bevy::math::DVec2;

use crate::body::{Body, BodyError};
use crate::physics::PhysicsConfig;
use crate::types::{PlayField, Player};

pub use presets::ARCHETYPES;

/// Horizontal offset of a player's first column from their side edge.
const LINE_UP_EDGE_OFFSET: f64 = 100.0;
/// Spacing between the two columns of a line-up.
const LINE_UP_COLUMN_SPACING: f64 = 80.0;
/// Vertical position of the first row.
const LINE_UP_TOP: f64 = 200.0;
/// Spacing between rows.
const LINE_UP_ROW_SPACING: f64 = 150.0;

/// The draftable planets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetKind {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetKind {
    /// Physical template for this planet.
    pub fn archetype(self) -> &'static Archetype {
        match self {
            PlanetKind::Sun => &presets::SUN,
            PlanetKind::Mercury => &presets::MERCURY,
            PlanetKind::Venus => &presets::VENUS,
            PlanetKind::Earth => &presets::EARTH,
            PlanetKind::Mars => &presets::MARS,
            PlanetKind::Jupiter => &presets::JUPITER,
            PlanetKind::Saturn => &presets::SATURN,
            PlanetKind::Uranus => &presets::URANUS,
            PlanetKind::Neptune => &presets::NEPTUNE,
        }
    }
}

/// Template a body is built from.
#[derive(Clone, Copy, Debug)]
pub struct Archetype {
    pub kind: PlanetKind,
    pub name: &'static str,
    pub radius: f64,
    pub mass: f64,
    /// Base color as 8-bit sRGB.
    pub rgb: [u8; 3],
}

impl Archetype {
    pub fn color(&self) -> Srgba {
        let [r, g, b] = self.rgb;
        Srgba::rgb_u8(r, g, b)
    }

    /// Build a resting body of this archetype at `position`.
    pub fn spawn(&self, position: DVec2, config: &PhysicsConfig) -> Result<Body, BodyError> {
        Ok(Body::new(position, self.mass, self.radius)?
            .with_name(self.name)
            .with_color(self.color())
            .with_trail_capacity(config.trail_length))
    }
}

/// Starting position of a player's `slot`-th planet.
///
/// Planets fill two columns near the player's own side edge, top to bottom:
/// player A on the left, player B mirrored on the right.
pub fn start_slot(player: Player, slot: usize, field: &PlayField) -> DVec2 {
    let column = (slot % 2) as f64 * LINE_UP_COLUMN_SPACING;
    let y = LINE_UP_TOP + (slot / 2) as f64 * LINE_UP_ROW_SPACING;
    let x = match player {
        Player::A => LINE_UP_EDGE_OFFSET + column,
        Player::B => field.width - LINE_UP_EDGE_OFFSET - LINE_UP_COLUMN_SPACING + column,
    };
    DVec2::new(x, y)
}

/// Build the board for a match from each player's drafted planets.
///
/// Player A's bodies come first, in draft order, then player B's. That order
/// is the iteration order every physics pass uses.
pub fn line_up(
    player_a: &[PlanetKind],
    player_b: &[PlanetKind],
    field: &PlayField,
    config: &PhysicsConfig,
) -> Result<Vec<Body>, BodyError> {
    let mut bodies = Vec::with_capacity(player_a.len() + player_b.len());

    for (player, kinds) in [(Player::A, player_a), (Player::B, player_b)] {
        for (slot, kind) in kinds.iter().enumerate() {
            let body = kind
                .archetype()
                .spawn(start_slot(player, slot, field), config)?
                .with_owner(player);
            bodies.push(body);
        }
    }

    Ok(bodies)
}

/// Put every owned body back on its starting slot for a new round.
///
/// Slots are reassigned per player in collection order, matching
/// [`line_up`]. Unassigned bodies are left alone.
pub fn reset_for_round(bodies: &mut [Body], field: &PlayField) {
    for player in [Player::A, Player::B] {
        for (slot, body) in bodies.iter_mut().filter(|b| b.owner.is(player)).enumerate() {
            body.reset(start_slot(player, slot, field));
        }
    }
    info!("reset {} bodies for a new round", bodies.len());
}
