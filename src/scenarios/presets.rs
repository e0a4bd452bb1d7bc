//! Planet archetypes available in the draft.
//!
//! Sizes and masses are game values, not astronomy: they are tuned so the
//! heavy gas giants are hard to move and the small rocky planets fly far.

use super::{Archetype, PlanetKind};

/// Every draftable planet, in draft-board order.
pub static ARCHETYPES: &[Archetype] = &[
    SUN, MERCURY, VENUS, EARTH, MARS, JUPITER, SATURN, URANUS, NEPTUNE,
];

pub const SUN: Archetype = Archetype {
    kind: PlanetKind::Sun,
    name: "Sun",
    radius: 25.0,
    mass: 100.0,
    rgb: [0xFF, 0xD7, 0x00],
};

pub const MERCURY: Archetype = Archetype {
    kind: PlanetKind::Mercury,
    name: "Mercury",
    radius: 8.0,
    mass: 15.0,
    rgb: [0x8C, 0x78, 0x53],
};

pub const VENUS: Archetype = Archetype {
    kind: PlanetKind::Venus,
    name: "Venus",
    radius: 12.0,
    mass: 25.0,
    rgb: [0xFF, 0xC6, 0x49],
};

pub const EARTH: Archetype = Archetype {
    kind: PlanetKind::Earth,
    name: "Earth",
    radius: 14.0,
    mass: 30.0,
    rgb: [0x6B, 0x93, 0xD6],
};

pub const MARS: Archetype = Archetype {
    kind: PlanetKind::Mars,
    name: "Mars",
    radius: 11.0,
    mass: 20.0,
    rgb: [0xCD, 0x5C, 0x5C],
};

pub const JUPITER: Archetype = Archetype {
    kind: PlanetKind::Jupiter,
    name: "Jupiter",
    radius: 35.0,
    mass: 80.0,
    rgb: [0xD2, 0x69, 0x1E],
};

/// Saturn's rings are drawn by the renderer only; they do not collide.
pub const SATURN: Archetype = Archetype {
    kind: PlanetKind::Saturn,
    name: "Saturn",
    radius: 30.0,
    mass: 65.0,
    rgb: [0xFA, 0xD5, 0xA5],
};

pub const URANUS: Archetype = Archetype {
    kind: PlanetKind::Uranus,
    name: "Uranus",
    radius: 20.0,
    mass: 45.0,
    rgb: [0x4F, 0xD0, 0xE4],
};

pub const NEPTUNE: Archetype = Archetype {
    kind: PlanetKind::Neptune,
    name: "Neptune",
    radius: 18.0,
    mass: 40.0,
    rgb: [0x41, 0x69, 0xE1],
};
