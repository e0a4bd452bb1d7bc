//! Alkkagi - Planet Flicking Board Physics
//!
//! A library crate providing the physics core of a two-player flicking
//! game: bodies on a bounded field attract each other, bounce off each
//! other with damped collisions, lose speed every frame and fall out of
//! play past the field edge. Around that sit the aiming helpers (shot
//! force and trajectory forecast) and the house scoring used to decide a
//! round.

pub mod body;
pub mod launch;
pub mod physics;
pub mod prediction;
pub mod scenarios;
pub mod scoring;
pub mod types;
