//! House scoring for the curling-style variant.
//!
//! The house is a set of concentric rings around a target point. After a
//! round settles, only the player owning the body closest to the center
//! scores. That player earns `ring_count - ring_index` points for each of
//! their bodies that is strictly closer than the opponent's closest body,
//! so the innermost ring is worth the most.

use std::ops::{Add, AddAssign};

use bevy::log::info;
use bevy::math::DVec2;

use crate::body::Body;
use crate::types::{Owner, PlayField, Player};

/// Ring radii of the reference house, innermost first.
pub const DEFAULT_RING_RADII: [f64; 3] = [40.0, 80.0, 120.0];

/// Reasons a house cannot be constructed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HouseError {
    #[error("a house needs at least one ring")]
    NoRings,
    #[error("ring {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f64 },
    #[error("ring {index} (radius {radius}) is not larger than the ring inside it")]
    NotIncreasing { index: usize, radius: f64 },
    #[error("house center must be finite")]
    InvalidCenter,
}

/// Points earned by each player in one evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundScore {
    pub player_a: u32,
    pub player_b: u32,
}

impl RoundScore {
    /// Score credited to `player`.
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }

    fn credit(player: Player, points: u32) -> Self {
        match player {
            Player::A => Self {
                player_a: points,
                player_b: 0,
            },
            Player::B => Self {
                player_a: 0,
                player_b: points,
            },
        }
    }

    /// The player with the higher total, or `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.player_a.cmp(&self.player_b) {
            std::cmp::Ordering::Greater => Some(Player::A),
            std::cmp::Ordering::Less => Some(Player::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Add for RoundScore {
    type Output = RoundScore;

    fn add(self, rhs: RoundScore) -> RoundScore {
        RoundScore {
            player_a: self.player_a + rhs.player_a,
            player_b: self.player_b + rhs.player_b,
        }
    }
}

impl AddAssign for RoundScore {
    fn add_assign(&mut self, rhs: RoundScore) {
        *self = *self + rhs;
    }
}

/// A body that came to rest inside the house.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub player: Player,
    /// Distance from the house center.
    pub distance: f64,
    /// Index of the innermost ring containing the body.
    pub ring: usize,
}

/// Concentric scoring rings around a target point.
#[derive(Clone, Debug, PartialEq)]
pub struct House {
    center: DVec2,
    rings: Vec<f64>,
}

impl House {
    /// Create a house from ring radii listed innermost first.
    ///
    /// # Errors
    /// Rejects an empty ring list, non-positive or non-finite radii, and
    /// radii that are not strictly increasing.
    pub fn new(center: DVec2, rings: impl Into<Vec<f64>>) -> Result<Self, HouseError> {
        let rings = rings.into();

        if !center.is_finite() {
            return Err(HouseError::InvalidCenter);
        }
        if rings.is_empty() {
            return Err(HouseError::NoRings);
        }
        for (index, &radius) in rings.iter().enumerate() {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(HouseError::InvalidRadius { index, radius });
            }
            if index > 0 && radius <= rings[index - 1] {
                return Err(HouseError::NotIncreasing { index, radius });
            }
        }

        Ok(Self { center, rings })
    }

    /// The reference house centered on `field`.
    pub fn centered_on(field: &PlayField) -> Self {
        Self {
            center: field.center(),
            rings: DEFAULT_RING_RADII.to_vec(),
        }
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Ring radii, innermost first.
    pub fn rings(&self) -> &[f64] {
        &self.rings
    }

    /// Points a body in `ring` is worth.
    pub fn ring_value(&self, ring: usize) -> u32 {
        self.rings.len().saturating_sub(ring) as u32
    }

    /// Innermost ring containing `pos`; the ring edge counts as inside.
    pub fn ring_of(&self, pos: DVec2) -> Option<usize> {
        let distance = pos.distance(self.center);
        self.rings.iter().position(|&radius| distance <= radius)
    }

    fn place(&self, body: &Body, player: Player) -> Option<Placement> {
        if !body.active {
            return None;
        }
        let distance = body.position.distance(self.center);
        let ring = self.rings.iter().position(|&radius| distance <= radius)?;
        Some(Placement {
            player,
            distance,
            ring,
        })
    }

    /// Score a settled board, splitting bodies by their owner tag.
    ///
    /// Unassigned bodies never score. See [`House::score_players`].
    pub fn score(&self, bodies: &[Body]) -> RoundScore {
        let owned_by =
            |player: Player| bodies.iter().filter(move |b| b.owner == Owner::Player(player));
        self.score_players(owned_by(Player::A), owned_by(Player::B))
    }

    /// Score explicit per-player body lists.
    ///
    /// Inactive bodies and bodies outside every ring are ignored. The
    /// player owning the single closest placed body wins the round (ties go
    /// to player A, whose bodies are examined first); the other player scores
    /// zero. The winner earns [`House::ring_value`] for each placed body
    /// strictly closer than the loser's closest placed body, or for every
    /// placed body if the loser placed none.
    pub fn score_players<'a>(
        &self,
        player_a: impl IntoIterator<Item = &'a Body>,
        player_b: impl IntoIterator<Item = &'a Body>,
    ) -> RoundScore {
        let placements: Vec<Placement> = player_a
            .into_iter()
            .filter_map(|b| self.place(b, Player::A))
            .chain(player_b.into_iter().filter_map(|b| self.place(b, Player::B)))
            .collect();

        let mut closest: Option<&Placement> = None;
        for placement in &placements {
            if closest.is_none_or(|c| placement.distance < c.distance) {
                closest = Some(placement);
            }
        }
        let Some(winner) = closest.map(|c| c.player) else {
            return RoundScore::default();
        };

        let losing_closest = placements
            .iter()
            .filter(|p| p.player != winner)
            .map(|p| p.distance)
            .fold(f64::INFINITY, f64::min);

        let points = placements
            .iter()
            .filter(|p| p.player == winner && p.distance < losing_closest)
            .map(|p| self.ring_value(p.ring))
            .sum();

        info!("house scored {} point(s) for player {:?}", points, winner);
        RoundScore::credit(winner, points)
    }
}

impl Default for House {
    fn default() -> Self {
        Self::centered_on(&PlayField::default())
    }
}
