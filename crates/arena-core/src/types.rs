//! Fundamental geometric and per-tick state types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, STARTING_ENERGY};

/// Rectangular arena, origin at the bottom-left corner.
/// x grows to the right, y grows "up" (0° heading).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub width: f64,
    pub height: f64,
}

impl ArenaBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Distance from `point` to the nearest arena edge.
    /// Negative when the point lies outside the arena.
    pub fn distance_to_edge(&self, point: DVec2) -> f64 {
        point
            .x
            .min(self.width - point.x)
            .min(point.y)
            .min(self.height - point.y)
    }

    /// Whether `point` lies within `margin` units of any edge.
    pub fn is_near_edge(&self, point: DVec2, margin: f64) -> bool {
        self.distance_to_edge(point) < margin
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT)
    }
}

/// The agent's own state as reported by the host at the start of a tick.
///
/// Headings are in degrees, 0 = arena "up", clockwise positive.
/// The core never writes to this; it only issues commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelfState {
    pub position: DVec2,
    /// Body heading.
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    /// Signed speed along the body heading.
    pub velocity: f64,
    pub energy: f64,
    /// Current tick counter.
    pub tick: u64,
    pub arena: ArenaBounds,
    /// Opponents still alive, not counting self.
    pub opponents_alive: u32,
}

impl Default for SelfState {
    fn default() -> Self {
        let arena = ArenaBounds::default();
        Self {
            position: arena.center(),
            heading: 0.0,
            gun_heading: 0.0,
            radar_heading: 0.0,
            velocity: 0.0,
            energy: STARTING_ENERGY,
            tick: 0,
            arena,
            opponents_alive: 0,
        }
    }
}

impl SelfState {
    /// State at `position` in `arena`, all other fields at their defaults.
    pub fn at(position: DVec2, arena: ArenaBounds) -> Self {
        Self {
            position,
            arena,
            ..Default::default()
        }
    }
}
