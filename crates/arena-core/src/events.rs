//! Sensor events delivered by the host engine each tick.

use serde::{Deserialize, Serialize};

/// One radar contact. Bearing is relative to our body heading,
/// heading and velocity are the opponent's own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanObservation {
    pub name: String,
    pub distance: f64,
    pub bearing: f64,
    pub heading: f64,
    pub velocity: f64,
    pub energy: f64,
}

/// Everything the host can report during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SensorEvent {
    /// Radar swept over an opponent.
    Scanned(ScanObservation),
    /// We were hit; `bearing` points at where the projectile came from.
    HitByProjectile { bearing: f64 },
    /// We ran into (or were run into by) another agent.
    CollidedWithAgent { bearing: f64, at_fault: bool },
    /// We drove into an arena wall.
    CollidedWithWall { bearing: f64 },
    /// An opponent was destroyed.
    OpponentDestroyed { name: String },
}

impl SensorEvent {
    /// Collision and hit events, which trigger an immediate reaction.
    pub fn is_reaction_trigger(&self) -> bool {
        matches!(
            self,
            SensorEvent::HitByProjectile { .. }
                | SensorEvent::CollidedWithAgent { .. }
                | SensorEvent::CollidedWithWall { .. }
        )
    }
}
