//! Enumeration types used throughout the decision core.

use serde::{Deserialize, Serialize};

use crate::constants::{CROWDED_OPPONENT_COUNT, ENDGAME_OPPONENT_COUNT};

/// Tuning archetype selecting a bundled profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentArchetype {
    /// Radar-locking melee hunter: threat scoring, orbiting, reflective wall escape.
    #[default]
    Assassin,
    /// Spinning-radar brawler: fixed oscillation, randomized strafing.
    Dominator,
}

/// Range band to the primary target, selecting the movement pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceBand {
    Close,
    Medium,
    /// Also used when there is no target at all.
    Far,
}

/// Radar behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadarMode {
    /// Hold the radar on a fresh primary target, sweep otherwise.
    #[default]
    Lock,
    /// Spin continuously.
    Spin,
}

/// Target-scoring policy, chosen by how many opponents remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPhase {
    /// Many opponents: prefer the nearest.
    Crowded,
    /// A handful left: blend proximity and weakness.
    Contested,
    /// One or two left: finish the weakest or closest.
    Endgame,
}

impl ScoringPhase {
    pub fn from_alive_count(alive: u32) -> Self {
        if alive > CROWDED_OPPONENT_COUNT {
            ScoringPhase::Crowded
        } else if alive > ENDGAME_OPPONENT_COUNT {
            ScoringPhase::Contested
        } else {
            ScoringPhase::Endgame
        }
    }
}
