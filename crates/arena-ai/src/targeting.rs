//! Threat assessment and primary target selection.
//!
//! Pure functions over the track registry. The scoring policy changes with
//! the number of opponents still alive.

use glam::DVec2;

use arena_core::constants::*;
use arena_core::enums::ScoringPhase;

use crate::tracks::{EnemyTrack, TrackRegistry};

/// Threat score of `track`; higher is a better target.
pub fn threat_score(track: &EnemyTrack, self_position: DVec2, phase: ScoringPhase) -> f64 {
    let proximity = SCORE_DISTANCE_BASE - self_position.distance(track.position);
    let weakness = SCORE_ENERGY_BASE - track.energy;

    match phase {
        ScoringPhase::Crowded => proximity,
        ScoringPhase::Contested => {
            let bonus = if track.energy < WEAK_TARGET_ENERGY {
                WEAK_TARGET_BONUS
            } else {
                0.0
            };
            bonus + 0.5 * proximity + 2.0 * weakness
        }
        ScoringPhase::Endgame => 5.0 * weakness + proximity,
    }
}

/// Pick the highest-scoring non-stale track.
///
/// Tracks older than `staleness_limit` ticks are skipped. Ties go to
/// whichever track the registry yields first; that order is arbitrary but
/// stable while the registry is not modified.
pub fn select_primary<'a>(
    tracks: &'a TrackRegistry,
    current_tick: u64,
    self_position: DVec2,
    alive_count: u32,
    staleness_limit: u64,
) -> Option<&'a str> {
    let phase = ScoringPhase::from_alive_count(alive_count);

    let mut best: Option<(&EnemyTrack, f64)> = None;
    for track in tracks.iter() {
        if track.is_stale(current_tick, staleness_limit) {
            continue;
        }
        let score = threat_score(track, self_position, phase);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((track, score)),
        }
    }

    best.map(|(track, _)| track.name.as_str())
}
