//! Radar control: lock onto a fresh primary, otherwise sweep.

use arena_core::config::CoreConfig;
use arena_core::constants::{RADAR_FULL_TURN_DEG, RADAR_SWEEP_DEG};
use arena_core::enums::RadarMode;
use arena_core::geometry::normalize_bearing;
use arena_core::types::SelfState;

use crate::tracks::TrackRegistry;

/// Radar turn for this tick.
///
/// In lock mode: spin fully while nothing is tracked, hold on the primary
/// while it was seen within `radar_lock_ticks`, otherwise sweep to reacquire.
pub fn radar_turn(
    mode: RadarMode,
    state: &SelfState,
    tracks: &TrackRegistry,
    primary: Option<&str>,
    config: &CoreConfig,
) -> f64 {
    if mode == RadarMode::Spin || tracks.is_empty() {
        return RADAR_FULL_TURN_DEG;
    }

    match primary.and_then(|name| tracks.get(name)) {
        Some(track) if track.staleness(state.tick) < config.radar_lock_ticks => {
            normalize_bearing(state.heading + track.bearing_offset - state.radar_heading)
        }
        _ => RADAR_SWEEP_DEG,
    }
}
