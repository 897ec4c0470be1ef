//! Enemy track store.
//!
//! One `EnemyTrack` per opponent identity, built from radar observations.
//! Tracks are only removed when the host reports the opponent destroyed;
//! staleness is left for downstream consumers to judge.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use glam::DVec2;
use log::debug;

use arena_core::constants::VELOCITY_SMOOTHING_RETAIN;
use arena_core::events::ScanObservation;
use arena_core::geometry::{absolute_bearing, project, velocity_vector};

/// Our belief about one opponent.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTrack {
    pub name: String,
    /// Last known absolute position.
    pub position: DVec2,
    /// Smoothed velocity estimate (units per tick).
    pub velocity: DVec2,
    /// Last reported heading (degrees).
    pub heading: f64,
    pub energy: f64,
    pub last_seen_tick: u64,
    /// Bearing relative to our body heading at the last observation.
    pub bearing_offset: f64,
}

impl EnemyTrack {
    fn from_observation(
        obs: &ScanObservation,
        tick: u64,
        self_position: DVec2,
        self_heading: f64,
    ) -> Self {
        Self {
            name: obs.name.clone(),
            position: observed_position(obs, self_position, self_heading),
            // First observation seeds the estimate directly.
            velocity: velocity_vector(obs.heading, obs.velocity),
            heading: obs.heading,
            energy: obs.energy,
            last_seen_tick: tick,
            bearing_offset: obs.bearing,
        }
    }

    fn update(&mut self, obs: &ScanObservation, tick: u64, self_position: DVec2, self_heading: f64) {
        let measured = velocity_vector(obs.heading, obs.velocity);
        // Same as 0.8 * old + 0.2 * new, but exact when new == old.
        self.velocity += (measured - self.velocity) * (1.0 - VELOCITY_SMOOTHING_RETAIN);
        self.position = observed_position(obs, self_position, self_heading);
        self.heading = obs.heading;
        self.energy = obs.energy;
        self.last_seen_tick = tick;
        self.bearing_offset = obs.bearing;
    }

    /// Ticks since the last observation.
    pub fn staleness(&self, current_tick: u64) -> u64 {
        current_tick.saturating_sub(self.last_seen_tick)
    }

    pub fn is_stale(&self, current_tick: u64, limit: u64) -> bool {
        self.staleness(current_tick) > limit
    }
}

/// Absolute position of an observed opponent.
fn observed_position(obs: &ScanObservation, self_position: DVec2, self_heading: f64) -> DVec2 {
    project(
        self_position,
        absolute_bearing(self_heading, obs.bearing),
        obs.distance,
    )
}

/// Identity-keyed table of enemy tracks, owned by one agent for one match.
#[derive(Debug, Clone, Default)]
pub struct TrackRegistry {
    tracks: HashMap<String, EnemyTrack>,
}

impl TrackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update the track for `obs.name`.
    ///
    /// An observation older than the track's last one is ignored so that
    /// `last_seen_tick` never moves backward.
    pub fn observe(
        &mut self,
        obs: &ScanObservation,
        current_tick: u64,
        self_position: DVec2,
        self_heading: f64,
    ) -> &EnemyTrack {
        match self.tracks.entry(obs.name.clone()) {
            Entry::Occupied(entry) => {
                let track = entry.into_mut();
                if current_tick >= track.last_seen_tick {
                    track.update(obs, current_tick, self_position, self_heading);
                }
                track
            }
            Entry::Vacant(entry) => {
                debug!("new track {} at tick {}", obs.name, current_tick);
                entry.insert(EnemyTrack::from_observation(
                    obs,
                    current_tick,
                    self_position,
                    self_heading,
                ))
            }
        }
    }

    /// Drop the track for a destroyed opponent.
    pub fn remove(&mut self, name: &str) -> Option<EnemyTrack> {
        let removed = self.tracks.remove(name);
        if removed.is_some() {
            debug!("dropped track {name}");
        }
        removed
    }

    /// Ticks since `name` was last observed, or `None` if it has no track.
    pub fn staleness(&self, name: &str, current_tick: u64) -> Option<u64> {
        self.tracks.get(name).map(|t| t.staleness(current_tick))
    }

    pub fn get(&self, name: &str) -> Option<&EnemyTrack> {
        self.tracks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tracks.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyTrack> {
        self.tracks.values()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Forget everything (match start).
    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
