//! Fire control: power selection, linear lead, aim and fire gate.
//!
//! Fire power comes from a priority-ordered rule table (first match wins),
//! capped by a share of our own energy and clamped to the configured bounds.
//! The predicted impact point is pure linear extrapolation of the track's
//! velocity estimate over the bullet's travel time; acceleration and turn
//! rate are deliberately not modelled.

use glam::DVec2;
use log::trace;
use serde::Serialize;

use arena_core::config::CoreConfig;
use arena_core::constants::{BULLET_SPEED_BASE, BULLET_SPEED_PER_POWER};
use arena_core::geometry::{angle_to, extrapolate, normalize_bearing};
use arena_core::types::SelfState;

use crate::tracks::EnemyTrack;

/// When a fire power rule applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeCondition {
    /// Target weaker than `max_energy` and closer than `max_distance`.
    FinishingBlow { max_energy: f64, max_distance: f64 },
    /// Target closer than the given distance.
    Within(f64),
    /// Target farther than the given distance.
    Beyond(f64),
    Always,
}

impl RangeCondition {
    fn matches(&self, distance: f64, target_energy: f64) -> bool {
        match *self {
            RangeCondition::FinishingBlow {
                max_energy,
                max_distance,
            } => target_energy < max_energy && distance < max_distance,
            RangeCondition::Within(limit) => distance < limit,
            RangeCondition::Beyond(limit) => distance > limit,
            RangeCondition::Always => true,
        }
    }
}

/// How a rule computes its raw power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowerFormula {
    Fixed(f64),
    /// `min(cap, target_energy / divisor + bonus)`
    FinishTarget { divisor: f64, bonus: f64, cap: f64 },
    /// `min(cap, self_energy / divisor)`
    EnergyScaled { cap: f64, divisor: f64 },
}

impl PowerFormula {
    fn evaluate(&self, target_energy: f64, self_energy: f64) -> f64 {
        match *self {
            PowerFormula::Fixed(power) => power,
            PowerFormula::FinishTarget {
                divisor,
                bonus,
                cap,
            } => cap.min(target_energy / divisor + bonus),
            PowerFormula::EnergyScaled { cap, divisor } => cap.min(self_energy / divisor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirePowerRule {
    pub when: RangeCondition,
    pub power: PowerFormula,
}

/// Outcome of one fire control pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FireDecision {
    pub fire_power: f64,
    pub time_to_impact: f64,
    pub predicted_position: DVec2,
    /// Gun turn needed to face the predicted position, in `(-180, 180]`.
    pub aim_turn: f64,
    pub should_fire: bool,
}

/// Bullet speed for `power` (units per tick). Engine-defined; decreases with power.
pub fn bullet_speed(power: f64) -> f64 {
    BULLET_SPEED_BASE - BULLET_SPEED_PER_POWER * power
}

/// Run the rule table and apply the energy cap and bounds.
///
/// Falls back to `config.min_power` when no rule matches.
pub fn select_fire_power(
    rules: &[FirePowerRule],
    distance: f64,
    target_energy: f64,
    self_energy: f64,
    config: &CoreConfig,
) -> f64 {
    let raw = rules
        .iter()
        .find(|rule| rule.when.matches(distance, target_energy))
        .map(|rule| rule.power.evaluate(target_energy, self_energy))
        .unwrap_or(config.min_power);

    let raw = if raw.is_finite() { raw } else { config.min_power };
    let affordable = raw.min(self_energy.max(0.0) * config.max_energy_fraction_per_shot);

    affordable.max(config.min_power).min(config.max_power)
}

/// Where the target will be after `time_to_impact` ticks, assuming it keeps
/// its estimated velocity.
pub fn predict_position(track: &EnemyTrack, time_to_impact: f64) -> DVec2 {
    extrapolate(track.position, track.velocity, time_to_impact)
}

/// Compute power, lead and aim for `track` and decide whether to fire.
///
/// Holds fire when the gun is not within the alignment threshold, when the
/// track is older than `fire_staleness_limit_ticks`, or if the power somehow
/// produced a non-positive bullet speed.
pub fn compute_fire_decision(
    track: &EnemyTrack,
    state: &SelfState,
    rules: &[FirePowerRule],
    config: &CoreConfig,
) -> FireDecision {
    let distance = state.position.distance(track.position);
    let fire_power = select_fire_power(rules, distance, track.energy, state.energy, config);

    let speed = bullet_speed(fire_power);
    if speed <= 0.0 {
        return FireDecision {
            fire_power,
            time_to_impact: f64::INFINITY,
            predicted_position: track.position,
            aim_turn: 0.0,
            should_fire: false,
        };
    }

    let time_to_impact = distance / speed;
    let predicted_position = predict_position(track, time_to_impact);
    let aim_turn = normalize_bearing(angle_to(state.position, predicted_position) - state.gun_heading);

    let aligned = aim_turn.abs() < config.alignment_threshold_deg;
    let fresh = !track.is_stale(state.tick, config.fire_staleness_limit_ticks);
    let should_fire = aligned && fresh;

    trace!(
        "fire control on {}: power {:.2}, tti {:.1}, aim {:.1}, fire {}",
        track.name,
        fire_power,
        time_to_impact,
        aim_turn,
        should_fire
    );

    FireDecision {
        fire_power,
        time_to_impact,
        predicted_position,
        aim_turn,
        should_fire,
    }
}
