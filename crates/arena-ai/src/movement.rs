//! Movement controller.
//!
//! Picks a motion pattern from the distance band to the primary target,
//! then lets boundary avoidance override it when we are close to an edge.
//! Randomized turns draw from the caller's RNG so a seeded agent is
//! reproducible.

use log::trace;
use rand::Rng;
use serde::Serialize;

use arena_core::constants::BOUNDARY_ESCAPE_DISTANCE;
use arena_core::enums::DistanceBand;
use arena_core::geometry::{angle_to, normalize_bearing};
use arena_core::types::SelfState;

/// Range and relative bearing to the primary target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFix {
    pub distance: f64,
    /// Relative to our body heading, in `(-180, 180]`.
    pub bearing: f64,
}

/// Forward/backward oscillation: forward for the first half of each period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub period: u64,
    pub distance: f64,
}

impl Oscillation {
    pub fn movement(&self, tick: u64) -> f64 {
        if forward_half(tick, self.period) {
            self.distance
        } else {
            -self.distance
        }
    }
}

/// Randomized turn roughly perpendicular to the current heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JitterTurn {
    /// Always turn right by `base ± spread`.
    Centered { base: f64, spread: f64 },
    /// Turn `base + [0, spread)` to a random side.
    EitherSide { base: f64, spread: f64 },
}

impl JitterTurn {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            JitterTurn::Centered { base, spread } => base + (rng.gen::<f64>() - 0.5) * 2.0 * spread,
            JitterTurn::EitherSide { base, spread } => {
                let magnitude = base + rng.gen::<f64>() * spread;
                if rng.gen_bool(0.5) {
                    magnitude
                } else {
                    -magnitude
                }
            }
        }
    }
}

/// Long-range advance: both halves of the period move forward, the first
/// half farther than the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub period: u64,
    pub first_leg: f64,
    pub second_leg: f64,
}

/// Per-archetype movement tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementProfile {
    /// Targets closer than this are in the close band.
    pub close_range: f64,
    /// Targets closer than this (and not close) are in the medium band.
    pub medium_range: f64,
    pub close_oscillation: Oscillation,
    pub close_turn: JitterTurn,
    /// Forward distance while orbiting.
    pub orbit_distance: f64,
    pub far_advance: Advance,
}

/// What the movement controller wants the body to do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovementPlan {
    pub band: DistanceBand,
    pub body_turn: Option<f64>,
    pub movement: f64,
    /// True when boundary avoidance replaced the band's pattern.
    pub boundary_override: bool,
}

fn forward_half(tick: u64, period: u64) -> bool {
    let period = period.max(1);
    tick % period < period / 2
}

pub fn classify_band(distance: f64, profile: &MovementProfile) -> DistanceBand {
    if distance < profile.close_range {
        DistanceBand::Close
    } else if distance < profile.medium_range {
        DistanceBand::Medium
    } else {
        DistanceBand::Far
    }
}

/// Plan this tick's movement. Without a target the agent patrols as if the
/// target were far away.
pub fn plan_movement<R: Rng>(
    state: &SelfState,
    target: Option<TargetFix>,
    profile: &MovementProfile,
    boundary_margin: f64,
    rng: &mut R,
) -> MovementPlan {
    let band = target
        .map(|fix| classify_band(fix.distance, profile))
        .unwrap_or(DistanceBand::Far);

    let plan = match band {
        DistanceBand::Close => MovementPlan {
            band,
            body_turn: Some(profile.close_turn.sample(rng)),
            movement: profile.close_oscillation.movement(state.tick),
            boundary_override: false,
        },
        DistanceBand::Medium => {
            let bearing = target.map(|fix| fix.bearing).unwrap_or(0.0);
            // Put the target on our beam: left when it is to our right.
            let turn = if bearing > 0.0 { -90.0 } else { 90.0 };
            MovementPlan {
                band,
                body_turn: Some(turn),
                movement: profile.orbit_distance,
                boundary_override: false,
            }
        }
        DistanceBand::Far => {
            let advance = &profile.far_advance;
            let movement = if forward_half(state.tick, advance.period) {
                advance.first_leg
            } else {
                advance.second_leg
            };
            MovementPlan {
                band,
                body_turn: None,
                movement,
                boundary_override: false,
            }
        }
    };

    let plan = boundary_override(state, boundary_margin, band).unwrap_or(plan);
    trace!(
        "movement: {:?} turn {:?} move {:.0} override {}",
        plan.band,
        plan.body_turn,
        plan.movement,
        plan.boundary_override
    );
    plan
}

/// Turn toward the arena center and advance when within `margin` of an edge.
pub fn boundary_override(
    state: &SelfState,
    margin: f64,
    band: DistanceBand,
) -> Option<MovementPlan> {
    if !state.arena.is_near_edge(state.position, margin) {
        return None;
    }

    let to_center = angle_to(state.position, state.arena.center());
    Some(MovementPlan {
        band,
        body_turn: Some(normalize_bearing(to_center - state.heading)),
        movement: BOUNDARY_ESCAPE_DISTANCE,
        boundary_override: true,
    })
}
