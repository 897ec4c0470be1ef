//! Archetype-specific tuning profiles.
//!
//! Consolidates the per-archetype parameters for fire control, movement,
//! reactions and radar.

use arena_core::enums::{AgentArchetype, RadarMode};

use crate::fire_control::{FirePowerRule, PowerFormula, RangeCondition};
use crate::movement::{Advance, JitterTurn, MovementProfile, Oscillation};
use crate::reactions::{ReactionProfile, WallTurn};

/// Tuning for one archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentProfile {
    /// Priority-ordered fire power rules; first match wins.
    pub fire_rules: &'static [FirePowerRule],
    /// Default alignment threshold (degrees) for this archetype.
    pub alignment_threshold_deg: f64,
    /// Default boundary margin for this archetype.
    pub boundary_margin: f64,
    pub movement: MovementProfile,
    pub reactions: ReactionProfile,
    pub radar: RadarMode,
}

const ASSASSIN_FIRE_RULES: &[FirePowerRule] = &[
    FirePowerRule {
        when: RangeCondition::FinishingBlow {
            max_energy: 25.0,
            max_distance: 250.0,
        },
        power: PowerFormula::FinishTarget {
            divisor: 4.0,
            bonus: 0.5,
            cap: 3.0,
        },
    },
    FirePowerRule {
        when: RangeCondition::Within(150.0),
        power: PowerFormula::Fixed(2.5),
    },
    FirePowerRule {
        when: RangeCondition::Within(400.0),
        power: PowerFormula::EnergyScaled {
            cap: 2.2,
            divisor: 6.0,
        },
    },
    FirePowerRule {
        when: RangeCondition::Always,
        power: PowerFormula::EnergyScaled {
            cap: 1.5,
            divisor: 8.0,
        },
    },
];

const DOMINATOR_FIRE_RULES: &[FirePowerRule] = &[
    FirePowerRule {
        when: RangeCondition::FinishingBlow {
            max_energy: 20.0,
            max_distance: 200.0,
        },
        power: PowerFormula::FinishTarget {
            divisor: 4.0,
            bonus: 0.1,
            cap: 3.0,
        },
    },
    FirePowerRule {
        when: RangeCondition::Beyond(400.0),
        power: PowerFormula::EnergyScaled {
            cap: 1.5,
            divisor: 4.0,
        },
    },
    FirePowerRule {
        when: RangeCondition::Always,
        power: PowerFormula::EnergyScaled {
            cap: 2.5,
            divisor: 5.0,
        },
    },
];

/// Get the tuning profile for a given archetype.
pub fn get_profile(archetype: AgentArchetype) -> AgentProfile {
    match archetype {
        AgentArchetype::Assassin => AgentProfile {
            fire_rules: ASSASSIN_FIRE_RULES,
            alignment_threshold_deg: 15.0,
            boundary_margin: 80.0,
            movement: MovementProfile {
                close_range: 100.0,
                medium_range: 300.0,
                close_oscillation: Oscillation {
                    period: 60,
                    distance: 200.0,
                },
                close_turn: JitterTurn::Centered {
                    base: 90.0,
                    spread: 30.0,
                },
                orbit_distance: 400.0,
                far_advance: Advance {
                    period: 80,
                    first_leg: 600.0,
                    second_leg: 300.0,
                },
            },
            reactions: ReactionProfile {
                hit_retreat: 150.0,
                hit_turn_offset: 90.0,
                ram_distance: 100.0,
                wall_retreat: 200.0,
                wall_turn: WallTurn::Reflect { spread: 30.0 },
            },
            radar: RadarMode::Lock,
        },
        AgentArchetype::Dominator => AgentProfile {
            fire_rules: DOMINATOR_FIRE_RULES,
            alignment_threshold_deg: 12.0,
            boundary_margin: 50.0,
            movement: MovementProfile {
                close_range: 100.0,
                medium_range: 300.0,
                close_oscillation: Oscillation {
                    period: 40,
                    distance: 500.0,
                },
                close_turn: JitterTurn::EitherSide {
                    base: 90.0,
                    spread: 30.0,
                },
                orbit_distance: 500.0,
                far_advance: Advance {
                    period: 40,
                    first_leg: 500.0,
                    second_leg: 250.0,
                },
            },
            reactions: ReactionProfile {
                hit_retreat: 100.0,
                hit_turn_offset: 180.0,
                ram_distance: 50.0,
                wall_retreat: 100.0,
                wall_turn: WallTurn::Fixed(90.0),
            },
            radar: RadarMode::Spin,
        },
    }
}
