//! The agent: per-tick entry point of the decision core.
//!
//! `Agent` owns the track registry, the primary target selection and the
//! seeded RNG for one match. The host calls `tick` once per simulation step
//! with its self-state and that tick's sensor events and executes the
//! returned orders. There is no internal loop.

use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::commands::Orders;
use arena_core::config::CoreConfig;
use arena_core::enums::AgentArchetype;
use arena_core::error::ConfigError;
use arena_core::events::SensorEvent;
use arena_core::geometry::{angle_to, normalize_bearing};
use arena_core::types::SelfState;

use crate::fire_control::{compute_fire_decision, FireDecision};
use crate::movement::{plan_movement, MovementPlan, TargetFix};
use crate::profiles::{get_profile, AgentProfile};
use crate::radar::radar_turn;
use crate::reactions::react;
use crate::targeting::select_primary;
use crate::tracks::TrackRegistry;

/// Configuration for building an agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    pub archetype: AgentArchetype,
    /// RNG seed for determinism. Same seed and inputs = same orders.
    pub seed: u64,
    pub core: CoreConfig,
}

impl AgentConfig {
    /// Config whose alignment threshold and boundary margin start from the
    /// archetype's profile. Callers may adjust `core` afterwards.
    pub fn for_archetype(archetype: AgentArchetype, seed: u64) -> Self {
        let profile = get_profile(archetype);
        Self {
            archetype,
            seed,
            core: CoreConfig {
                alignment_threshold_deg: profile.alignment_threshold_deg,
                boundary_margin_units: profile.boundary_margin,
                ..Default::default()
            },
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::for_archetype(AgentArchetype::default(), 42)
    }
}

/// One combat agent's decision core.
pub struct Agent {
    config: CoreConfig,
    profile: AgentProfile,
    seed: u64,
    rng: ChaCha8Rng,
    tracks: TrackRegistry,
    primary: Option<String>,
    last_fire: Option<FireDecision>,
    last_movement: Option<MovementPlan>,
}

impl Agent {
    /// Build an agent, rejecting an invalid configuration.
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.core.validate() {
            warn!("rejected agent config: {err}");
            return Err(err);
        }
        Ok(Self {
            config: config.core,
            profile: get_profile(config.archetype),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tracks: TrackRegistry::new(),
            primary: None,
            last_fire: None,
            last_movement: None,
        })
    }

    /// Reset all per-match state. The RNG is reseeded so every match with
    /// the same inputs plays out the same way.
    pub fn start_match(&mut self) {
        self.tracks.clear();
        self.primary = None;
        self.last_fire = None;
        self.last_movement = None;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// Run one tick and return the orders for the host to execute.
    ///
    /// All sensor updates are applied before any decision is made; hit and
    /// collision reactions override this tick's body orders last.
    pub fn tick(&mut self, state: &SelfState, events: &[SensorEvent]) -> Orders {
        self.ingest(state, events);
        self.update_primary(state);

        let mut orders = Orders {
            radar_turn: Some(radar_turn(
                self.profile.radar,
                state,
                &self.tracks,
                self.primary.as_deref(),
                &self.config,
            )),
            ..Default::default()
        };

        let target = self.primary.as_deref().and_then(|name| self.tracks.get(name));

        // Fire control. An absent track means hold fire and leave the gun alone.
        self.last_fire = target.map(|track| {
            compute_fire_decision(track, state, self.profile.fire_rules, &self.config)
        });
        if let Some(decision) = &self.last_fire {
            orders.gun_turn = Some(decision.aim_turn);
            if decision.should_fire {
                orders.fire_power = Some(decision.fire_power);
            }
        }

        // Movement.
        let fix = target.map(|track| TargetFix {
            distance: state.position.distance(track.position),
            bearing: normalize_bearing(angle_to(state.position, track.position) - state.heading),
        });
        let plan = plan_movement(
            state,
            fix,
            &self.profile.movement,
            self.config.boundary_margin_units,
            &mut self.rng,
        );
        orders.body_turn = plan.body_turn;
        orders.movement = Some(plan.movement);
        self.last_movement = Some(plan);

        // Reactions, in event order; a later one wins.
        for event in events.iter().filter(|e| e.is_reaction_trigger()) {
            if let Some(reaction) = react(event, &self.profile.reactions, &mut self.rng) {
                reaction.apply(&mut orders);
            }
        }

        orders
    }

    fn ingest(&mut self, state: &SelfState, events: &[SensorEvent]) {
        for event in events {
            match event {
                SensorEvent::Scanned(obs) => {
                    self.tracks
                        .observe(obs, state.tick, state.position, state.heading);
                }
                SensorEvent::OpponentDestroyed { name } => {
                    self.tracks.remove(name);
                }
                _ => {}
            }
        }
    }

    fn update_primary(&mut self, state: &SelfState) {
        let selected = select_primary(
            &self.tracks,
            state.tick,
            state.position,
            state.opponents_alive,
            self.config.staleness_limit_ticks,
        );
        if selected != self.primary.as_deref() {
            debug!(
                "tick {}: primary target {:?} -> {:?}",
                state.tick, self.primary, selected
            );
            self.primary = selected.map(str::to_owned);
        }
    }

    /// Current primary target, if any.
    pub fn primary_target(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn tracks(&self) -> &TrackRegistry {
        &self.tracks
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Fire decision from the most recent tick, `None` if there was no target.
    pub fn last_fire_decision(&self) -> Option<&FireDecision> {
        self.last_fire.as_ref()
    }

    pub fn last_movement(&self) -> Option<&MovementPlan> {
        self.last_movement.as_ref()
    }
}
