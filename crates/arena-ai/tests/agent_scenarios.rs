use approx::assert_abs_diff_eq;
use test_log::test;

use arena_ai::{Agent, AgentConfig};
use arena_core::config::CoreConfig;
use arena_core::enums::{AgentArchetype, DistanceBand};
use arena_core::error::ConfigError;
use arena_core::events::{ScanObservation, SensorEvent};
use arena_core::geometry::{angle_to, normalize_bearing, normalize_heading, project};
use arena_core::types::{ArenaBounds, SelfState};
use arena_core::DVec2;

fn arena() -> ArenaBounds {
    ArenaBounds::new(800.0, 800.0)
}

fn self_state(tick: u64, opponents_alive: u32) -> SelfState {
    SelfState {
        tick,
        opponents_alive,
        ..SelfState::at(DVec2::new(400.0, 400.0), arena())
    }
}

fn scanned(name: &str, distance: f64, bearing: f64, energy: f64) -> SensorEvent {
    SensorEvent::Scanned(ScanObservation {
        name: name.to_string(),
        distance,
        bearing,
        heading: 0.0,
        velocity: 0.0,
        energy,
    })
}

/// Scan of an opponent at absolute `position`, as seen from `state`.
fn scan_of(name: &str, state: &SelfState, position: DVec2, heading: f64, velocity: f64) -> SensorEvent {
    SensorEvent::Scanned(ScanObservation {
        name: name.to_string(),
        distance: state.position.distance(position),
        bearing: normalize_bearing(angle_to(state.position, position) - state.heading),
        heading,
        velocity,
        energy: 70.0,
    })
}

fn assassin() -> Agent {
    Agent::new(AgentConfig::default()).unwrap()
}

#[test]
fn mid_range_opponent_is_engaged_without_firing_off_target() {
    let mut agent = assassin();
    let state = self_state(1, 3);

    let orders = agent.tick(&state, &[scanned("target", 250.0, 30.0, 80.0)]);

    assert_eq!(agent.primary_target(), Some("target"));
    let decision = *agent.last_fire_decision().unwrap();
    assert_abs_diff_eq!(decision.fire_power, 2.2);
    assert_abs_diff_eq!(decision.aim_turn, 30.0, epsilon = 1e-9);
    assert!(!decision.should_fire);

    assert_abs_diff_eq!(orders.gun_turn.unwrap(), 30.0, epsilon = 1e-9);
    assert_eq!(orders.fire_power, None);
    // Radar locks onto the target's bearing.
    assert_abs_diff_eq!(orders.radar_turn.unwrap(), 30.0, epsilon = 1e-9);
    // Medium band: orbit away from the target side.
    assert_eq!(agent.last_movement().unwrap().band, DistanceBand::Medium);
    assert_eq!(orders.body_turn, Some(-90.0));
    assert_eq!(orders.movement, Some(400.0));
}

#[test]
fn fires_once_the_gun_comes_around() {
    let mut agent = assassin();
    let mut state = self_state(1, 3);
    let orders = agent.tick(&state, &[scanned("target", 250.0, 30.0, 80.0)]);

    state.tick = 2;
    state.gun_heading = normalize_heading(state.gun_heading + orders.gun_turn.unwrap());
    let orders = agent.tick(&state, &[scanned("target", 250.0, 30.0, 80.0)]);

    assert_abs_diff_eq!(orders.gun_turn.unwrap(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(orders.fire_power.unwrap(), 2.2);
}

#[test]
fn destroyed_primary_is_dropped_next_tick() {
    let mut agent = assassin();
    let state = self_state(1, 2);
    agent.tick(
        &state,
        &[
            scanned("weak", 150.0, 0.0, 10.0),
            scanned("strong", 500.0, 180.0, 100.0),
        ],
    );
    assert_eq!(agent.primary_target(), Some("weak"));

    let state = self_state(2, 1);
    agent.tick(
        &state,
        &[SensorEvent::OpponentDestroyed {
            name: "weak".to_string(),
        }],
    );
    assert_ne!(agent.primary_target(), Some("weak"));
    assert_eq!(agent.primary_target(), Some("strong"));
    assert!(agent.tracks().get("weak").is_none());
}

#[test]
fn target_removed_in_same_tick_holds_fire() {
    let mut agent = assassin();
    let state = self_state(1, 1);
    let orders = agent.tick(
        &state,
        &[
            scanned("ghost", 120.0, 0.0, 50.0),
            SensorEvent::OpponentDestroyed {
                name: "ghost".to_string(),
            },
        ],
    );
    assert_eq!(agent.primary_target(), None);
    assert!(agent.last_fire_decision().is_none());
    assert_eq!(orders.gun_turn, None);
    assert_eq!(orders.fire_power, None);
    assert_eq!(agent.last_movement().unwrap().band, DistanceBand::Far);
}

#[test]
fn empty_arena_patrols_and_spins_radar() {
    let mut agent = assassin();
    let orders = agent.tick(&self_state(0, 4), &[]);
    assert_eq!(orders.radar_turn, Some(360.0));
    assert_eq!(orders.gun_turn, None);
    assert_eq!(orders.fire_power, None);
    assert!(orders.movement.unwrap() > 0.0);
    assert!(!orders.is_idle());
}

#[test]
fn stale_primary_is_released_and_radar_sweeps() {
    let mut agent = assassin();
    agent.tick(&self_state(0, 1), &[scanned("target", 250.0, 30.0, 80.0)]);

    // Still the primary, but the radar lock has lapsed.
    let orders = agent.tick(&self_state(20, 1), &[]);
    assert_eq!(agent.primary_target(), Some("target"));
    assert_eq!(orders.radar_turn, Some(45.0));

    let orders = agent.tick(&self_state(51, 1), &[]);
    assert_eq!(agent.primary_target(), None);
    assert_eq!(orders.fire_power, None);
    // Unreliable, not deleted.
    assert!(agent.tracks().get("target").is_some());
}

#[test]
fn hit_reaction_overrides_planned_movement() {
    let mut agent = assassin();
    let orders = agent.tick(
        &self_state(1, 3),
        &[
            scanned("target", 250.0, 30.0, 80.0),
            SensorEvent::HitByProjectile { bearing: 30.0 },
        ],
    );
    assert_eq!(orders.movement, Some(-150.0));
    assert_eq!(orders.body_turn, Some(120.0));
    // Fire control is untouched by reactions.
    assert!(orders.gun_turn.is_some());
}

#[test]
fn later_reaction_wins() {
    let mut agent = assassin();
    let orders = agent.tick(
        &self_state(1, 3),
        &[
            SensorEvent::HitByProjectile { bearing: 30.0 },
            SensorEvent::CollidedWithAgent {
                bearing: 0.0,
                at_fault: false,
            },
        ],
    );
    assert_eq!(orders.movement, Some(100.0));
    assert_eq!(orders.body_turn, Some(120.0));
}

#[test]
fn boundary_override_beats_band_movement() {
    let mut agent = assassin();
    let state = SelfState {
        tick: 10,
        opponents_alive: 1,
        heading: 0.0,
        ..SelfState::at(DVec2::new(760.0, 400.0), arena())
    };
    // Target at close range would normally trigger jitter.
    let orders = agent.tick(&state, &[scanned("target", 60.0, -90.0, 80.0)]);
    let plan = agent.last_movement().unwrap();
    assert_eq!(plan.band, DistanceBand::Close);
    assert!(plan.boundary_override);
    assert_abs_diff_eq!(orders.body_turn.unwrap(), -90.0, epsilon = 1e-9);
    assert_eq!(orders.movement, Some(300.0));
}

#[test]
fn dominator_spins_and_uses_tighter_threshold() {
    let mut agent = Agent::new(AgentConfig::for_archetype(AgentArchetype::Dominator, 9)).unwrap();
    assert_eq!(agent.config().alignment_threshold_deg, 12.0);
    assert_eq!(agent.config().boundary_margin_units, 50.0);

    let mut state = self_state(1, 1);
    state.gun_heading = 17.0;
    let orders = agent.tick(&state, &[scanned("target", 250.0, 30.0, 80.0)]);
    assert_eq!(orders.radar_turn, Some(360.0));
    assert_eq!(orders.fire_power, None, "13° off must hold with a 12° threshold");

    state.tick = 2;
    state.gun_heading = 20.0;
    let orders = agent.tick(&state, &[scanned("target", 250.0, 30.0, 80.0)]);
    assert_abs_diff_eq!(orders.fire_power.unwrap(), 2.5);
}

#[test]
fn same_seed_same_orders() {
    let config = AgentConfig::for_archetype(AgentArchetype::Dominator, 77);
    let mut a = Agent::new(config).unwrap();
    let mut b = Agent::new(config).unwrap();
    let mut c = Agent::new(AgentConfig { seed: 78, ..config }).unwrap();

    let mut diverged = false;
    for tick in 0..300 {
        let state = self_state(tick, 1);
        let angle = tick as f64 * 3.0;
        let opponent = project(state.position, angle, 80.0);
        let events = [scan_of("circler", &state, opponent, angle + 90.0, 8.0)];

        let orders_a = a.tick(&state, &events);
        let orders_b = b.tick(&state, &events);
        let orders_c = c.tick(&state, &events);
        assert_eq!(orders_a, orders_b, "diverged at tick {tick}");
        if orders_a != orders_c {
            diverged = true;
        }
    }
    assert!(diverged, "different seeds should jitter differently");
}

#[test]
fn start_match_resets_state() {
    let mut agent = assassin();
    let first = agent.tick(&self_state(1, 1), &[scanned("target", 60.0, 0.0, 80.0)]);
    assert_eq!(agent.tracks().len(), 1);

    agent.start_match();
    assert!(agent.tracks().is_empty());
    assert_eq!(agent.primary_target(), None);
    assert!(agent.last_fire_decision().is_none());

    let replay = agent.tick(&self_state(1, 1), &[scanned("target", 60.0, 0.0, 80.0)]);
    assert_eq!(first, replay);
}

#[test]
fn invalid_config_is_rejected() {
    let config = AgentConfig {
        core: CoreConfig {
            min_power: 3.0,
            max_power: 0.5,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        Agent::new(config),
        Err(ConfigError::InvalidPowerRange { .. })
    ));
}

#[test]
fn commands_serialize_for_the_host() {
    let mut agent = assassin();
    let orders = agent.tick(&self_state(1, 3), &[scanned("target", 250.0, 30.0, 80.0)]);
    let commands = orders.commands();
    assert_eq!(commands.len(), 4);
    let json = serde_json::to_string(&commands).unwrap();
    assert!(json.contains(r#""type":"TurnRadar""#));
    assert!(json.contains(r#""type":"Move""#));
}
