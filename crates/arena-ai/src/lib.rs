//! Decision core for arena combat agents.
//!
//! Implements the enemy track store, threat-based target selection,
//! fire control, distance-band movement, reactions and radar control,
//! wired together by the per-tick `Agent`.

pub mod agent;
pub mod fire_control;
pub mod movement;
pub mod profiles;
pub mod radar;
pub mod reactions;
pub mod targeting;
pub mod tracks;

pub use agent::{Agent, AgentConfig};
pub use arena_core as core;
