//! Commands the core requests from the host engine.
//!
//! Commands are requests: the host queues them and executes them after the
//! tick's callback returns. Within one tick, a later request of the same kind
//! replaces an earlier one.

use serde::{Deserialize, Serialize};

/// A single actuator request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Turn the radar clockwise by `degrees` (negative = counter-clockwise).
    TurnRadar { degrees: f64 },
    /// Turn the gun clockwise by `degrees`.
    TurnGun { degrees: f64 },
    /// Turn the body clockwise by `degrees`.
    TurnBody { degrees: f64 },
    /// Move along the body heading; negative distance moves backward.
    Move { distance: f64 },
    /// Fire a projectile at `power`.
    Fire { power: f64 },
}

/// Everything the core wants done this tick, one slot per actuator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orders {
    pub radar_turn: Option<f64>,
    pub gun_turn: Option<f64>,
    pub body_turn: Option<f64>,
    pub movement: Option<f64>,
    pub fire_power: Option<f64>,
}

impl Orders {
    /// True when the tick produced no requests at all.
    pub fn is_idle(&self) -> bool {
        *self == Orders::default()
    }

    /// Flatten into commands in host execution order:
    /// radar, gun, body turn, movement, fire.
    pub fn commands(&self) -> Vec<Command> {
        let mut out = Vec::with_capacity(5);
        if let Some(degrees) = self.radar_turn {
            out.push(Command::TurnRadar { degrees });
        }
        if let Some(degrees) = self.gun_turn {
            out.push(Command::TurnGun { degrees });
        }
        if let Some(degrees) = self.body_turn {
            out.push(Command::TurnBody { degrees });
        }
        if let Some(distance) = self.movement {
            out.push(Command::Move { distance });
        }
        if let Some(power) = self.fire_power {
            out.push(Command::Fire { power });
        }
        out
    }
}
