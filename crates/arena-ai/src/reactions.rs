//! Fixed responses to hits and collisions.
//!
//! Each reaction only overrides the body slots it sets, for the current tick.

use rand::Rng;

use arena_core::commands::Orders;
use arena_core::events::SensorEvent;
use arena_core::geometry::normalize_bearing;

/// How to turn after hitting a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallTurn {
    /// Turn right by a fixed angle.
    Fixed(f64),
    /// Turn to face away from the wall, give or take `spread` degrees.
    Reflect { spread: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionProfile {
    /// Distance backed off after being hit.
    pub hit_retreat: f64,
    /// Added to the attacker's bearing to get the body turn.
    pub hit_turn_offset: f64,
    /// Distance moved after a collision with another agent.
    pub ram_distance: f64,
    pub wall_retreat: f64,
    pub wall_turn: WallTurn,
}

/// Body commands produced by a reaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reaction {
    pub body_turn: Option<f64>,
    pub movement: f64,
}

impl Reaction {
    /// Overwrite the matching slots of `orders`.
    pub fn apply(&self, orders: &mut Orders) {
        if let Some(turn) = self.body_turn {
            orders.body_turn = Some(turn);
        }
        orders.movement = Some(self.movement);
    }
}

pub fn on_hit_by_projectile(bearing: f64, profile: &ReactionProfile) -> Reaction {
    Reaction {
        body_turn: Some(normalize_bearing(bearing + profile.hit_turn_offset)),
        movement: -profile.hit_retreat,
    }
}

/// Push through when the other agent ran into us, back off when we did.
pub fn on_agent_collision(at_fault: bool, profile: &ReactionProfile) -> Reaction {
    let movement = if at_fault {
        -profile.ram_distance
    } else {
        profile.ram_distance
    };
    Reaction {
        body_turn: None,
        movement,
    }
}

pub fn on_wall_collision<R: Rng>(bearing: f64, profile: &ReactionProfile, rng: &mut R) -> Reaction {
    let turn = match profile.wall_turn {
        WallTurn::Fixed(degrees) => degrees,
        WallTurn::Reflect { spread } => {
            let jitter = (rng.gen::<f64>() - 0.5) * 2.0 * spread;
            normalize_bearing(bearing + 180.0 + jitter)
        }
    };
    Reaction {
        body_turn: Some(turn),
        movement: -profile.wall_retreat,
    }
}

/// Reaction for `event`, or `None` for events that do not trigger one.
pub fn react<R: Rng>(event: &SensorEvent, profile: &ReactionProfile, rng: &mut R) -> Option<Reaction> {
    match event {
        SensorEvent::HitByProjectile { bearing } => Some(on_hit_by_projectile(*bearing, profile)),
        SensorEvent::CollidedWithAgent { at_fault, .. } => Some(on_agent_collision(*at_fault, profile)),
        SensorEvent::CollidedWithWall { bearing } => Some(on_wall_collision(*bearing, profile, rng)),
        SensorEvent::Scanned(_) | SensorEvent::OpponentDestroyed { .. } => None,
    }
}
