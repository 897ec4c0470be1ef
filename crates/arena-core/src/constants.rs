//! Engine constants and default tuning parameters.

// --- Engine ---

/// Default arena width (units).
pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;

/// Default arena height (units).
pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;

/// Energy every agent starts a match with.
pub const STARTING_ENERGY: f64 = 100.0;

/// Largest fire power the engine accepts.
pub const ENGINE_MAX_POWER: f64 = 3.0;

/// Bullet speed at zero power (units per tick).
pub const BULLET_SPEED_BASE: f64 = 20.0;

/// Bullet speed lost per unit of fire power.
pub const BULLET_SPEED_PER_POWER: f64 = 3.0;

// --- Fire control defaults ---

pub const DEFAULT_MIN_POWER: f64 = 0.5;
pub const DEFAULT_MAX_POWER: f64 = 3.0;

/// Largest aim error (degrees) at which firing is still allowed.
pub const DEFAULT_ALIGNMENT_THRESHOLD_DEG: f64 = 15.0;

/// Largest share of current energy a single shot may spend.
pub const DEFAULT_MAX_ENERGY_FRACTION_PER_SHOT: f64 = 0.25;

// --- Tracking ---

/// Ticks without an observation after which a track is unreliable.
pub const DEFAULT_STALENESS_LIMIT_TICKS: u64 = 50;

/// Ticks without an observation after which fire control holds fire.
pub const DEFAULT_FIRE_STALENESS_LIMIT_TICKS: u64 = 50;

/// Weight kept by the previous velocity estimate on each update.
pub const VELOCITY_SMOOTHING_RETAIN: f64 = 0.8;

// --- Target scoring ---

/// Distance term baseline: closer targets score `SCORE_DISTANCE_BASE - d`.
pub const SCORE_DISTANCE_BASE: f64 = 1000.0;

/// Energy term baseline: weaker targets score `SCORE_ENERGY_BASE - e`.
pub const SCORE_ENERGY_BASE: f64 = 100.0;

/// Above this many live opponents the selector only cares about distance.
pub const CROWDED_OPPONENT_COUNT: u32 = 5;

/// At or below this many live opponents the endgame policy applies.
pub const ENDGAME_OPPONENT_COUNT: u32 = 2;

/// Targets below this energy get the weak-target bonus in contested play.
pub const WEAK_TARGET_ENERGY: f64 = 30.0;
pub const WEAK_TARGET_BONUS: f64 = 30.0;

// --- Movement ---

/// Default distance from an edge that triggers boundary avoidance.
pub const DEFAULT_BOUNDARY_MARGIN: f64 = 80.0;

/// Distance driven toward the arena center when avoiding a boundary.
pub const BOUNDARY_ESCAPE_DISTANCE: f64 = 300.0;

// --- Radar ---

/// Full rotation used when nothing is being tracked.
pub const RADAR_FULL_TURN_DEG: f64 = 360.0;

/// Partial sweep used to reacquire a lost primary target.
pub const RADAR_SWEEP_DEG: f64 = 45.0;

/// A primary seen within this many ticks keeps the radar locked on it.
pub const DEFAULT_RADAR_LOCK_TICKS: u64 = 10;
