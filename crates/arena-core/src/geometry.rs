//! Angle and kinematics helpers.
//!
//! All angles are in degrees in the arena bearing convention:
//! 0° points "up" (+y) and angles grow clockwise, so a unit vector
//! for angle `a` is `(sin a, cos a)`.

use glam::DVec2;

/// Normalize an angle into `(-180, 180]`.
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Normalize an angle into `[0, 360)`.
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert a bearing relative to `heading` into an absolute heading.
pub fn absolute_bearing(heading: f64, relative: f64) -> f64 {
    normalize_heading(heading + relative)
}

/// Unit vector pointing along `degrees`.
pub fn direction(degrees: f64) -> DVec2 {
    let rad = degrees.to_radians();
    DVec2::new(rad.sin(), rad.cos())
}

/// Polar-to-cartesian: the point `distance` units from `origin` along `degrees`.
pub fn project(origin: DVec2, degrees: f64, distance: f64) -> DVec2 {
    origin + direction(degrees) * distance
}

/// Velocity vector for something moving at `speed` along `heading`.
pub fn velocity_vector(heading: f64, speed: f64) -> DVec2 {
    direction(heading) * speed
}

/// Absolute angle from `from` to `to`, in `[0, 360)`.
pub fn angle_to(from: DVec2, to: DVec2) -> f64 {
    let delta = to - from;
    normalize_heading(delta.x.atan2(delta.y).to_degrees())
}

/// Linear extrapolation: where something at `position` moving at `velocity`
/// (units per tick) will be after `elapsed` ticks.
pub fn extrapolate(position: DVec2, velocity: DVec2, elapsed: f64) -> DVec2 {
    position + velocity * elapsed
}
