//! Small math helpers the flight and weapon systems share.
//!
//! These mirror the usual game-engine vector utilities: capped-step
//! approach (`move_toward`) and shortest-path angle interpolation.

use glam::DVec2;

/// Move `from` toward `to` by at most `max_delta`, without overshooting.
pub fn move_toward(from: DVec2, to: DVec2, max_delta: f64) -> DVec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist <= max_delta || dist < f64::EPSILON {
        to
    } else {
        from + delta / dist * max_delta
    }
}

/// Scalar variant of `move_toward`.
pub fn move_toward_scalar(from: f64, to: f64, max_delta: f64) -> f64 {
    if (to - from).abs() <= max_delta {
        to
    } else {
        from + (to - from).signum() * max_delta
    }
}

/// Wrap an angle difference into [-PI, PI].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(std::f64::consts::TAU);
    if wrapped > std::f64::consts::PI {
        wrapped - std::f64::consts::TAU
    } else {
        wrapped
    }
}

/// Interpolate between two angles along the shortest path.
pub fn lerp_angle(from: f64, to: f64, weight: f64) -> f64 {
    from + wrap_angle(to - from) * weight
}

/// Angle of the vector from `from` to `to`, in radians.
/// Returns `None` when the points coincide (no defined direction).
pub fn angle_to_point(from: DVec2, to: DVec2) -> Option<f64> {
    let delta = to - from;
    if delta.length_squared() < f64::EPSILON {
        None
    } else {
        Some(delta.y.atan2(delta.x))
    }
}
