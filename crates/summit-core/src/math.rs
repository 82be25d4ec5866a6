//! Scalar and angle helpers used by movement and camera code

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Normalize an angle in radians to the (-PI, PI] range.
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

/// Interpolate between two angles along the shortest path.
///
/// `t` is an interpolation weight, not a clamped step: feeding `rate * dt`
/// gives an exponential-decay style approach towards the target.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let diff = wrap_angle(to - from);
    from + diff * t
}

/// Move a scalar towards `to` by at most `delta`, without overshooting.
pub fn move_toward(from: f32, to: f32, delta: f32) -> f32 {
    let diff = to - from;
    if diff.abs() <= delta {
        to
    } else {
        from + delta.copysign(diff)
    }
}

/// Signed angle between two vectors around a rotation axis.
///
/// Positive when `to` is counter-clockwise from `from` as seen from the
/// positive side of `axis`.
pub fn signed_angle(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    let cross = from.cross(to);
    let unsigned = cross.length().atan2(from.dot(to));
    if cross.dot(axis) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(0.0)).abs() < 1e-6);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-6);
        assert!((wrap_angle(-TAU - 0.5) + 0.5).abs() < 1e-6);
        assert!((wrap_angle(PI + 0.1) + PI - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_lerp_angle_shortest_path() {
        // Crossing the -PI/PI seam should go the short way
        let result = lerp_angle(PI - 0.1, -PI + 0.1, 0.5);
        assert!((wrap_angle(result) - PI).abs() < 0.11);

        // Plain case: halfway
        let result = lerp_angle(0.0, 1.0, 0.5);
        assert!((result - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_move_toward() {
        assert!((move_toward(0.0, 10.0, 3.0) - 3.0).abs() < 1e-6);
        assert!((move_toward(10.0, 0.0, 3.0) - 7.0).abs() < 1e-6);
        // Within range snaps to the target exactly
        assert_eq!(move_toward(9.5, 10.0, 3.0), 10.0);
        assert_eq!(move_toward(-1.0, -1.0, 3.0), -1.0);
    }

    #[test]
    fn test_signed_angle() {
        let quarter = signed_angle(Vec3::Z, Vec3::X, Vec3::Y);
        assert!((quarter - FRAC_PI_2).abs() < 1e-6);

        let neg_quarter = signed_angle(Vec3::Z, -Vec3::X, Vec3::Y);
        assert!((neg_quarter + FRAC_PI_2).abs() < 1e-6);

        let half = signed_angle(Vec3::Z, -Vec3::Z, Vec3::Y).abs();
        assert!((half - PI).abs() < 1e-5);
    }
}
