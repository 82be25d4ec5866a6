//! Movement tuning and derived jump kinematics

use serde::{Deserialize, Serialize};

/// Movement tuning parameters, immutable once handed to the controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningParameters {
    /// Ground speed in meters per second
    pub move_speed: f32,
    /// Acceleration term added to the per-tick velocity set
    pub acceleration: f32,
    /// Skin rotation rate (angular lerp weight per second)
    pub rotation_speed: f32,
    /// Stopping speed. Carried in the tuning set but not consumed by the
    /// velocity update, which re-derives velocity from input each tick.
    pub stopping_speed: f32,
    /// Apex height of a full jump, in meters
    pub jump_height: f32,
    /// Seconds from launch to the apex
    pub jump_time_to_peak: f32,
    /// Seconds from the apex back to launch height
    pub jump_time_to_descent: f32,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self {
            move_speed: 7.0,
            acceleration: 4.0,
            rotation_speed: 12.0,
            stopping_speed: 20.0,
            jump_height: 2.25,
            jump_time_to_peak: 0.4,
            jump_time_to_descent: 0.35,
        }
    }
}

/// Jump constants derived from [`TuningParameters`] once at construction.
///
/// The jump arc is a parabola split at the apex: the rising half and the
/// falling half each get their own constant acceleration so the two
/// durations are tunable independently.
#[derive(Debug, Clone, Copy)]
pub struct JumpKinematics {
    /// Vertical velocity applied when a jump executes (`2H / Tp`)
    pub launch_velocity: f32,
    /// Gravity while still moving upward (`-2H / Tp^2`, negative)
    pub rise_gravity: f32,
    /// Gravity once falling (`-2H / Td^2`, negative)
    pub fall_gravity: f32,
}

/// Shortest jump timing accepted from tuning. Zero or negative timings
/// from a hand-edited settings file would blow up the derived gravity.
const MIN_JUMP_TIME: f32 = 0.05;

impl JumpKinematics {
    /// Derive the jump constants from tuning
    pub fn derive(tuning: &TuningParameters) -> Self {
        let h = tuning.jump_height;
        let tp = tuning.jump_time_to_peak.max(MIN_JUMP_TIME);
        let td = tuning.jump_time_to_descent.max(MIN_JUMP_TIME);

        Self {
            launch_velocity: 2.0 * h / tp,
            rise_gravity: -2.0 * h / (tp * tp),
            fall_gravity: -2.0 * h / (td * td),
        }
    }

    /// Gravity for the current vertical velocity: rise gravity while still
    /// moving upward, fall gravity otherwise
    pub fn gravity_for(&self, vertical_velocity: f32) -> f32 {
        if vertical_velocity > 0.0 {
            self.rise_gravity
        } else {
            self.fall_gravity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        let tuning = TuningParameters {
            jump_height: 2.0,
            jump_time_to_peak: 0.5,
            jump_time_to_descent: 0.25,
            ..Default::default()
        };
        let jump = JumpKinematics::derive(&tuning);

        assert!((jump.launch_velocity - 8.0).abs() < 1e-6);
        assert!((jump.rise_gravity + 16.0).abs() < 1e-6);
        assert!((jump.fall_gravity + 64.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_timings_give_symmetric_gravity() {
        let tuning = TuningParameters {
            jump_time_to_peak: 0.4,
            jump_time_to_descent: 0.4,
            ..Default::default()
        };
        let jump = JumpKinematics::derive(&tuning);
        assert!((jump.rise_gravity - jump.fall_gravity).abs() < 1e-6);
    }

    #[test]
    fn test_rise_reaches_zero_at_peak_time() {
        let tuning = TuningParameters::default();
        let jump = JumpKinematics::derive(&tuning);

        // Integrate the rising half at 1 kHz; velocity should cross zero
        // at jump_time_to_peak within one step of tolerance.
        let dt = 0.001;
        let mut v = jump.launch_velocity;
        let mut t = 0.0;
        while v > 0.0 {
            v += jump.rise_gravity * dt;
            t += dt;
        }
        assert!((t - tuning.jump_time_to_peak).abs() < 2.0 * dt);
    }

    #[test]
    fn test_degenerate_timings_stay_finite() {
        let tuning = TuningParameters {
            jump_time_to_peak: 0.0,
            jump_time_to_descent: -1.0,
            ..Default::default()
        };
        let jump = JumpKinematics::derive(&tuning);

        assert!(jump.launch_velocity.is_finite() && jump.launch_velocity > 0.0);
        assert!(jump.rise_gravity.is_finite() && jump.rise_gravity < 0.0);
        assert!(jump.fall_gravity.is_finite() && jump.fall_gravity < 0.0);
    }

    #[test]
    fn test_gravity_selection() {
        let jump = JumpKinematics::derive(&TuningParameters::default());
        assert_eq!(jump.gravity_for(1.0), jump.rise_gravity);
        assert_eq!(jump.gravity_for(-1.0), jump.fall_gravity);
        assert_eq!(jump.gravity_for(0.0), jump.fall_gravity);
    }
}
