use crate::config::SimConfig;
use crate::token::Modality;
use crate::vec3::{horizontal_length, scale, sub, vec3, Vec3};

/// Floor for the finite-difference dt, so a release landing in the same
/// frame as the last sample never divides by zero.
pub const MIN_SAMPLE_DT: f64 = 1e-6;

/// Per-hold release estimator. Created when a token is grabbed, consumed
/// when it is released.
///
/// Two modes cover all four input modalities. Sampled mode keeps only the
/// immediately prior position sample and the elapsed time since it — a
/// single-step finite difference, no history buffer. Aimed mode keeps the
/// latest (force, direction) pair instead and never looks at positions.
#[derive(Debug, Clone)]
pub enum ThrowEstimator {
    Sampled {
        /// Token world position at the previous sample
        prev: Vec3,
        /// Time since that sample was reported
        dt: f64,
        /// Scale on the finite-difference velocity
        amplify: f64,
    },
    Aimed {
        force: f64,
        /// Yaw in radians; 0 throws along -z
        direction: f64,
    },
}

impl ThrowEstimator {
    /// Pick the estimation mode for a modality. Pointer drags are sampled at
    /// render-frame granularity and get the configured amplification to
    /// compensate; controller poses are sampled unamplified; keyboard aim
    /// supplies force and direction directly.
    pub fn for_modality(modality: Modality, grab_pos: Vec3, config: &SimConfig) -> Self {
        match modality {
            Modality::ControllerTrigger | Modality::ControllerGrip => ThrowEstimator::Sampled {
                prev: grab_pos,
                dt: 0.0,
                amplify: 1.0,
            },
            Modality::PointerDrag => ThrowEstimator::Sampled {
                prev: grab_pos,
                dt: 0.0,
                amplify: config.drag_amplification,
            },
            Modality::KeyboardAim => ThrowEstimator::Aimed {
                force: 0.0,
                direction: 0.0,
            },
        }
    }

    /// Record a new position sample: `prev_pos` is where the token was
    /// before this frame's update, `dt_since` the time since that position
    /// was reported. Ignored in aimed mode.
    pub fn sample(&mut self, prev_pos: Vec3, dt_since: f64) {
        if let ThrowEstimator::Sampled { prev, dt, .. } = self {
            *prev = prev_pos;
            *dt = dt_since;
        }
    }

    /// Record the latest aim. Ignored in sampled mode.
    pub fn set_aim(&mut self, new_force: f64, new_direction: f64) {
        if let ThrowEstimator::Aimed { force, direction } = self {
            *force = new_force;
            *direction = new_direction;
        }
    }

    /// Derive the release (linear velocity, angular velocity) pair.
    ///
    /// Sampled: finite difference from the previous sample to `release_pos`,
    /// scaled by the amplification; vertical motion comes only from what the
    /// shell actually sampled. Aimed: horizontal throw with y exactly 0.
    /// Spin is world-up in both modes, rate proportional to horizontal speed
    /// (sampled) or force (aimed).
    pub fn commit(&self, release_pos: Vec3, config: &SimConfig) -> (Vec3, Vec3) {
        match *self {
            ThrowEstimator::Sampled { prev, dt, amplify } => {
                let velocity = scale(sub(release_pos, prev), amplify / dt.max(MIN_SAMPLE_DT));
                let spin_rate = horizontal_length(velocity) * config.spin_gain;
                (velocity, vec3(0.0, spin_rate, 0.0))
            }
            ThrowEstimator::Aimed { force, direction } => {
                let velocity = vec3(direction.sin() * force, 0.0, -direction.cos() * force);
                (velocity, vec3(0.0, force * config.aim_spin_gain, 0.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::length;
    use std::f64::consts::FRAC_PI_2;

    fn config() -> SimConfig {
        SimConfig::default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn zero_displacement_releases_at_exactly_zero() {
        let pos = vec3(0.2, 0.4, -0.3);
        let mut est = ThrowEstimator::for_modality(Modality::ControllerTrigger, pos, &config());
        est.sample(pos, 0.016);
        let (velocity, angular) = est.commit(pos, &config());
        assert_eq!(velocity, Vec3::zero());
        assert_eq!(angular, Vec3::zero());
    }

    #[test]
    fn zero_dt_does_not_divide_by_zero() {
        let pos = vec3(0.0, 0.4, 0.0);
        let mut est = ThrowEstimator::for_modality(Modality::ControllerGrip, pos, &config());
        est.sample(pos, 0.0);
        let (velocity, _) = est.commit(pos, &config());
        assert_eq!(velocity, Vec3::zero());
        assert!(velocity.x.is_finite());
    }

    #[test]
    fn one_unit_over_half_second_is_speed_two() {
        let start = vec3(0.0, 0.4, 0.0);
        let mut est = ThrowEstimator::for_modality(Modality::ControllerTrigger, start, &config());
        est.sample(start, 0.5);
        let (velocity, _) = est.commit(vec3(1.0, 0.4, 0.0), &config());
        assert_close(length(velocity), 2.0);
        assert_close(velocity.x, 2.0);
        assert_close(velocity.y, 0.0);
    }

    #[test]
    fn drag_amplification_scales_velocity() {
        let start = vec3(0.0, 0.4, 0.0);
        let mut est = ThrowEstimator::for_modality(Modality::PointerDrag, start, &config());
        est.sample(start, 0.5);
        let (velocity, _) = est.commit(vec3(1.0, 0.4, 0.0), &config());
        assert_close(length(velocity), 3.2);
    }

    #[test]
    fn sampled_spin_is_horizontal_speed_times_gain() {
        let start = vec3(0.0, 0.4, 0.0);
        let mut est = ThrowEstimator::for_modality(Modality::ControllerTrigger, start, &config());
        est.sample(start, 0.5);
        // 1 unit in x and 3 units up: horizontal speed 2.0, vertical ignored
        let (velocity, angular) = est.commit(vec3(1.0, 3.4, 0.0), &config());
        assert_close(velocity.y, 6.0);
        assert_close(angular.x, 0.0);
        assert_close(angular.y, 2.0 * 3.0);
        assert_close(angular.z, 0.0);
    }

    #[test]
    fn sampled_keeps_only_latest_sample() {
        let start = vec3(0.0, 0.4, 0.0);
        let mut est = ThrowEstimator::for_modality(Modality::ControllerTrigger, start, &config());
        est.sample(start, 10.0);
        // A newer sample replaces the old one entirely
        est.sample(vec3(4.0, 0.4, 0.0), 0.5);
        let (velocity, _) = est.commit(vec3(5.0, 0.4, 0.0), &config());
        assert_close(velocity.x, 2.0);
    }

    #[test]
    fn aimed_straight_ahead() {
        let mut est = ThrowEstimator::for_modality(Modality::KeyboardAim, Vec3::zero(), &config());
        est.set_aim(10.0, 0.0);
        let (velocity, angular) = est.commit(Vec3::zero(), &config());
        assert_close(velocity.x, 0.0);
        assert_eq!(velocity.y, 0.0);
        assert_close(velocity.z, -10.0);
        assert_eq!(angular, vec3(0.0, 20.0, 0.0));
    }

    #[test]
    fn aimed_quarter_turn_throws_along_x() {
        let mut est = ThrowEstimator::for_modality(Modality::KeyboardAim, Vec3::zero(), &config());
        est.set_aim(4.0, FRAC_PI_2);
        let (velocity, _) = est.commit(Vec3::zero(), &config());
        assert_close(velocity.x, 4.0);
        assert_eq!(velocity.y, 0.0);
        assert_close(velocity.z, 0.0);
    }

    #[test]
    fn aimed_without_update_releases_at_rest() {
        let est = ThrowEstimator::for_modality(Modality::KeyboardAim, Vec3::zero(), &config());
        let (velocity, angular) = est.commit(Vec3::zero(), &config());
        assert_eq!(velocity, Vec3::zero());
        assert_eq!(angular, Vec3::zero());
    }

    #[test]
    fn aimed_ignores_position_samples() {
        let mut est = ThrowEstimator::for_modality(Modality::KeyboardAim, Vec3::zero(), &config());
        est.set_aim(10.0, 0.0);
        est.sample(vec3(5.0, 0.0, 5.0), 0.1);
        let (velocity, _) = est.commit(vec3(9.0, 0.0, 9.0), &config());
        assert_close(velocity.z, -10.0);
    }

    #[test]
    fn sampled_ignores_aim_updates() {
        let start = vec3(0.0, 0.4, 0.0);
        let mut est = ThrowEstimator::for_modality(Modality::PointerDrag, start, &config());
        est.set_aim(100.0, 1.0);
        est.sample(start, 0.5);
        let (velocity, _) = est.commit(vec3(1.0, 0.4, 0.0), &config());
        assert_close(velocity.x, 3.2);
    }
}
