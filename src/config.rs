use crate::error::ConfigError;

/// Simulation tuning. Distances in metres, times in seconds, angles in
/// radians. Gravity and ground behaviour match a tabletop-scale court.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimConfig {
    /// Gravitational acceleration along y (negative, pulls toward the ground)
    pub gravity_accel: f64,
    /// Horizontal velocity multiplier per ground contact, strictly in (0, 1)
    pub ground_friction: f64,
    /// Spin multiplier per ground contact, strictly in (0, 1)
    pub angular_damping: f64,
    /// Grounded linear speed below which the token snaps to rest
    pub linear_rest_speed: f64,
    /// Grounded spin rate below which the token stops spinning
    pub angular_rest_speed: f64,
    /// Release velocity amplification for pointer-drag throws, compensating
    /// for render-frame sampling granularity
    pub drag_amplification: f64,
    /// Spin rate per unit of horizontal release speed (sampled throws)
    pub spin_gain: f64,
    /// Spin rate per unit of throw force (aim-and-throw releases)
    pub aim_spin_gain: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity_accel: -9.81,   // m/s^2
            ground_friction: 0.80,  // per contact tick
            angular_damping: 0.75,  // per contact tick
            linear_rest_speed: 0.01,
            angular_rest_speed: 0.01,
            drag_amplification: 1.6,
            spin_gain: 3.0,
            aim_spin_gain: 2.0,
        }
    }
}

impl SimConfig {
    /// Check every tunable before the simulation is constructed. Friction
    /// and damping at exactly 0.0 or 1.0 would stall or never settle, so
    /// both bounds are exclusive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity_accel >= 0.0 {
            return Err(ConfigError::GravityNotNegative(self.gravity_accel));
        }
        for (name, value) in [
            ("ground_friction", self.ground_friction),
            ("angular_damping", self.angular_damping),
        ] {
            if value <= 0.0 || value >= 1.0 {
                return Err(ConfigError::OutsideUnitInterval { name, value });
            }
        }
        for (name, value) in [
            ("linear_rest_speed", self.linear_rest_speed),
            ("angular_rest_speed", self.angular_rest_speed),
            ("drag_amplification", self.drag_amplification),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        for (name, value) in [
            ("spin_gain", self.spin_gain),
            ("aim_spin_gain", self.aim_spin_gain),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_positive_gravity() {
        let config = SimConfig {
            gravity_accel: 9.81,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GravityNotNegative(9.81))
        );
    }

    #[test]
    fn rejects_friction_at_bounds() {
        for bad in [0.0, 1.0, -0.2, 1.5] {
            let config = SimConfig {
                ground_friction: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "friction {} accepted", bad);
        }
    }

    #[test]
    fn rejects_damping_at_bounds() {
        for bad in [0.0, 1.0] {
            let config = SimConfig {
                angular_damping: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "damping {} accepted", bad);
        }
    }

    #[test]
    fn rejects_zero_amplification() {
        let config = SimConfig {
            drag_amplification: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_spin_gain() {
        let config = SimConfig {
            spin_gain: -1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                name: "spin_gain",
                value: -1.0
            })
        );
    }

    #[test]
    fn zero_spin_gain_is_valid() {
        let config = SimConfig {
            spin_gain: 0.0,
            aim_spin_gain: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
