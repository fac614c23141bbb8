use crate::config::SimConfig;
use crate::token::Token;
use crate::vec3::{add, length, scale, Vec3};

/// Spin magnitudes below this count as "not spinning", so a near-zero axis
/// never needs normalizing.
pub const SPIN_EPSILON: f64 = 1e-3;

/// Advance one token by `delta` seconds. Held tokens are left alone — the
/// shell drives them directly while held.
///
/// Semi-implicit Euler: gravity goes into the velocity first, then the
/// velocity into the position. Ground contact clamps to the resting height,
/// kills vertical velocity, and applies friction and angular damping; once
/// the remaining motion drops under the rest thresholds it snaps to exactly
/// zero, so a settling token stops in a bounded number of contacts.
pub fn step(token: &mut Token, config: &SimConfig, delta: f64) {
    if token.is_held() {
        return;
    }

    token.velocity.y += config.gravity_accel * delta;
    token.pos = add(token.pos, scale(token.velocity, delta));

    let spin_rate = length(token.angular_velocity);
    if spin_rate > SPIN_EPSILON {
        token.yaw += spin_rate * delta;
    }

    let min_y = token.half_height;
    if token.pos.y <= min_y {
        token.pos.y = min_y;
        token.velocity.y = 0.0;
        token.velocity.x *= config.ground_friction;
        token.velocity.z *= config.ground_friction;
        token.angular_velocity = scale(token.angular_velocity, config.angular_damping);
        if length(token.angular_velocity) < config.angular_rest_speed {
            token.angular_velocity = Vec3::zero();
        }
        if length(token.velocity) < config.linear_rest_speed {
            token.velocity = Vec3::zero();
        }
    }
}
