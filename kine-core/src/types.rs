//! Core value types for the kinematics model.
//!
//! Everything lives on a single axis. All units are SI:
//! - Velocity: meters per second (m/s), signed along the axis
//! - Mass: kilograms (kg)
//! - Acceleration: meters per second squared (m/s²)
//! - Time: seconds (s)

use serde::{Deserialize, Serialize};

use crate::materials::SurfaceProfile;

// =============================================================================
// Two-Body State
// =============================================================================

/// Masses and velocities of two bodies sharing one axis at a given instant.
///
/// Positive velocity points along +X. Nothing here is validated; the
/// resolver checks masses when it is asked to collide the bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoBodyState {
    pub m1: f64,
    pub v1: f64,
    pub m2: f64,
    pub v2: f64,
}

impl TwoBodyState {
    pub const fn new(m1: f64, v1: f64, m2: f64, v2: f64) -> Self {
        Self { m1, v1, m2, v2 }
    }

    /// Velocity of body 2 as seen from body 1.
    pub fn relative_velocity(&self) -> f64 {
        self.v2 - self.v1
    }

    /// Same masses, new velocities.
    pub fn with_velocities(&self, out: CollisionOutput) -> Self {
        Self {
            v1: out.v1_new,
            v2: out.v2_new,
            ..*self
        }
    }
}

// =============================================================================
// Collision
// =============================================================================

/// Everything the resolver needs for one impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionInput {
    pub m1: f64,
    pub v1: f64,
    pub m2: f64,
    pub v2: f64,

    /// Multiplier applied to both outgoing velocities (1 = elastic).
    #[serde(default = "default_restitution")]
    pub restitution: f64,
}

impl CollisionInput {
    /// Elastic collision input (restitution = 1).
    pub const fn new(m1: f64, v1: f64, m2: f64, v2: f64) -> Self {
        Self {
            m1,
            v1,
            m2,
            v2,
            restitution: constants::DEFAULT_RESTITUTION,
        }
    }

    pub fn from_state(state: &TwoBodyState) -> Self {
        Self::new(state.m1, state.v1, state.m2, state.v2)
    }

    pub fn with_restitution(self, restitution: f64) -> Self {
        Self {
            restitution,
            ..self
        }
    }

    pub fn state(&self) -> TwoBodyState {
        TwoBodyState::new(self.m1, self.v1, self.m2, self.v2)
    }
}

/// Post-collision velocities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionOutput {
    pub v1_new: f64,
    pub v2_new: f64,
}

// =============================================================================
// Friction
// =============================================================================

/// Inputs for one friction step.
///
/// ```text
///   v ──► |v| <= static_threshold ? 0 : v - sign(v) * max(mu, 0) * g * dt
///                                        └─ clamped to 0 if it would cross rest
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionInput {
    /// Current velocity
    pub v: f64,

    /// Kinetic friction coefficient; negative values act as 0
    pub mu: f64,

    /// Gravitational acceleration (default: 9.81)
    #[serde(default = "default_gravity")]
    pub g: f64,

    /// Step length in seconds, must be >= 0
    pub dt: f64,

    /// Speed at or below which the body counts as stopped (default: 0.01)
    #[serde(default = "default_static_threshold")]
    pub static_threshold: f64,
}

impl FrictionInput {
    /// Input with default gravity and static threshold.
    pub const fn new(v: f64, mu: f64, dt: f64) -> Self {
        Self {
            v,
            mu,
            g: constants::GRAVITY,
            dt,
            static_threshold: constants::STATIC_THRESHOLD,
        }
    }

    /// Input using a surface's friction coefficient.
    pub fn on_surface(surface: &SurfaceProfile, v: f64, dt: f64) -> Self {
        Self::new(v, surface.friction, dt)
    }

    pub fn with_gravity(self, g: f64) -> Self {
        Self { g, ..self }
    }

    pub fn with_static_threshold(self, static_threshold: f64) -> Self {
        Self {
            static_threshold,
            ..self
        }
    }

    pub fn with_velocity(self, v: f64) -> Self {
        Self { v, ..self }
    }

    /// Magnitude of the friction deceleration, `max(mu, 0) * g`.
    pub fn deceleration(&self) -> f64 {
        self.mu.max(0.0) * self.g
    }
}

fn default_restitution() -> f64 {
    constants::DEFAULT_RESTITUTION
}

fn default_gravity() -> f64 {
    constants::GRAVITY
}

fn default_static_threshold() -> f64 {
    constants::STATIC_THRESHOLD
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Default parameter values.
pub mod constants {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f64 = 9.81;

    /// Speed below which friction snaps a body to rest (m/s)
    pub const STATIC_THRESHOLD: f64 = 0.01;

    /// Fully elastic
    pub const DEFAULT_RESTITUTION: f64 = 1.0;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_input_defaults_to_elastic() {
        let input = CollisionInput::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(input.restitution, 1.0);
        assert_eq!(input.with_restitution(0.5).restitution, 0.5);
    }

    #[test]
    fn test_friction_input_defaults() {
        let input = FrictionInput::new(4.0, 0.3, 0.1);
        assert_eq!(input.g, 9.81);
        assert_eq!(input.static_threshold, 0.01);

        let custom = input.with_gravity(1.62).with_static_threshold(0.0);
        assert_eq!(custom.g, 1.62);
        assert_eq!(custom.static_threshold, 0.0);
        assert_eq!(custom.v, 4.0);
    }

    #[test]
    fn test_negative_mu_gives_no_deceleration() {
        let input = FrictionInput::new(4.0, -0.5, 0.1);
        assert_eq!(input.deceleration(), 0.0);
    }

    #[test]
    fn test_state_with_velocities_keeps_masses() {
        let state = TwoBodyState::new(5.0, 2.0, 3.0, -1.0);
        let after = state.with_velocities(CollisionOutput {
            v1_new: -0.25,
            v2_new: 2.75,
        });
        assert_eq!(after, TwoBodyState::new(5.0, -0.25, 3.0, 2.75));
        assert_eq!(state.relative_velocity(), -3.0);
    }

    #[test]
    fn test_omitted_fields_deserialize_to_defaults() {
        let input: FrictionInput = serde_yaml::from_str("v: 1.0\nmu: 0.2\ndt: 0.016\n").unwrap();
        assert_eq!(input, FrictionInput::new(1.0, 0.2, 0.016));

        let collision: CollisionInput =
            serde_yaml::from_str("m1: 1.0\nv1: 1.0\nm2: 2.0\nv2: 0.0\n").unwrap();
        assert_eq!(collision.restitution, 1.0);
    }
}
