//! Kinetic friction stepping for a single velocity.
//!
//! Friction is a constant deceleration `a = max(mu, 0) * g` opposing motion,
//! applied with one explicit step per call:
//!
//! ```text
//! 1. |v| <= static_threshold  →  0            (already at rest)
//! 2. v_next = v - sign(v) * a * dt
//! 3. sign(v_next) != sign(v)  →  0            (would cross rest this step)
//! 4. otherwise                →  v_next
//! ```
//!
//! The result never points the other way from the input. A step that would
//! carry the body past zero stops it exactly at zero instead.

use tracing::debug;

use crate::error::{KinematicsError, KinematicsResult};
use crate::types::FrictionInput;

/// Explicit friction integrator.
pub struct FrictionIntegrator;

impl FrictionIntegrator {
    /// Advance the velocity by one step of `input.dt` seconds.
    ///
    /// # Errors
    /// `InvalidTimeStep` if `dt < 0`, checked before anything else.
    pub fn step(input: &FrictionInput) -> KinematicsResult<f64> {
        if input.dt < 0.0 {
            debug!(dt = input.dt, "rejecting negative friction time step");
            return Err(KinematicsError::InvalidTimeStep { dt: input.dt });
        }

        let v = input.v;
        if v.abs() <= input.static_threshold {
            return Ok(0.0);
        }

        let v_next = v - sign(v) * input.deceleration() * input.dt;
        if sign(v_next) != sign(v) {
            return Ok(0.0);
        }

        Ok(v_next)
    }

    /// Advance the velocity by `substeps` consecutive steps of `input.dt`.
    ///
    /// Total time advanced is `substeps * dt`. Stops early once the body
    /// is at rest.
    pub fn step_n(input: &FrictionInput, substeps: usize) -> KinematicsResult<f64> {
        if input.dt < 0.0 {
            debug!(dt = input.dt, "rejecting negative friction time step");
            return Err(KinematicsError::InvalidTimeStep { dt: input.dt });
        }

        let mut v = input.v;
        for _ in 0..substeps {
            v = Self::step(&input.with_velocity(v))?;
            if v == 0.0 {
                break;
            }
        }
        Ok(v)
    }
}

/// Free-function form of [`FrictionIntegrator::step`].
pub fn apply_friction_1d(
    v: f64,
    mu: f64,
    g: f64,
    dt: f64,
    static_threshold: f64,
) -> KinematicsResult<f64> {
    let input = FrictionInput::new(v, mu, dt)
        .with_gravity(g)
        .with_static_threshold(static_threshold);
    FrictionIntegrator::step(&input)
}

/// Three-way sign: -1, 0 or +1 (NaN stays NaN, so it never matches).
fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}

// =============================================================================
// Tests
// =============================================================================
