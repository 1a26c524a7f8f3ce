//! Collision resolution for two point masses on one axis.
//!
//! Computes post-collision velocities from:
//! - Conservation of momentum
//! - Conservation of kinetic energy
//! - A restitution multiplier applied afterwards
//!
//! ## Model
//!
//! The ideal elastic result is the closed-form solution of the two
//! conservation laws:
//!
//! ```text
//! v1' = ((m1 - m2) * v1 + 2 * m2 * v2) / (m1 + m2)
//! v2' = ((m2 - m1) * v2 + 2 * m1 * v1) / (m1 + m2)
//! ```
//!
//! Restitution then scales BOTH outgoing velocities. This is not the
//! textbook coefficient of restitution (which only scales the separation
//! speed): with `restitution != 1` momentum is not conserved. Callers
//! that compare against `probes::momentum` rely on exactly this behavior.
//!
//! Restitution is not range checked. Values above 1 model super-elastic
//! bounces.

use tracing::{debug, trace};

use crate::error::{KinematicsError, KinematicsResult};
use crate::materials::SurfaceProfile;
use crate::types::{CollisionInput, CollisionOutput, TwoBodyState};

/// Collision resolver for 1D point masses.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Resolve a collision and return both outgoing velocities.
    ///
    /// # Errors
    /// `InvalidMass` if either mass is not strictly positive (NaN included)
    /// or if the masses sum to exactly zero.
    pub fn resolve(input: &CollisionInput) -> KinematicsResult<CollisionOutput> {
        let CollisionInput {
            m1,
            v1,
            m2,
            v2,
            restitution,
        } = *input;

        let masses_positive = m1 > 0.0 && m2 > 0.0;
        if !masses_positive {
            debug!(m1, m2, "rejecting collision with non-positive mass");
            return Err(KinematicsError::InvalidMass { m1, m2 });
        }

        let denom = m1 + m2;
        if denom == 0.0 {
            debug!(m1, m2, "rejecting collision with zero total mass");
            return Err(KinematicsError::InvalidMass { m1, m2 });
        }

        if restitution > 1.0 {
            trace!(restitution, "super-elastic collision");
        }

        let v1_new = ((m1 - m2) * v1 + 2.0 * m2 * v2) / denom * restitution;
        let v2_new = ((m2 - m1) * v2 + 2.0 * m1 * v1) / denom * restitution;

        Ok(CollisionOutput { v1_new, v2_new })
    }

    /// Resolve and return the post-collision state (same masses).
    pub fn resolve_state(
        state: &TwoBodyState,
        restitution: f64,
    ) -> KinematicsResult<TwoBodyState> {
        let input = CollisionInput::from_state(state).with_restitution(restitution);
        Self::resolve(&input).map(|out| state.with_velocities(out))
    }

    /// Resolve using a surface profile's restitution.
    pub fn resolve_on(
        surface: &SurfaceProfile,
        m1: f64,
        v1: f64,
        m2: f64,
        v2: f64,
    ) -> KinematicsResult<CollisionOutput> {
        let input = CollisionInput::new(m1, v1, m2, v2).with_restitution(surface.restitution);
        Self::resolve(&input)
    }
}

/// Free-function form of [`CollisionResolver::resolve`].
pub fn elastic_collision_1d(
    m1: f64,
    v1: f64,
    m2: f64,
    v2: f64,
    restitution: f64,
) -> KinematicsResult<CollisionOutput> {
    CollisionResolver::resolve(&CollisionInput::new(m1, v1, m2, v2).with_restitution(restitution))
}

// =============================================================================
// Tests
// =============================================================================
