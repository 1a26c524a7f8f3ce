//! Error types for the kinematics core.
//!
//! Both kinds are precondition violations from the caller. Nothing is
//! computed when one is returned.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    /// A mass was not strictly positive, or the masses summed to zero.
    #[error("Invalid masses: m1 = {m1}, m2 = {m2} (both must be > 0)")]
    InvalidMass { m1: f64, m2: f64 },

    /// Friction was asked to step backwards in time.
    #[error("Invalid time step: dt = {dt} (must be >= 0)")]
    InvalidTimeStep { dt: f64 },
}

/// Convenience alias for `Result<T, KinematicsError>`.
pub type KinematicsResult<T> = Result<T, KinematicsError>;
