//! # Kine Core
//!
//! One-dimensional collision and friction kinematics for small simulations.
//!
//! ## Architecture
//!
//! - `types`: Value types (two-body state, collision and friction inputs) and defaults
//! - `collision`: Post-collision velocities for two point masses
//! - `friction`: Kinetic friction stepping with snap-to-rest
//! - `probes`: Momentum and kinetic energy of a two-body state
//! - `materials`: YAML surface profile loader
//! - `error`: Error taxonomy
//!
//! Every computation is a pure function of its arguments. The caller owns
//! the simulation loop, contact detection and time stepping.

pub mod collision;
pub mod error;
pub mod friction;
pub mod materials;
pub mod probes;
pub mod types;

pub use collision::{elastic_collision_1d, CollisionResolver};
pub use error::{KinematicsError, KinematicsResult};
pub use friction::{apply_friction_1d, FrictionIntegrator};
pub use materials::{MaterialError, MaterialLoader, SurfaceProfile};
pub use probes::{kinetic_energy, momentum};
pub use types::{CollisionInput, CollisionOutput, FrictionInput, TwoBodyState};
