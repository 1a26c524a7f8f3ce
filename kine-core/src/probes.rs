//! Conserved-quantity probes for a two-body state.
//!
//! Used to check resolver output in tests and by drivers that want to
//! display totals. No validation.

use crate::types::TwoBodyState;

/// Total linear momentum, `m1*v1 + m2*v2`.
pub fn momentum(state: &TwoBodyState) -> f64 {
    state.m1 * state.v1 + state.m2 * state.v2
}

/// Total kinetic energy, `0.5*m1*v1² + 0.5*m2*v2²`.
pub fn kinetic_energy(state: &TwoBodyState) -> f64 {
    0.5 * state.m1 * state.v1 * state.v1 + 0.5 * state.m2 * state.v2 * state.v2
}
