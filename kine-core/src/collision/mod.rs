//! Collision resolution for bodies on a shared axis.
//!
//! Contact detection belongs to the caller: once two bodies touch, it hands
//! their masses and velocities to the resolver and writes the result back.
//!
//! ```text
//!   m1 ──► v1        v2 ◄── m2
//!    ●────────────────●
//!            │
//!            ▼  resolve
//!   ◄── v1'          v2' ──►
//! ```

pub mod resolution;

pub use resolution::*;
