//! Python bindings for the kine-core kinematics model.
//!
//! Provides a simple Python API:
//!
//! ```python
//! from kine_physics import elastic_collision_1d, apply_friction_1d, load_surface
//!
//! v1, v2 = elastic_collision_1d(5.0, 2.0, 3.0, -1.0, restitution=0.98)
//!
//! ice = load_surface("materials", "ice")
//! v = 3.0
//! while v != 0.0:
//!     v = ice.apply_friction(v, 1 / 60)
//! ```

use std::path::PathBuf;

use pyo3::create_exception;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use kine_core::types::constants;
use kine_core::{
    CollisionInput, CollisionResolver, FrictionInput, FrictionIntegrator, KinematicsError,
    MaterialLoader, SurfaceProfile, TwoBodyState,
};

create_exception!(kine_physics, InvalidMassError, PyValueError);
create_exception!(kine_physics, InvalidTimeStepError, PyValueError);
create_exception!(kine_physics, MaterialError, PyIOError);

fn kinematics_err(err: KinematicsError) -> PyErr {
    match err {
        KinematicsError::InvalidMass { .. } => InvalidMassError::new_err(err.to_string()),
        KinematicsError::InvalidTimeStep { .. } => InvalidTimeStepError::new_err(err.to_string()),
    }
}

fn material_err(err: kine_core::MaterialError) -> PyErr {
    MaterialError::new_err(err.to_string())
}

/// Post-collision velocities `(v1_new, v2_new)` of two point masses.
#[pyfunction]
#[pyo3(signature = (m1, v1, m2, v2, restitution = constants::DEFAULT_RESTITUTION))]
fn elastic_collision_1d(
    m1: f64,
    v1: f64,
    m2: f64,
    v2: f64,
    restitution: f64,
) -> PyResult<(f64, f64)> {
    let input = CollisionInput::new(m1, v1, m2, v2).with_restitution(restitution);
    let out = CollisionResolver::resolve(&input).map_err(kinematics_err)?;
    Ok((out.v1_new, out.v2_new))
}

/// Velocity after one friction step of `dt` seconds.
#[pyfunction]
#[pyo3(signature = (v, mu, dt, g = constants::GRAVITY, static_threshold = constants::STATIC_THRESHOLD))]
fn apply_friction_1d(v: f64, mu: f64, dt: f64, g: f64, static_threshold: f64) -> PyResult<f64> {
    let input = FrictionInput::new(v, mu, dt)
        .with_gravity(g)
        .with_static_threshold(static_threshold);
    FrictionIntegrator::step(&input).map_err(kinematics_err)
}

/// Total momentum `m1*v1 + m2*v2`.
#[pyfunction]
fn momentum(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    kine_core::momentum(&TwoBodyState::new(m1, v1, m2, v2))
}

/// Total kinetic energy `0.5*m1*v1² + 0.5*m2*v2²`.
#[pyfunction]
fn kinetic_energy(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    kine_core::kinetic_energy(&TwoBodyState::new(m1, v1, m2, v2))
}

/// A named contact surface.
///
/// Wraps a surface profile so the driver can collide and slide bodies
/// without passing coefficients around.
#[pyclass]
#[derive(Clone)]
pub struct Surface {
    profile: SurfaceProfile,
}

#[pymethods]
impl Surface {
    #[new]
    #[pyo3(signature = (name, friction, restitution = constants::DEFAULT_RESTITUTION))]
    fn new(name: String, friction: f64, restitution: f64) -> PyResult<Self> {
        let profile = SurfaceProfile::new(name, friction, restitution);
        profile.validate().map_err(material_err)?;
        Ok(Self { profile })
    }

    #[getter]
    fn name(&self) -> String {
        self.profile.name.clone()
    }

    #[getter]
    fn friction(&self) -> f64 {
        self.profile.friction
    }

    #[getter]
    fn restitution(&self) -> f64 {
        self.profile.restitution
    }

    fn __repr__(&self) -> String {
        format!(
            "Surface({:?}, friction={:.3}, restitution={:.3})",
            self.profile.name, self.profile.friction, self.profile.restitution
        )
    }

    /// Collide two bodies using this surface's restitution.
    fn collide(&self, m1: f64, v1: f64, m2: f64, v2: f64) -> PyResult<(f64, f64)> {
        let out =
            CollisionResolver::resolve_on(&self.profile, m1, v1, m2, v2).map_err(kinematics_err)?;
        Ok((out.v1_new, out.v2_new))
    }

    /// Slide a body across this surface for `substeps` steps of `dt`.
    #[pyo3(signature = (v, dt, substeps = 1))]
    fn apply_friction(&self, v: f64, dt: f64, substeps: usize) -> PyResult<f64> {
        let input = FrictionInput::on_surface(&self.profile, v, dt);
        FrictionIntegrator::step_n(&input, substeps).map_err(kinematics_err)
    }
}

/// Load `<base_path>/surfaces/<name>.yaml`.
#[pyfunction]
fn load_surface(base_path: PathBuf, name: &str) -> PyResult<Surface> {
    let profile = MaterialLoader::new(base_path)
        .load_surface(name)
        .map_err(material_err)?;
    Ok(Surface { profile })
}

/// Names of the surfaces available under `base_path`.
#[pyfunction]
fn list_surfaces(base_path: PathBuf) -> PyResult<Vec<String>> {
    MaterialLoader::new(base_path)
        .list_surfaces()
        .map_err(material_err)
}

/// Python module definition.
#[pymodule]
fn kine_physics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(elastic_collision_1d, m)?)?;
    m.add_function(wrap_pyfunction!(apply_friction_1d, m)?)?;
    m.add_function(wrap_pyfunction!(momentum, m)?)?;
    m.add_function(wrap_pyfunction!(kinetic_energy, m)?)?;
    m.add_function(wrap_pyfunction!(load_surface, m)?)?;
    m.add_function(wrap_pyfunction!(list_surfaces, m)?)?;
    m.add_class::<Surface>()?;
    m.add("InvalidMassError", m.py().get_type_bound::<InvalidMassError>())?;
    m.add("InvalidTimeStepError", m.py().get_type_bound::<InvalidTimeStepError>())?;
    m.add("MaterialError", m.py().get_type_bound::<MaterialError>())?;
    Ok(())
}
