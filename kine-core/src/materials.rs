//! Surface profile loader.
//!
//! A surface profile names a friction coefficient and a restitution value,
//! so a driver can swap "ice" for "rubber" without recompiling.
//!
//! ## Directory Structure
//!
//! ```text
//! materials/
//! └── surfaces/
//!     ├── ice.yaml
//!     ├── rubber.yaml
//!     └── wood.yaml
//! ```
//!
//! ```yaml
//! name: Wood
//! friction: 0.3
//! restitution: 0.98
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for material loading operations.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("Invalid material: {0}")]
    Invalid(String),
}

/// Friction and restitution of a contact surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceProfile {
    pub name: String,

    /// Kinetic friction coefficient (mu)
    pub friction: f64,

    /// Multiplier applied to post-collision velocities
    #[serde(default = "elastic_restitution")]
    pub restitution: f64,
}

impl SurfaceProfile {
    pub fn new(name: impl Into<String>, friction: f64, restitution: f64) -> Self {
        Self {
            name: name.into(),
            friction,
            restitution,
        }
    }

    /// Frictionless, perfectly elastic.
    pub fn elastic() -> Self {
        Self::new("Elastic", 0.0, 1.0)
    }

    /// Reject coefficients that make no sense for a surface.
    ///
    /// The integrator and resolver accept these, but a profile on disk
    /// with a negative coefficient is a typo.
    pub fn validate(&self) -> Result<(), MaterialError> {
        if self.friction.is_nan() || self.friction < 0.0 {
            return Err(MaterialError::Invalid(format!(
                "{}: friction must be >= 0, got {}",
                self.name, self.friction
            )));
        }
        if self.restitution.is_nan() || self.restitution < 0.0 {
            return Err(MaterialError::Invalid(format!(
                "{}: restitution must be >= 0, got {}",
                self.name, self.restitution
            )));
        }
        Ok(())
    }
}

impl Default for SurfaceProfile {
    fn default() -> Self {
        Self::elastic()
    }
}

fn elastic_restitution() -> f64 {
    crate::types::constants::DEFAULT_RESTITUTION
}

/// Material loader with configurable base directory.
pub struct MaterialLoader {
    base_path: PathBuf,
}

impl MaterialLoader {
    /// Create a new loader with the given base path.
    ///
    /// The base path should contain a `surfaces/` subdirectory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a surface by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = MaterialLoader::new("materials");
    /// let ice = loader.load_surface("ice")?;
    /// ```
    pub fn load_surface(&self, name: &str) -> Result<SurfaceProfile, MaterialError> {
        let path = self
            .base_path
            .join("surfaces")
            .join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(MaterialError::NotFound(name.to_string()));
        }
        debug!(name, path = %path.display(), "loading surface profile");
        let contents = fs::read_to_string(&path)?;
        let profile: SurfaceProfile = serde_yaml::from_str(&contents)?;
        profile.validate()?;
        Ok(profile)
    }

    /// List all available surfaces.
    pub fn list_surfaces(&self) -> Result<Vec<String>, MaterialError> {
        let path = self.base_path.join("surfaces");
        if !path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(".yaml") {
                names.push(name.trim_end_matches(".yaml").to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn get_materials_path() -> PathBuf {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(manifest_dir).join("..").join("materials")
    }

    #[test]
    fn test_load_existing_surface() {
        let loader = MaterialLoader::new(get_materials_path());
        let result = loader.load_surface("wood");

        assert!(result.is_ok(), "Should load wood: {:?}", result.err());
        let wood = result.unwrap();
        assert_eq!(wood.name, "Wood");
        assert!(wood.friction > 0.0);
        assert!(wood.restitution > 0.0 && wood.restitution <= 1.0);
    }

    #[test]
    fn test_load_nonexistent_surface() {
        let loader = MaterialLoader::new(get_materials_path());
        let result = loader.load_surface("nonexistent_surface_xyz");

        match result {
            Err(MaterialError::NotFound(name)) => {
                assert_eq!(name, "nonexistent_surface_xyz");
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_list_surfaces() {
        let loader = MaterialLoader::new(get_materials_path());
        let surfaces = loader.list_surfaces().unwrap();
        assert_eq!(surfaces, vec!["ice", "rubber", "wood"]);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let loader = MaterialLoader::new(get_materials_path().join("does_not_exist"));
        assert!(loader.list_surfaces().unwrap().is_empty());
    }

    #[test]
    fn test_restitution_defaults_to_elastic() {
        let profile: SurfaceProfile = serde_yaml::from_str("name: Felt\nfriction: 0.4\n").unwrap();
        assert_eq!(profile.restitution, 1.0);
    }

    #[test]
    fn test_validate_rejects_negative_coefficients() {
        assert!(SurfaceProfile::new("bad", -0.1, 1.0).validate().is_err());
        assert!(SurfaceProfile::new("bad", 0.1, -1.0).validate().is_err());
        assert!(SurfaceProfile::new("bad", f64::NAN, 1.0).validate().is_err());
        assert!(SurfaceProfile::default().validate().is_ok());
    }
}
