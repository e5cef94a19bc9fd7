//! Pipeline settings.
//!
//! [`MeshingConfig`] gathers every tunable of a run: strategy, lattice and
//! loft parameters, the optional post-transform and the file paths. It is
//! serde-deserializable so the CLI can read it from JSON; missing fields
//! fall back to the constants in the `config` crate.

use std::path::PathBuf;

use config::constants::{
    GlobalConfig, DEFAULT_LAYERS, DEFAULT_RESOLUTION, DEFAULT_VTK_TITLE, LOOP_HEIGHT_TOLERANCE,
};
use serde::{Deserialize, Serialize};

use crate::error::HexMeshResult;
use crate::ops::{LoftOptions, VoxelOptions};
use crate::transform::UniformTransform;

/// Hex meshing strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Fill the bounding box with cubic cells.
    Lattice,
    /// Sweep the top loop down to the bottom loop.
    #[default]
    Loft,
}

/// Everything needed to run the pipeline once.
///
/// # Example
///
/// ```rust
/// use hexmesh::{MeshingConfig, Strategy};
///
/// let cfg: MeshingConfig = serde_json::from_str(r#"{
///     "strategy": "lattice",
///     "resolution": 0.25,
///     "input": "part.obj",
///     "output": "part.vtk"
/// }"#).unwrap();
/// assert_eq!(cfg.strategy, Strategy::Lattice);
/// assert_eq!(cfg.layers, 10);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshingConfig {
    /// Which generator to run.
    pub strategy: Strategy,
    /// Lattice cell edge length.
    pub resolution: f64,
    /// Weld coincident lattice corners.
    pub weld: bool,
    /// Loft layer count.
    pub layers: u32,
    /// Height tolerance for extremal rings.
    pub loop_tolerance: f64,
    /// Reverse clockwise loops before lofting.
    pub normalize_winding: bool,
    /// Post-transform applied to the generated mesh.
    pub transform: UniformTransform,
    /// OBJ surface to read.
    pub input: PathBuf,
    /// VTK file to write.
    pub output: PathBuf,
    /// VTK title line.
    pub title: String,
}

impl Default for MeshingConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            resolution: DEFAULT_RESOLUTION,
            weld: false,
            layers: DEFAULT_LAYERS,
            loop_tolerance: LOOP_HEIGHT_TOLERANCE,
            normalize_winding: true,
            transform: UniformTransform::IDENTITY,
            input: PathBuf::from("surface.obj"),
            output: PathBuf::from("output.vtk"),
            title: DEFAULT_VTK_TITLE.to_string(),
        }
    }
}

impl MeshingConfig {
    /// Rejects bad parameters of the chosen strategy and degenerate
    /// transforms before any work starts.
    ///
    /// Only the fields the strategy reads are checked: a lattice run ignores
    /// `layers` and `loop_tolerance`, a loft run ignores `resolution`.
    pub fn validate(&self) -> HexMeshResult<()> {
        match self.strategy {
            Strategy::Lattice => {
                GlobalConfig::new(self.resolution, LOOP_HEIGHT_TOLERANCE, DEFAULT_LAYERS)?;
            }
            Strategy::Loft => {
                GlobalConfig::new(DEFAULT_RESOLUTION, self.loop_tolerance, self.layers)?;
            }
        }
        self.transform.validate()
    }

    /// Lattice parameters.
    pub fn voxel_options(&self) -> VoxelOptions {
        VoxelOptions {
            resolution: self.resolution,
            weld: self.weld,
        }
    }

    /// Loft parameters, including the post-transform.
    pub fn loft_options(&self) -> LoftOptions {
        LoftOptions {
            layers: self.layers,
            tolerance: self.loop_tolerance,
            normalize_winding: self.normalize_winding,
            transform: self.transform,
        }
    }
}
