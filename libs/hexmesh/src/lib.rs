//! # Hexmesh
//!
//! Hexahedral volume meshing of closed quad surfaces.
//!
//! ## Architecture
//!
//! ```text
//! OBJ → SurfaceMesh → voxel_fill                         → HexMesh → VTK
//!                   → extract_*_loop → sweep_hex_mesh   ↗
//! ```
//!
//! ## Strategies
//!
//! - **Lattice**: tiles the surface's bounding box with cubic cells. The box
//!   is filled, not the enclosed solid.
//! - **Loft**: interpolates between the top and bottom boundary loops over a
//!   number of layers and stitches the levels into cells.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hexmesh::{run, MeshingConfig, Strategy};
//!
//! let config = MeshingConfig {
//!     strategy: Strategy::Loft,
//!     layers: 10,
//!     input: "cube.obj".into(),
//!     output: "cube.vtk".into(),
//!     ..MeshingConfig::default()
//! };
//! let summary = run(&config)?;
//! println!("{} hexahedra", summary.hexes);
//! # Ok::<(), hexmesh::HexMeshError>(())
//! ```

pub mod bounds;
pub mod error;
pub mod io;
pub mod mesh;
pub mod ops;
pub mod settings;
pub mod spatial_key;
pub mod transform;

pub use bounds::BoundingBox;
pub use error::{HexMeshError, HexMeshResult};
pub use mesh::{HexMesh, Hexahedron, SurfaceMesh, VoxelResult};
pub use ops::{
    extract_bottom_loop, extract_loop, extract_top_loop, sweep_hex_mesh, sweep_hex_mesh_with,
    sweep_loops, voxel_fill, voxel_fill_with, BoundaryLoop, Extremum, LoftOptions, VoxelOptions,
};
pub use settings::{MeshingConfig, Strategy};
pub use spatial_key::SpatialKey;
pub use transform::UniformTransform;

use log::{info, warn};

/// Counts reported by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Vertices in the loaded surface.
    pub surface_vertices: usize,
    /// Quads in the loaded surface.
    pub surface_quads: usize,
    /// Vertices written.
    pub vertices: usize,
    /// Hexahedra written.
    pub hexes: usize,
}

/// Generates a hex mesh from a surface with the configured strategy.
///
/// The configured transform is applied to the result of either strategy.
///
/// # Errors
///
/// Any validation error of the configuration or of the chosen generator.
pub fn generate(surface: &SurfaceMesh, config: &MeshingConfig) -> HexMeshResult<HexMesh> {
    config.validate()?;
    match config.strategy {
        Strategy::Lattice => {
            let mut mesh = voxel_fill_with(surface, &config.voxel_options())?;
            config.transform.apply(&mut mesh);
            Ok(mesh)
        }
        Strategy::Loft => sweep_hex_mesh_with(surface, &config.loft_options()),
    }
}

/// Loads the input surface, generates the hex mesh and writes it as VTK.
///
/// An unreadable input degrades to an empty surface (with a warning); what
/// happens next depends on the strategy: the lattice writes an empty mesh,
/// the loft fails with [`HexMeshError::EmptyInput`].
pub fn run(config: &MeshingConfig) -> HexMeshResult<RunSummary> {
    config.validate()?;

    let surface = io::load_surface_obj(&config.input);
    if surface.is_empty() {
        warn!("surface '{}' has no vertices", config.input.display());
    }
    info!(
        "Loaded surface: {} vertices, {} quads",
        surface.vertex_count(),
        surface.quad_count()
    );

    let mesh = generate(&surface, config)?;
    info!(
        "Generated {} hexahedra, {} vertices ({:?})",
        mesh.hex_count(),
        mesh.vertex_count(),
        config.strategy
    );

    io::write_vtk_with_title(&config.output, &mesh, &config.title)?;
    info!("Written to {}", config.output.display());

    Ok(RunSummary {
        surface_vertices: surface.vertex_count(),
        surface_quads: surface.quad_count(),
        vertices: mesh.vertex_count(),
        hexes: mesh.hex_count(),
    })
}
