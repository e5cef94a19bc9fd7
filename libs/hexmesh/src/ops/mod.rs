//! # Meshing Operations
//!
//! The two hex meshing strategies and the loop extraction the loft uses.

pub mod boundary_loop;
pub mod sweep;
pub mod voxel;

pub use boundary_loop::{extract_bottom_loop, extract_loop, extract_top_loop, BoundaryLoop, Extremum};
pub use sweep::{sweep_hex_mesh, sweep_hex_mesh_with, sweep_loops, LoftOptions};
pub use voxel::{voxel_fill, voxel_fill_with, GridDims, VoxelOptions};
