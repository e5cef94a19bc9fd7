//! # File Adapters
//!
//! Restricted OBJ input and legacy VTK output.

mod obj;
mod vtk;

pub use obj::{load_surface_obj, parse_obj};
pub use vtk::{read_vtk_counts, write_vtk, write_vtk_to, write_vtk_with_title, VtkCounts};
