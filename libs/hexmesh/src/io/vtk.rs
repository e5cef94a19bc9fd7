//! # Legacy VTK Writer
//!
//! Writes a [`HexMesh`] as an ASCII unstructured grid. Points and cells are
//! written in memory order, so downstream tools see the same indices.
//!
//! ```text
//! # vtk DataFile Version 3.0
//! Hex Mesh
//! ASCII
//! DATASET UNSTRUCTURED_GRID
//! POINTS <N> float
//! CELLS <M> <9*M>
//! CELL_TYPES <M>
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::{DEFAULT_VTK_TITLE, VTK_HEADER, VTK_HEXAHEDRON};
use log::debug;

use crate::error::{HexMeshError, HexMeshResult};
use crate::mesh::HexMesh;

/// Point and cell counts declared in a VTK file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VtkCounts {
    /// Value of the `POINTS` header.
    pub points: usize,
    /// Cell count of the `CELLS` header.
    pub cells: usize,
}

/// Writes `mesh` to `path` with the default title.
///
/// # Errors
///
/// [`HexMeshError::Io`] if the file cannot be created or written.
pub fn write_vtk(path: impl AsRef<Path>, mesh: &HexMesh) -> HexMeshResult<()> {
    write_vtk_with_title(path, mesh, DEFAULT_VTK_TITLE)
}

/// Writes `mesh` to `path` with a custom title line.
pub fn write_vtk_with_title(path: impl AsRef<Path>, mesh: &HexMesh, title: &str) -> HexMeshResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| HexMeshError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_vtk_to(&mut writer, mesh, title)
        .and_then(|()| writer.flush())
        .map_err(|e| HexMeshError::io(path, e))?;
    debug!(
        "wrote {} points, {} cells to {}",
        mesh.vertex_count(),
        mesh.hex_count(),
        path.display()
    );
    Ok(())
}

/// Writes `mesh` in legacy VTK format to any writer.
///
/// Positions are narrowed to `f32` to match the `float` point type.
///
/// # Example
///
/// ```rust
/// use hexmesh::io::write_vtk_to;
/// use hexmesh::HexMesh;
///
/// let mut out = Vec::new();
/// write_vtk_to(&mut out, &HexMesh::new(), "empty").unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("POINTS 0 float"));
/// ```
pub fn write_vtk_to<W: Write>(writer: &mut W, mesh: &HexMesh, title: &str) -> std::io::Result<()> {
    writeln!(writer, "{VTK_HEADER}")?;
    // Title must be a single line
    writeln!(writer, "{}", title.lines().next().unwrap_or(DEFAULT_VTK_TITLE))?;
    writeln!(writer, "ASCII")?;
    writeln!(writer, "DATASET UNSTRUCTURED_GRID")?;

    writeln!(writer, "POINTS {} float", mesh.vertex_count())?;
    for v in mesh.vertices() {
        writeln!(writer, "{} {} {}", v.x as f32, v.y as f32, v.z as f32)?;
    }

    let cells = mesh.hex_count();
    writeln!(writer, "CELLS {} {}", cells, 9 * cells)?;
    for hex in mesh.hexes() {
        write!(writer, "8")?;
        for i in &hex.indices {
            write!(writer, " {i}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "CELL_TYPES {cells}")?;
    for _ in 0..cells {
        writeln!(writer, "{VTK_HEXAHEDRON}")?;
    }
    Ok(())
}

/// Reads the `POINTS` and `CELLS` counts back from VTK text.
///
/// Returns `None` if either header is missing or malformed.
pub fn read_vtk_counts(text: &str) -> Option<VtkCounts> {
    let mut points = None;
    let mut cells = None;
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("POINTS") => points = tokens.next().and_then(|t| t.parse().ok()),
            Some("CELLS") => cells = tokens.next().and_then(|t| t.parse().ok()),
            _ => {}
        }
    }
    Some(VtkCounts {
        points: points?,
        cells: cells?,
    })
}
