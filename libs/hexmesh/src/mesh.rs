//! # Mesh Data Structures
//!
//! Input quad surfaces and output hexahedral cell complexes.

use glam::{DMat4, DVec3};

use crate::bounds::BoundingBox;
use crate::error::{HexMeshError, HexMeshResult};

// =============================================================================
// SURFACE MESH
// =============================================================================

/// A quad surface: vertex positions plus 4-index faces.
///
/// Quad winding is carried as loaded and never normalized.
///
/// # Example
///
/// ```rust
/// use hexmesh::SurfaceMesh;
/// use glam::DVec3;
///
/// let mut surface = SurfaceMesh::new();
/// surface.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// surface.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// surface.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// surface.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// surface.add_quad([0, 1, 2, 3]);
/// assert!(surface.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    vertices: Vec<DVec3>,
    quads: Vec<[u32; 4]>,
}

impl SurfaceMesh {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface from existing vertex and quad arrays.
    pub fn from_parts(vertices: Vec<DVec3>, quads: Vec<[u32; 4]>) -> Self {
        Self { vertices, quads }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of quads.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Returns true if the surface has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a quad by vertex indices.
    pub fn add_quad(&mut self, quad: [u32; 4]) {
        self.quads.push(quad);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the quads.
    #[inline]
    pub fn quads(&self) -> &[[u32; 4]] {
        &self.quads
    }

    /// Checks that every quad index resolves within the vertex array.
    pub fn validate(&self) -> HexMeshResult<()> {
        let vertex_count = self.vertices.len();
        for (face, quad) in self.quads.iter().enumerate() {
            if let Some(bad) = quad.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(HexMeshError::invalid_topology(format!(
                    "quad {face} references vertex {bad}, surface has {vertex_count}"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// HEXAHEDRON
// =============================================================================

/// A hexahedral cell in VTK ordering.
///
/// Indices `0..4` form one quad face, `4..8` the opposite face in the same
/// rotational order; index `i` and `i + 4` are joined by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hexahedron {
    /// Corner vertex indices.
    pub indices: [u32; 8],
}

impl Hexahedron {
    /// Creates a cell from its eight corner indices.
    #[inline]
    pub fn new(indices: [u32; 8]) -> Self {
        Self { indices }
    }

    /// Builds a cell from two matching faces.
    #[inline]
    pub fn from_faces(first: [u32; 4], second: [u32; 4]) -> Self {
        Self {
            indices: [
                first[0], first[1], first[2], first[3], second[0], second[1], second[2],
                second[3],
            ],
        }
    }

    /// First face (indices 0..4).
    #[inline]
    pub fn first_face(&self) -> [u32; 4] {
        [self.indices[0], self.indices[1], self.indices[2], self.indices[3]]
    }

    /// Opposite face (indices 4..8).
    #[inline]
    pub fn second_face(&self) -> [u32; 4] {
        [self.indices[4], self.indices[5], self.indices[6], self.indices[7]]
    }

    /// Returns true if no corner index repeats.
    pub fn has_distinct_corners(&self) -> bool {
        let mut sorted = self.indices;
        sorted.sort_unstable();
        sorted.windows(2).all(|w| w[0] != w[1])
    }

    /// Returns this cell with every index shifted by `offset`.
    #[inline]
    pub fn offset(&self, offset: u32) -> Self {
        Self {
            indices: self.indices.map(|i| i + offset),
        }
    }
}

// =============================================================================
// HEX MESH
// =============================================================================

/// A hexahedral mesh: shared vertex array plus 8-index cells.
///
/// Every cell index resolves within this mesh's own vertex array; nothing
/// refers back to the surface it was generated from.
///
/// # Example
///
/// ```rust
/// use hexmesh::{HexMesh, Hexahedron};
/// use glam::DVec3;
///
/// let mut mesh = HexMesh::new();
/// for z in [0.0, 1.0] {
///     mesh.add_vertex(DVec3::new(0.0, 0.0, z));
///     mesh.add_vertex(DVec3::new(1.0, 0.0, z));
///     mesh.add_vertex(DVec3::new(1.0, 1.0, z));
///     mesh.add_vertex(DVec3::new(0.0, 1.0, z));
/// }
/// mesh.add_hex(Hexahedron::new([0, 1, 2, 3, 4, 5, 6, 7]));
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexMesh {
    vertices: Vec<DVec3>,
    hexes: Vec<Hexahedron>,
}

/// Name used by the voxelizer entry points for their output.
pub type VoxelResult = HexMesh;

impl HexMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, hex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            hexes: Vec::with_capacity(hex_count),
        }
    }

    /// Creates a mesh from existing arrays.
    pub fn from_parts(vertices: Vec<DVec3>, hexes: Vec<Hexahedron>) -> Self {
        Self { vertices, hexes }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of hexahedra.
    #[inline]
    pub fn hex_count(&self) -> usize {
        self.hexes.len()
    }

    /// Returns true if the mesh has neither vertices nor cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.hexes.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a cell.
    pub fn add_hex(&mut self, hex: Hexahedron) {
        self.hexes.push(hex);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the cells.
    #[inline]
    pub fn hexes(&self) -> &[Hexahedron] {
        &self.hexes
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the eight corner positions of a cell.
    pub fn hex_corners(&self, hex: usize) -> [DVec3; 8] {
        self.hexes[hex].indices.map(|i| self.vertex(i))
    }

    /// Consumes the mesh, returning its arrays.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<Hexahedron>) {
        (self.vertices, self.hexes)
    }

    /// Computes the axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.vertices).ok()
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Appends another mesh, re-indexing its cells past this mesh's vertices.
    pub fn merge(&mut self, other: &HexMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.hexes
            .extend(other.hexes.iter().map(|hex| hex.offset(offset)));
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All cell indices are valid
    /// - No cell repeats a corner
    pub fn validate(&self) -> HexMeshResult<()> {
        let vertex_count = self.vertices.len();
        for (cell, hex) in self.hexes.iter().enumerate() {
            if let Some(bad) = hex.indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(HexMeshError::invalid_topology(format!(
                    "hex {cell} references vertex {bad}, mesh has {vertex_count}"
                )));
            }
            if !hex.has_distinct_corners() {
                return Err(HexMeshError::invalid_topology(format!(
                    "hex {cell} repeats a corner: {:?}",
                    hex.indices
                )));
            }
        }
        Ok(())
    }
}
