//! # Error Types
//!
//! Error types for hex meshing operations. Invalid inputs are rejected with
//! an explicit error before any geometry is produced.
//!
//! ## Error Policy
//!
//! - NO degenerate output when preconditions fail
//! - Validation happens before allocation
//! - Errors include the offending values for debugging

use std::path::PathBuf;

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during hex mesh generation.
///
/// ## Example
///
/// ```rust
/// use hexmesh::{voxel_fill, HexMeshError, SurfaceMesh};
/// use glam::DVec3;
///
/// let surface = SurfaceMesh::from_parts(vec![DVec3::ZERO, DVec3::ONE], Vec::new());
/// match voxel_fill(&surface, 0.0) {
///     Err(HexMeshError::InvalidResolution(r)) => assert_eq!(r, 0.0),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum HexMeshError {
    /// Lattice resolution is zero, negative or not finite.
    #[error("Invalid resolution: {0} (must be positive and finite)")]
    InvalidResolution(f64),

    /// Loft requested with zero layers.
    #[error("Invalid layer count: {0} (must be >= 1)")]
    InvalidLayers(u32),

    /// Ring tolerance is zero, negative or not finite.
    #[error("Invalid loop tolerance: {0} (must be positive and finite)")]
    InvalidTolerance(f64),

    /// Uniform transform would collapse or poison the mesh.
    #[error("Invalid transform: {message}")]
    InvalidTransform {
        /// What is wrong with the transform
        message: String,
    },

    /// An operation received an empty point set it cannot work with.
    #[error("Empty input: {operation} requires at least one vertex")]
    EmptyInput {
        /// Name of the operation that was called
        operation: &'static str,
    },

    /// Top and bottom loops differ in vertex count.
    #[error("Loop size mismatch: top has {top} vertices, bottom has {bottom}")]
    LoopMismatch {
        /// Top loop length
        top: usize,
        /// Bottom loop length
        bottom: usize,
    },

    /// Loop has too few positions to form hexahedra.
    #[error("Loop too short: {len} vertices (min: {min})")]
    LoopTooShort {
        /// Loop length
        len: usize,
        /// Required minimum
        min: usize,
    },

    /// Index references that do not resolve.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Description of the broken reference
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Rejected configuration value.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File could not be written or read.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl HexMeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an invalid transform error.
    pub fn invalid_transform(message: impl Into<String>) -> Self {
        Self::InvalidTransform {
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the file path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hex meshing operations.
pub type HexMeshResult<T> = Result<T, HexMeshError>;

// =============================================================================
// TESTS
// =============================================================================
