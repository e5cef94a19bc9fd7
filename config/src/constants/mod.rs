//! # Configuration Constants
//!
//! Centralized constants for the hexmesh pipeline. Each public item documents
//! its purpose and provides a minimal usage example so that downstream crates
//! can remain declarative and avoid scattering literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Meshing**: Default lattice resolution, layer count, loop tolerance
//! - **Format**: Legacy VTK header and cell type codes
//! - **Limits**: Maximum sizes for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// MESHING CONSTANTS
// =============================================================================

/// Default lattice cell edge length used by the voxel fill.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// let extent = 1.0;
/// let cells = (extent / DEFAULT_RESOLUTION + 1e-9).floor() as usize;
/// assert_eq!(cells, 10);
/// ```
pub const DEFAULT_RESOLUTION: f64 = 0.1;

/// Default number of layers between the top and bottom loops of a loft.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_LAYERS;
/// assert!(DEFAULT_LAYERS >= 1);
/// ```
pub const DEFAULT_LAYERS: u32 = 10;

/// Absolute height tolerance for collecting the vertices of an extremal ring.
///
/// A vertex belongs to the top (bottom) ring when its z coordinate lies
/// strictly within this distance of the maximum (minimum) z.
///
/// # Example
///
/// ```rust
/// use config::constants::LOOP_HEIGHT_TOLERANCE;
///
/// let z_max = 1.0;
/// let z = 0.9995;
/// assert!((z - z_max as f64).abs() < LOOP_HEIGHT_TOLERANCE);
/// ```
pub const LOOP_HEIGHT_TOLERANCE: f64 = 1e-3;

/// Minimum number of loop positions a loft can stitch into hexahedra.
///
/// Each cell spans four consecutive loop positions per level, so shorter
/// loops cannot produce eight distinct corners.
pub const MIN_LOOP_VERTICES: usize = 4;

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// First line of every legacy VTK file written by the pipeline.
pub const VTK_HEADER: &str = "# vtk DataFile Version 3.0";

/// Title line written when the caller does not provide one.
pub const DEFAULT_VTK_TITLE: &str = "Hex Mesh";

/// VTK cell type code for a linear hexahedron (`VTK_HEXAHEDRON`).
///
/// # Example
///
/// ```rust
/// use config::constants::VTK_HEXAHEDRON;
/// assert_eq!(VTK_HEXAHEDRON, 12);
/// ```
pub const VTK_HEXAHEDRON: u8 = 12;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated hex mesh.
///
/// Safety limit to prevent memory exhaustion from a tiny lattice resolution.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 50_000_000;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of the numeric settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.resolution > 0.0);
/// assert!(config.loop_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Lattice cell edge length.
    pub resolution: f64,
    /// Height tolerance for extremal ring collection.
    pub loop_tolerance: f64,
    /// Number of loft layers.
    pub layers: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(0.25, 1.0e-4, 4).expect("valid config");
    /// assert_eq!(cfg.layers, 4);
    /// ```
    pub fn new(resolution: f64, loop_tolerance: f64, layers: u32) -> Result<Self, ConfigError> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        if !(loop_tolerance.is_finite() && loop_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(loop_tolerance));
        }
        if layers == 0 {
            return Err(ConfigError::InvalidLayers(layers));
        }
        Ok(Self {
            resolution,
            loop_tolerance,
            layers,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            loop_tolerance: LOOP_HEIGHT_TOLERANCE,
            layers: DEFAULT_LAYERS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the lattice resolution is zero, negative or not finite.
    InvalidResolution(f64),
    /// Raised when the loop tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when a loft is requested with zero layers.
    InvalidLayers(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be positive and finite: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "loop tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidLayers(value) => {
                write!(f, "layers must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Number of whole cells of size `resolution` that fit in `extent`.
///
/// The fractional remainder beyond the last whole cell is dropped, matching
/// a truncating integer conversion. A ratio within [`EPSILON`] of an integer
/// counts as that integer, so `0.3 / 0.1` gives 3 cells rather than 2.
/// Non-positive extents give zero cells; extents too large for `usize`
/// saturate at `usize::MAX`.
///
/// # Example
///
/// ```rust
/// use config::constants::whole_cells;
///
/// assert_eq!(whole_cells(1.0, 0.25), 4);
/// assert_eq!(whole_cells(1.1, 0.25), 4);
/// assert_eq!(whole_cells(0.3, 0.1), 3);
/// assert_eq!(whole_cells(0.0, 0.25), 0);
/// ```
#[inline]
pub fn whole_cells(extent: f64, resolution: f64) -> usize {
    let ratio = extent / resolution;
    let nearest = ratio.round();
    let cells = if approx_equal(ratio, nearest) {
        nearest
    } else {
        ratio.floor()
    };
    if cells.is_finite() && cells > 0.0 {
        cells as usize
    } else {
        0
    }
}
