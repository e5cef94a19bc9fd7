//! # Config Crate
//!
//! Centralized configuration constants for the hexmesh pipeline.
//! Default resolutions, tolerances, file-format codes and safety limits are
//! defined here so the meshing crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RESOLUTION, LOOP_HEIGHT_TOLERANCE};
//!
//! // Lattice cell edge length when the caller does not choose one
//! let resolution: Option<f64> = None;
//! assert_eq!(resolution.unwrap_or(DEFAULT_RESOLUTION), 0.1);
//!
//! // Vertices closer than this to the extremal height belong to the ring
//! let dz: f64 = 5e-4;
//! assert!(dz.abs() < LOOP_HEIGHT_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: Pure constants, usable from any crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
