//! # Uniform Transform
//!
//! Optional post-transform applied to generated meshes: uniform scale about
//! the origin followed by a translation.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{HexMeshError, HexMeshResult};
use crate::mesh::HexMesh;

/// Uniform scale then translate.
///
/// # Example
///
/// ```rust
/// use hexmesh::UniformTransform;
/// use glam::DVec3;
///
/// let t = UniformTransform::new(10.0, DVec3::splat(100.0)).unwrap();
/// assert_eq!(t.apply_point(DVec3::ONE), DVec3::splat(110.0));
/// assert!(UniformTransform::default().is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniformTransform {
    /// Scale factor applied to every coordinate.
    pub scale: f64,
    /// Offset added after scaling.
    pub translation: DVec3,
}

impl Default for UniformTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl UniformTransform {
    /// The transform that leaves every point in place.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: DVec3::ZERO,
    };

    /// Creates a validated transform.
    ///
    /// # Errors
    ///
    /// Fails when the scale is zero or any component is not finite.
    pub fn new(scale: f64, translation: DVec3) -> HexMeshResult<Self> {
        let transform = Self { scale, translation };
        transform.validate()?;
        Ok(transform)
    }

    /// Checks that the transform keeps geometry finite and non-degenerate.
    pub fn validate(&self) -> HexMeshResult<()> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(HexMeshError::invalid_transform(format!(
                "scale must be finite and non-zero, got {}",
                self.scale
            )));
        }
        if !self.translation.is_finite() {
            return Err(HexMeshError::invalid_transform(format!(
                "translation must be finite, got {}",
                self.translation
            )));
        }
        Ok(())
    }

    /// Returns true when applying the transform is a no-op.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Matrix form: `T * S`.
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_translation(self.translation) * DMat4::from_scale(DVec3::splat(self.scale))
    }

    /// Transforms one point.
    #[inline]
    pub fn apply_point(&self, p: DVec3) -> DVec3 {
        p * self.scale + self.translation
    }

    /// Transforms every vertex of `mesh` in place.
    pub fn apply(&self, mesh: &mut HexMesh) {
        if self.is_identity() {
            return;
        }
        mesh.transform(&self.to_matrix());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_default() {
        let t = UniformTransform::default();
        assert!(t.is_identity());
        assert_eq!(t.apply_point(DVec3::new(1.0, -2.0, 3.0)), DVec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_matrix_matches_point_form() {
        let t = UniformTransform::new(2.5, DVec3::new(1.0, -4.0, 0.5)).unwrap();
        let p = DVec3::new(0.3, 0.7, -1.1);
        let via_matrix = t.to_matrix().transform_point3(p);
        let direct = t.apply_point(p);
        assert_relative_eq!(via_matrix.x, direct.x, epsilon = 1e-12);
        assert_relative_eq!(via_matrix.y, direct.y, epsilon = 1e-12);
        assert_relative_eq!(via_matrix.z, direct.z, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_degenerate() {
        assert!(UniformTransform::new(0.0, DVec3::ZERO).is_err());
        assert!(UniformTransform::new(f64::NAN, DVec3::ZERO).is_err());
        assert!(UniformTransform::new(1.0, DVec3::new(f64::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_apply_to_mesh() {
        let mut mesh = HexMesh::new();
        mesh.add_vertex(DVec3::ONE);
        UniformTransform::new(10.0, DVec3::splat(100.0))
            .unwrap()
            .apply(&mut mesh);
        assert_relative_eq!(mesh.vertex(0).x, 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_deserialize_partial() {
        let t: UniformTransform = serde_json::from_str(r#"{ "scale": 10.0 }"#).unwrap();
        assert_eq!(t.scale, 10.0);
        assert_eq!(t.translation, DVec3::ZERO);
    }
}
