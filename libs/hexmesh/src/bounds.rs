//! # Bounding Box
//!
//! Axis-aligned bounds of a point set.

use glam::DVec3;

use crate::error::{HexMeshError, HexMeshResult};

/// Axis-aligned bounding box given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Component-wise minimum.
    pub min: DVec3,
    /// Component-wise maximum.
    pub max: DVec3,
}

impl BoundingBox {
    /// Computes the bounds of a non-empty point set.
    ///
    /// # Errors
    ///
    /// Returns [`HexMeshError::EmptyInput`] when `points` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hexmesh::BoundingBox;
    /// use glam::DVec3;
    ///
    /// let bbox = BoundingBox::from_points(&[
    ///     DVec3::new(-1.0, 2.0, 0.0),
    ///     DVec3::new(3.0, -2.0, 5.0),
    /// ]).unwrap();
    /// assert_eq!(bbox.min, DVec3::new(-1.0, -2.0, 0.0));
    /// assert_eq!(bbox.max, DVec3::new(3.0, 2.0, 5.0));
    /// ```
    pub fn from_points(points: &[DVec3]) -> HexMeshResult<Self> {
        let (first, rest) = points.split_first().ok_or(HexMeshError::EmptyInput {
            operation: "bounding_box",
        })?;

        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }

        Ok(Self { min, max })
    }

    /// Size along each axis.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns true if `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}
