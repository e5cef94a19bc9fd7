//! # Spatial Key
//!
//! Integer lattice coordinates usable as hash-map keys. The lattice
//! voxelizer keys cell corners by their grid coordinate to weld coincident
//! vertices.
//!
//! ## Example
//!
//! ```rust
//! use hexmesh::SpatialKey;
//! use glam::DVec3;
//!
//! let a = SpatialKey::new(1, 2, 3);
//! let b = SpatialKey::from_position(DVec3::new(0.1, 0.2, 0.3), DVec3::ZERO, 0.1);
//! assert_eq!(a, b);
//! ```

use std::hash::{Hash, Hasher};

use glam::DVec3;

/// Large primes for the coordinate hash (Teschner et al. 2003).
const HASH_PRIMES: [i64; 3] = [73_856_093, 19_349_663, 83_492_791];

/// 3D integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpatialKey {
    /// Grid index along x.
    pub x: i64,
    /// Grid index along y.
    pub y: i64,
    /// Grid index along z.
    pub z: i64,
}

impl SpatialKey {
    /// Creates a key from grid indices.
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Snaps a position to the nearest grid node of spacing `cell_size`
    /// anchored at `origin`.
    ///
    /// A corner computed as `origin + k * cell_size` maps back to `k` even
    /// with float noise.
    pub fn from_position(pos: DVec3, origin: DVec3, cell_size: f64) -> Self {
        let g = ((pos - origin) / cell_size).round();
        Self {
            x: g.x as i64,
            y: g.y as i64,
            z: g.z as i64,
        }
    }

    /// Returns the key displaced by a grid offset.
    #[inline]
    pub const fn offset(self, dx: i64, dy: i64, dz: i64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// XOR of the coordinates multiplied by large primes.
    #[inline]
    pub fn spatial_hash(&self) -> u64 {
        let hx = self.x.wrapping_mul(HASH_PRIMES[0]);
        let hy = self.y.wrapping_mul(HASH_PRIMES[1]);
        let hz = self.z.wrapping_mul(HASH_PRIMES[2]);
        (hx ^ hy ^ hz) as u64
    }
}

impl Hash for SpatialKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.spatial_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_from_position_absorbs_float_noise() {
        let origin = DVec3::new(-0.5, 0.25, 10.0);
        let r = 0.1;
        let corner = origin + DVec3::new(3.0, 7.0, 2.0) * r;
        let noisy = corner + DVec3::splat(1e-12);
        assert_eq!(SpatialKey::from_position(corner, origin, r), SpatialKey::new(3, 7, 2));
        assert_eq!(SpatialKey::from_position(noisy, origin, r), SpatialKey::new(3, 7, 2));
    }

    #[test]
    fn test_offset() {
        assert_eq!(SpatialKey::new(1, 1, 1).offset(1, 0, -1), SpatialKey::new(2, 1, 0));
    }

    #[test]
    fn test_hash_is_consistent_with_eq() {
        let a = SpatialKey::new(4, -2, 9);
        let b = SpatialKey::new(4, -2, 9);
        assert_eq!(a.spatial_hash(), b.spatial_hash());
    }

    #[test]
    fn test_distinct_keys_in_map() {
        let mut map = HashMap::new();
        for x in 0..5 {
            for y in 0..5 {
                for z in 0..5 {
                    map.insert(SpatialKey::new(x, y, z), (x, y, z));
                }
            }
        }
        assert_eq!(map.len(), 125);
        assert_eq!(map[&SpatialKey::new(2, 3, 4)], (2, 3, 4));
    }

    #[test]
    fn test_hash_has_no_collisions_on_small_grid() {
        let hashes: HashSet<u64> = (0..8)
            .flat_map(|x| (0..8).flat_map(move |y| (0..8).map(move |z| SpatialKey::new(x, y, z))))
            .map(|k| k.spatial_hash())
            .collect();
        assert_eq!(hashes.len(), 512);
    }
}
