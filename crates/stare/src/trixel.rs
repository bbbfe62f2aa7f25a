//! Spherical trixel geometry.
//!
//! The unit sphere is covered by the eight faces of an inscribed
//! octahedron. Each spherical triangle (trixel) splits into four children
//! by its normalized edge midpoints; walking that hierarchy to a bounded
//! depth yields a 2-bit child code per level.

/// Minimal 3-vector on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point on the unit sphere from geodetic latitude/longitude in radians.
    pub(crate) fn from_lat_lon_rad(lat: f64, lon: f64) -> Self {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    fn normalize(self) -> Self {
        let len = self.dot(self).sqrt();
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Normalized midpoint of the great-circle arc between two points.
    fn midpoint(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z).normalize()
    }
}

/// A spherical triangle, vertices counter-clockwise seen from outside.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Trixel {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
}

impl Trixel {
    /// Root face containing `p`, selected by coordinate signs, plus its id.
    ///
    /// Points exactly on a coordinate plane count as the non-negative
    /// octant, so the selection is total and deterministic.
    pub(crate) fn root_for(p: Vec3) -> (u8, Self) {
        let sx = if p.x < 0.0 { -1.0 } else { 1.0 };
        let sy = if p.y < 0.0 { -1.0 } else { 1.0 };
        let sz = if p.z < 0.0 { -1.0 } else { 1.0 };

        let face = u8::from(p.x < 0.0) | (u8::from(p.y < 0.0) << 1) | (u8::from(p.z < 0.0) << 2);

        let a = Vec3::new(sx, 0.0, 0.0);
        let b = Vec3::new(0.0, sy, 0.0);
        let c = Vec3::new(0.0, 0.0, sz);

        // An odd number of negative axes mirrors the triangle; swap two
        // vertices to keep the outward counter-clockwise orientation.
        let trixel = if sx * sy * sz < 0.0 {
            Self { v0: a, v1: c, v2: b }
        } else {
            Self { v0: a, v1: b, v2: c }
        };
        (face, trixel)
    }

    fn contains(&self, p: Vec3) -> bool {
        self.v0.cross(self.v1).dot(p) >= 0.0
            && self.v1.cross(self.v2).dot(p) >= 0.0
            && self.v2.cross(self.v0).dot(p) >= 0.0
    }

    /// Descend one level towards `p`, returning the 2-bit child code and
    /// the child trixel.
    ///
    /// Children 0..2 keep one parent vertex each; child 3 is the central
    /// midpoint triangle. The first containing child in this fixed order
    /// wins, which resolves shared-edge ties deterministically.
    pub(crate) fn descend(&self, p: Vec3) -> (u8, Self) {
        let w0 = self.v1.midpoint(self.v2);
        let w1 = self.v0.midpoint(self.v2);
        let w2 = self.v0.midpoint(self.v1);

        let children = [
            Self { v0: self.v0, v1: w2, v2: w1 },
            Self { v0: self.v1, v1: w0, v2: w2 },
            Self { v0: self.v2, v1: w1, v2: w0 },
            Self { v0: w0, v1: w1, v2: w2 },
        ];

        for (code, child) in children.iter().enumerate().take(3) {
            if child.contains(p) {
                return (code as u8, *child);
            }
        }
        (3, children[3])
    }
}
