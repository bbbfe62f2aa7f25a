//! STARE-style hierarchical spatial indexing.
//!
//! Maps a geodetic (latitude, longitude) pair in degrees to a single
//! unsigned 64-bit index encoding the point's position within a
//! recursively subdivided spherical triangle hierarchy. Indices built at
//! the same configuration are directly comparable: a shallower build
//! level produces a bit-prefix of the deeper one, so approximate spatial
//! comparison reduces to integer operations.
//!
//! # Index layout
//!
//! ```text
//! bit 63..62  unused (zero)
//! bit 61..59  root octahedron face (0..8)
//! bit 58..5   2 bits per subdivision level, most significant first;
//!             levels beyond the build level are zero
//! bit  4..0   target resolution level
//! ```
//!
//! Encoding is pure: no I/O, no state beyond the immutable configuration.

mod trixel;

use serde::{Deserialize, Serialize};

use trixel::{Trixel, Vec3};

/// Deepest supported subdivision level; 3 face bits + 2x27 location bits
/// + 5 resolution bits fit in 62 bits.
pub const MAX_BUILD_LEVEL: u8 = 27;

/// Immutable encoder parameters, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Resolution level stamped into the low bits of every index.
    pub target_resolution: u8,
    /// Subdivision depth used when locating a point.
    pub build_level: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            target_resolution: MAX_BUILD_LEVEL,
            build_level: MAX_BUILD_LEVEL,
        }
    }
}

/// Pure coordinate-to-index encoder.
///
/// `Encoder` is `Send + Sync` and safe to share across worker threads;
/// [`encode`](Encoder::encode) is deterministic for a given configuration.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    target_resolution: u8,
    build_level: u8,
}

impl Encoder {
    /// Build an encoder, clamping both levels to [`MAX_BUILD_LEVEL`].
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            target_resolution: config.target_resolution.min(MAX_BUILD_LEVEL),
            build_level: config.build_level.min(MAX_BUILD_LEVEL),
        }
    }

    /// Encode a geodetic point, degrees in, 64-bit spatial index out.
    ///
    /// Longitude is normalized into [-180, 180); latitude is expected in
    /// [-90, 90] and the poles resolve deterministically.
    pub fn encode(&self, lat: f64, lon: f64) -> u64 {
        let lon = normalize_lon(lon);
        let p = Vec3::from_lat_lon_rad(lat.to_radians(), lon.to_radians());

        let (face, mut trixel) = Trixel::root_for(p);
        let mut location = u64::from(face);
        for _ in 0..self.build_level {
            let (code, child) = trixel.descend(p);
            location = (location << 2) | u64::from(code);
            trixel = child;
        }

        // Left-align the location field so indices from different build
        // levels stay prefix-comparable, then stamp the resolution.
        let pad = 2 * u32::from(MAX_BUILD_LEVEL - self.build_level);
        (location << (5 + pad)) | u64::from(self.target_resolution)
    }
}

/// Normalize a longitude in degrees into [-180, 180).
fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(build_level: u8) -> Encoder {
        Encoder::new(EncoderConfig {
            target_resolution: 27,
            build_level,
        })
    }

    #[test]
    fn encode_is_deterministic() {
        let enc = encoder(27);
        let a = enc.encode(38.0, -76.0);
        let b = enc.encode(38.0, -76.0);
        assert_eq!(a, b);
    }

    #[test]
    fn resolution_occupies_the_low_five_bits() {
        let enc = Encoder::new(EncoderConfig {
            target_resolution: 11,
            build_level: 27,
        });
        assert_eq!(enc.encode(38.0, -76.0) & 0x1f, 11);
    }

    #[test]
    fn face_bits_follow_the_octant() {
        let enc = encoder(27);
        // (+x, +y, +z) octant.
        assert_eq!((enc.encode(45.0, 45.0) >> 59) & 0x7, 0);
        // Chesapeake Bay: x > 0, y < 0, z > 0.
        assert_eq!((enc.encode(38.0, -76.0) >> 59) & 0x7, 2);
        // Southern hemisphere sets the z bit.
        assert_eq!((enc.encode(-45.0, 45.0) >> 59) & 0x7, 4);
    }

    #[test]
    fn shallow_build_is_a_prefix_of_deep_build() {
        let shallow = encoder(8).encode(38.0, -76.0);
        let deep = encoder(27).encode(38.0, -76.0);

        // Compare the face + 8-level location fields.
        let field_bits = 3 + 2 * 8;
        assert_eq!(shallow >> (64 - 2 - field_bits), deep >> (64 - 2 - field_bits));
    }

    #[test]
    fn distinct_regions_produce_distinct_indices() {
        let enc = encoder(27);
        assert_ne!(enc.encode(38.0, -76.0), enc.encode(-33.9, 151.2));
        assert_ne!(enc.encode(38.0, -76.0), enc.encode(38.5, -76.0));
    }

    #[test]
    fn longitude_wraps_to_the_same_index() {
        let enc = encoder(27);
        assert_eq!(enc.encode(10.0, 190.0), enc.encode(10.0, -170.0));
        assert_eq!(enc.encode(10.0, 540.0), enc.encode(10.0, 180.0));
    }

    #[test]
    fn poles_encode_without_panicking() {
        let enc = encoder(27);
        assert_eq!(enc.encode(90.0, 0.0), enc.encode(90.0, 0.0));
        assert_eq!(enc.encode(-90.0, 12.0), enc.encode(-90.0, 12.0));
    }

    #[test]
    fn high_pad_bits_stay_clear() {
        let enc = encoder(27);
        assert_eq!(enc.encode(0.1, 0.1) >> 62, 0);
    }
}
