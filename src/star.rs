//! The catalog-entry star type: validated construction, equatorial
//! projection, and the render-priority ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::{DEG_TO_RAD, HALF_PI, RAD_TO_DEG, TWOPI};
use crate::errors::{CatalogError, CatalogResult};
use crate::vector3::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single star from a parsed catalog row.
///
/// Immutable after construction: the catalog loader builds one `Star` per
/// row, the map builder inserts them into an ordered collection, and the
/// renderer projects them with [`equatorial_location`](Star::equatorial_location).
/// Angles are stored in radians; [`from_degrees`](Star::from_degrees)
/// converts at the API edge.
///
/// Ordering, equality, and hashing are content-based on
/// `(apparent_magnitude, right_ascension, declination)`. The ordering is
/// inverted on every key so that the greatest element is the most visually
/// prominent: brightest first (smallest magnitude), then lowest RA, then
/// lowest Dec. `entry_id` is identity metadata for diagnostics and catalog
/// back-reference; it participates in neither ordering nor equality, so two
/// catalog rows with identical content compare equal.
///
/// ```
/// use starmap_core::Star;
///
/// let sirius = Star::from_degrees(32349, 101.287, -16.716, -1.46)?;
/// let vega = Star::from_degrees(91262, 279.235, 38.784, 0.03)?;
/// assert!(sirius > vega); // brighter ranks greater
/// # Ok::<(), starmap_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Star {
    entry_id: u32,
    right_ascension: f64,
    declination: f64,
    apparent_magnitude: f64,
}

impl Star {
    /// Creates a star from a catalog entry id, equatorial coordinates in
    /// radians, and an apparent magnitude.
    ///
    /// Preconditions: `entry_id >= 1`, `0 <= right_ascension < 2π`,
    /// `-π/2 <= declination <= π/2`, both coordinates finite. Out-of-range
    /// right ascension is rejected, not normalized. `apparent_magnitude` is
    /// unrestricted.
    pub fn new(
        entry_id: u32,
        right_ascension: f64,
        declination: f64,
        apparent_magnitude: f64,
    ) -> CatalogResult<Self> {
        let entry_id = validate_entry_id(entry_id)?;
        let right_ascension = validate_right_ascension(right_ascension)?;
        let declination = validate_declination(declination)?;

        Ok(Self {
            entry_id,
            right_ascension,
            declination,
            apparent_magnitude,
        })
    }

    /// Creates a star from coordinates in degrees, applying the same
    /// validation as [`new`](Star::new).
    pub fn from_degrees(
        entry_id: u32,
        ra_deg: f64,
        dec_deg: f64,
        apparent_magnitude: f64,
    ) -> CatalogResult<Self> {
        Self::new(
            entry_id,
            ra_deg * DEG_TO_RAD,
            dec_deg * DEG_TO_RAD,
            apparent_magnitude,
        )
    }

    /// Catalog identifier for this entry.
    #[inline]
    pub fn entry_id(&self) -> u32 {
        self.entry_id
    }

    /// Right ascension in radians, in `[0, 2π)`.
    #[inline]
    pub fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in radians, in `[-π/2, π/2]`.
    #[inline]
    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// Apparent magnitude. Smaller values denote brighter stars.
    #[inline]
    pub fn apparent_magnitude(&self) -> f64 {
        self.apparent_magnitude
    }

    /// Projects the star onto the unit sphere for a given local sidereal
    /// time, in radians within `[0, 2π)`.
    ///
    /// The frame is right-handed Cartesian: +X at the intersection of the
    /// local meridian with the celestial equator, +Y at the east horizon on
    /// the equator, +Z at the north celestial pole. With hour angle
    /// `H = sidereal_time - right_ascension`:
    ///
    /// ```text
    /// x = cos(dec) · cos(H)
    /// y = -cos(dec) · sin(H)
    /// z = sin(dec)
    /// ```
    ///
    /// Both operands of `H` are validated into `[0, 2π)`, so the difference
    /// is bounded in `(-2π, 2π)` and needs no modular reduction before the
    /// trig calls.
    ///
    /// ```
    /// use starmap_core::Star;
    ///
    /// // A star on the equator, observed when the sidereal clock reads its
    /// // RA, sits exactly on the meridian: +X.
    /// let star = Star::new(1, 0.0, 0.0, 2.0)?;
    /// let v = star.equatorial_location(0.0)?;
    /// assert_eq!(v.to_array(), [1.0, 0.0, 0.0]);
    /// # Ok::<(), starmap_core::CatalogError>(())
    /// ```
    pub fn equatorial_location(&self, sidereal_time: f64) -> CatalogResult<Vector3> {
        let sidereal_time = validate_sidereal_time(sidereal_time)?;

        let hour_angle = sidereal_time - self.right_ascension;
        let (sin_h, cos_h) = libm::sincos(hour_angle);
        let (sin_dec, cos_dec) = libm::sincos(self.declination);

        let location = Vector3::new(cos_dec * cos_h, -cos_dec * sin_h, sin_dec);
        debug_assert!((location.magnitude() - 1.0).abs() <= 1e-12);

        Ok(location)
    }
}

/// Render-priority order: the greatest star is the most visually prominent.
///
/// Every key is inverted, so a descending sort (or reverse iteration of a
/// `BTreeSet`) yields brightest first, then lowest RA, then lowest Dec.
/// `entry_id` is ignored. A NaN key falls through to the next key rather
/// than panicking.
impl Ord for Star {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .apparent_magnitude
            .partial_cmp(&self.apparent_magnitude)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .right_ascension
                    .partial_cmp(&self.right_ascension)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| {
                other
                    .declination
                    .partial_cmp(&self.declination)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl PartialOrd for Star {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Star {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Star {}

/// Hashes the content triple, consistent with [`PartialEq`]: the bit
/// patterns of magnitude, RA, and Dec are fed to the hasher, with `-0.0`
/// folded onto `+0.0` so the two zero encodings (which compare equal) hash
/// alike. `entry_id` is excluded.
impl Hash for Star {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.apparent_magnitude).hash(state);
        canonical_bits(self.right_ascension).hash(state);
        canonical_bits(self.declination).hash(state);
    }
}

#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Star #{} (RA={:.6}°, Dec={:.6}°, mag={:.2})",
            self.entry_id,
            self.right_ascension * RAD_TO_DEG,
            self.declination * RAD_TO_DEG,
            self.apparent_magnitude
        )
    }
}

fn validate_entry_id(entry_id: u32) -> CatalogResult<u32> {
    if entry_id >= 1 {
        return Ok(entry_id);
    }

    Err(CatalogError::invalid_entry_id(format!(
        "entry id {} below minimum 1",
        entry_id
    )))
}

fn validate_right_ascension(rad: f64) -> CatalogResult<f64> {
    if !rad.is_finite() {
        return Err(CatalogError::invalid_coordinate("RA not finite"));
    }

    if (0.0..TWOPI).contains(&rad) {
        return Ok(rad);
    }

    Err(CatalogError::invalid_coordinate(format!(
        "RA {:.6} rad out of range [0, 2π)",
        rad
    )))
}

fn validate_declination(rad: f64) -> CatalogResult<f64> {
    if !rad.is_finite() {
        return Err(CatalogError::invalid_coordinate("Dec not finite"));
    }

    if (-HALF_PI..=HALF_PI).contains(&rad) {
        return Ok(rad);
    }

    Err(CatalogError::invalid_coordinate(format!(
        "Dec {:.2}° out of range [-90°, +90°]",
        rad * RAD_TO_DEG
    )))
}

fn validate_sidereal_time(rad: f64) -> CatalogResult<f64> {
    if !rad.is_finite() {
        return Err(CatalogError::invalid_sidereal_time("LST not finite"));
    }

    if (0.0..TWOPI).contains(&rad) {
        return Ok(rad);
    }

    Err(CatalogError::invalid_sidereal_time(format!(
        "LST {:.6} rad out of range [0, 2π)",
        rad
    )))
}
