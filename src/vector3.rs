//! Cartesian result type for the equatorial projection.
//!
//! [`Star::equatorial_location`](crate::Star::equatorial_location) produces a
//! unit vector in a right-handed frame tied to the observer's local meridian:
//!
//! - **+X**: intersection of the local meridian with the celestial equator
//! - **+Y**: east horizon, on the celestial equator
//! - **+Z**: north celestial pole
//!
//! This axis convention is a contract with the renderer consuming the
//! projection and must not be altered.

use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are public for direct access by the render path.
///
/// ```
/// use starmap_core::Vector3;
///
/// let v = Vector3::new(0.6, 0.8, 0.0);
/// assert!((v.magnitude() - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    ///
    /// In the projection frame, this points at the meridian's crossing of the
    /// celestial equator.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    ///
    /// In the projection frame, this points to the east horizon on the
    /// celestial equator.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    ///
    /// In the projection frame, this points toward the north celestial pole.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    ///
    /// For a projected star position, this returns 1.0 to within
    /// double-precision tolerance.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns the squared magnitude.
    ///
    /// Faster than [`magnitude`](Self::magnitude) when you only need to
    /// compare lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the dot product with another vector.
    ///
    /// For unit vectors this equals the cosine of the angle between them, so
    /// it measures angular separation between projected star positions.
    ///
    /// ```
    /// use starmap_core::Vector3;
    ///
    /// assert_eq!(Vector3::x_axis().dot(&Vector3::y_axis()), 0.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
