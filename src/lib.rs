//! Catalog-entry star type for a sky-map builder.
//!
//! A [`Star`] records one parsed catalog row — entry id, right ascension,
//! declination, apparent magnitude — and offers two things on top of the raw
//! fields: a projection onto the unit sphere in an equatorial Cartesian frame
//! parameterized by local sidereal time, and a total order tuned for render
//! priority (brightest first, then by position). Catalog parsing and image
//! rasterization live in the consuming crates; this one is the shared value
//! type between them.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`star`] | [`Star`]: validated construction, projection, render-priority ordering |
//! | [`vector3`] | [`Vector3`] Cartesian result type and the renderer axis contract |
//! | [`errors`] | [`CatalogError`], [`CatalogResult`] |
//! | [`constants`] | Angular constants (`PI`, `HALF_PI`, `TWOPI`, degree conversions) |
//!
//! # Quick Start
//!
//! ```
//! use starmap_core::Star;
//! use std::collections::BTreeSet;
//!
//! let mut sky: BTreeSet<Star> = BTreeSet::new();
//! sky.insert(Star::from_degrees(32349, 101.287, -16.716, -1.46)?); // Sirius
//! sky.insert(Star::from_degrees(91262, 279.235, 38.784, 0.03)?); // Vega
//!
//! // Reverse iteration walks render priority: brightest star first.
//! let sidereal_time = 1.25;
//! for star in sky.iter().rev() {
//!     let v = star.equatorial_location(sidereal_time)?;
//!     assert!((v.magnitude() - 1.0).abs() < 1e-12);
//! }
//! # Ok::<(), starmap_core::CatalogError>(())
//! ```

pub mod constants;
pub mod errors;
pub mod star;
pub mod vector3;

pub use errors::{CatalogError, CatalogResult};
pub use star::Star;
pub use vector3::Vector3;
