//! Basic geographic value types and the planar metric configuration.
//!
//! - `GeoCfg`: centralizes the km-per-degree scale and containment slack.
//! - `Point`: WGS-84 lat/lng pair, compared by coordinate.
//! - `Circle`: center + radius in kilometres.
//!
//! The metric here is a deliberate planar approximation: Euclidean
//! distance in degrees scaled by a constant kilometres-per-degree
//! factor. It is accurate at mid latitudes over short ranges and is NOT
//! geodesic (haversine) distance. Callers that need a different scale
//! inject it through `GeoCfg` rather than patching a literal.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kilometres per degree of arc used by the default configuration.
pub const KM_PER_DEG: f64 = 111.0;

/// Radius applied when a circular search area is built without one.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Metric configuration (scale + tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeoCfg {
    /// Kilometres per degree of arc.
    pub km_per_deg: f64,
    /// Slack for containment checks on a boundary edge.
    pub eps_contains: f64,
}

impl Default for GeoCfg {
    fn default() -> Self {
        Self {
            km_per_deg: KM_PER_DEG,
            eps_contains: 1e-9,
        }
    }
}

impl GeoCfg {
    #[inline]
    pub fn km_to_deg(&self, km: f64) -> f64 {
        km / self.km_per_deg
    }
    #[inline]
    pub fn deg_to_km(&self, deg: f64) -> f64 {
        deg * self.km_per_deg
    }
}

/// A WGS-84 location in degrees. Equality is by coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar coordinates in (lng, lat) order, matching (x, y).
    #[inline]
    pub(crate) fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.lng, self.lat)
    }

    #[inline]
    pub(crate) fn from_vec(v: Vector2<f64>) -> Self {
        Self { lat: v.y, lng: v.x }
    }

    /// Reject NaN/infinite coordinates before they enter a computation.
    pub fn validate(&self) -> Result<()> {
        if self.lat.is_finite() && self.lng.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidParameter(format!(
                "non-finite coordinates ({}, {})",
                self.lat, self.lng
            )))
        }
    }
}

/// Planar distance: Euclidean degrees scaled by `cfg.km_per_deg`.
#[inline]
pub fn distance_km(a: Point, b: Point, cfg: &GeoCfg) -> f64 {
    (a.to_vec() - b.to_vec()).norm() * cfg.km_per_deg
}

/// A circular search area: center + radius in kilometres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius_km: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// Circle with the default search radius.
    #[inline]
    pub fn around(center: Point) -> Self {
        Self::new(center, DEFAULT_RADIUS_KM)
    }

    /// Membership: `distance_km(center, p) <= radius_km` within slack.
    #[inline]
    pub fn contains(&self, p: Point, cfg: &GeoCfg) -> bool {
        distance_km(self.center, p, cfg) <= self.radius_km + cfg.eps_contains
    }

    /// Radius converted to degrees under `cfg` (bounding-box helpers).
    #[inline]
    pub fn radius_deg(&self, cfg: &GeoCfg) -> f64 {
        cfg.km_to_deg(self.radius_km)
    }
}

/// Construct a circular search area from a center and radius.
#[inline]
pub fn buffer(center: Point, radius_km: f64) -> Circle {
    Circle::new(center, radius_km)
}
