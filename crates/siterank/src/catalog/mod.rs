//! Point catalogs: facilities, settlements, named regions.
//!
//! Catalogs are plain ordered slices owned by the caller; the queries
//! here are pure reads. Distances are reported as explicit
//! `(item, km)` pairs rather than being attached to the items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::boundary::{Boundary, Region};
use crate::error::{Error, Result};
use crate::geo::{distance_km, GeoCfg, Point};

/// Default cap for nearest-list queries.
pub const NEARBY_LIMIT: usize = 10;

/// Anything with a location; containment and nearest queries are
/// generic over it.
pub trait Located {
    fn point(&self) -> Point;
}

/// An existing located service point (exclusion anchor for siting).
///
/// The attribute bag (brand, contact info, address fragments) is opaque
/// to the algorithms; only `id` and `point` matter to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub point: Point,
    pub name: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl Located for Facility {
    #[inline]
    fn point(&self) -> Point {
        self.point
    }
}

/// A populated place, candidate site for a new facility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub point: Point,
    pub name: String,
    pub population: Option<u64>,
    /// Place-kind tag (city, town, village, ...).
    pub kind: String,
}

impl Located for Settlement {
    #[inline]
    fn point(&self) -> Point {
        self.point
    }
}

/// All items contained in `boundary`. Unordered in the sense that the
/// caller must not rely on any ordering beyond catalog order; empty is
/// not an error.
pub fn within<'a, T: Located>(
    items: &'a [T],
    boundary: &Boundary,
    cfg: &GeoCfg,
) -> Vec<&'a T> {
    let hits: Vec<&T> = items
        .iter()
        .filter(|t| boundary.contains(t.point(), cfg))
        .collect();
    trace!(total = items.len(), contained = hits.len(), "boundary filter");
    hits
}

/// The `k` items nearest to `p`, ascending by distance, ties broken by
/// catalog insertion order (stable sort). `k` larger than the catalog
/// returns the whole catalog; `k == 0` is a caller error.
pub fn nearest<'a, T: Located>(
    items: &'a [T],
    p: Point,
    k: usize,
    cfg: &GeoCfg,
) -> Result<Vec<(&'a T, f64)>> {
    if k == 0 {
        return Err(Error::InvalidParameter("nearest requires k >= 1".into()));
    }
    p.validate()?;
    let mut pairs: Vec<(&T, f64)> = items
        .iter()
        .map(|t| (t, distance_km(p, t.point(), cfg)))
        .collect();
    pairs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    pairs.truncate(k);
    Ok(pairs)
}

/// The single nearest item, or `None` on an empty catalog.
pub fn nearest_one<'a, T: Located>(
    items: &'a [T],
    p: Point,
    cfg: &GeoCfg,
) -> Option<(&'a T, f64)> {
    items
        .iter()
        .map(|t| (t, distance_km(p, t.point(), cfg)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

/// Nearest facility across the whole catalog (no boundary filter).
#[inline]
pub fn nearest_facility<'a>(
    facilities: &'a [Facility],
    p: Point,
    cfg: &GeoCfg,
) -> Option<(&'a Facility, f64)> {
    nearest_one(facilities, p, cfg)
}

/// Nearest facilities capped at `limit` (`NEARBY_LIMIT` by default),
/// ascending distance.
#[inline]
pub fn nearest_facilities<'a>(
    facilities: &'a [Facility],
    p: Point,
    limit: usize,
    cfg: &GeoCfg,
) -> Result<Vec<(&'a Facility, f64)>> {
    nearest(facilities, p, limit, cfg)
}

/// Named-region lookup table. Preserves insertion order for the
/// per-region aggregation path.
#[derive(Clone, Debug, Default)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Resolve a region by identity.
    pub fn get(&self, id: &str) -> Result<&Region> {
        self.regions
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::BoundaryNotFound(id.to_string()))
    }
}
