//! Candidate engine: filter, score and rank new-facility sites.
//!
//! Per settlement inside the boundary: distance to the nearest existing
//! facility (exclusion filter), local settlement density, then a rank.
//! Region and circle boundaries return a ranked top-10; a caller-drawn
//! polygon returns a single best candidate with a centroid fallback.
//! The asymmetry matches the observed product behavior and is kept
//! deliberately distinct (see DESIGN.md).
//!
//! Every call is a pure function of its inputs; the engine holds no
//! state and performs no I/O.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boundary::Boundary;
use crate::catalog::{within, Facility, RegionSet, Settlement};
use crate::error::{Error, Result};
use crate::geo::{distance_km, GeoCfg, Point};

/// Fixed cap on ranked recommendation lists. Not configurable.
pub const RECOMMEND_LIMIT: usize = 10;

/// Score stand-in for "no facility anywhere in scope" on the polygon
/// single-best path. Scoring-only; it never reaches the output record.
const NO_FACILITY_SCORE: f64 = 1000.0;

/// Ranking policy parameters. Both radii are kilometres and must be
/// non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankingParams {
    /// Exclusion radius around existing facilities.
    pub min_distance_km: f64,
    /// Density-scoring radius around each candidate settlement.
    pub max_settlement_distance_km: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            min_distance_km: 5.0,
            max_settlement_distance_km: 10.0,
        }
    }
}

impl RankingParams {
    fn validate(&self) -> Result<()> {
        if !(self.min_distance_km >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "min_distance_km must be >= 0, got {}",
                self.min_distance_km
            )));
        }
        if !(self.max_settlement_distance_km >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "max_settlement_distance_km must be >= 0, got {}",
                self.max_settlement_distance_km
            )));
        }
        Ok(())
    }
}

/// A recommended site. Derived per call, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub point: Point,
    pub name: String,
    pub population: Option<u64>,
    /// `None` only when no facility exists in scope.
    pub min_distance_to_facility_km: Option<f64>,
    /// Settlements within the density radius, including the candidate
    /// itself (so >= 1 whenever the settlement set is non-empty).
    pub nearby_settlement_count: usize,
    /// Human-readable provenance for the recommendation.
    pub reason: String,
}

/// One surviving settlement with its scores, before ranking.
struct Scored<'a> {
    idx: usize,
    settlement: &'a Settlement,
    min_dist: Option<f64>,
    nearby: usize,
}

impl Scored<'_> {
    /// Ranking key: nulls compare as zero, stored fields stay nullable.
    #[inline]
    fn key(&self) -> (f64, f64) {
        (
            self.min_dist.unwrap_or(0.0),
            self.settlement.population.unwrap_or(0) as f64,
        )
    }
}

/// Recommend sites inside `boundary`.
///
/// Facilities and settlements may be pre-filtered or full catalogs;
/// the engine re-filters by the boundary either way. Region and circle
/// boundaries yield up to `RECOMMEND_LIMIT` candidates ranked
/// descending by `(distance to nearest facility, population)`; a
/// polygon boundary yields exactly one candidate (best settlement or
/// centroid fallback).
pub fn recommend(
    boundary: &Boundary,
    facilities: &[Facility],
    settlements: &[Settlement],
    params: RankingParams,
    cfg: &GeoCfg,
) -> Result<Vec<Candidate>> {
    params.validate()?;
    validate_boundary(boundary)?;
    validate_catalogs(facilities, settlements)?;
    let fac = within(facilities, boundary, cfg);
    let set = within(settlements, boundary, cfg);
    debug!(
        facilities = fac.len(),
        settlements = set.len(),
        polygon = boundary.is_polygon(),
        "recommend scope"
    );
    if boundary.is_polygon() {
        recommend_single(boundary, &fac, &set, params, cfg)
    } else {
        recommend_ranked(boundary, &fac, &set, params, cfg)
    }
}

/// Resolve a named region and recommend inside it.
pub fn recommend_in_region(
    regions: &RegionSet,
    region_id: &str,
    facilities: &[Facility],
    settlements: &[Settlement],
    params: RankingParams,
    cfg: &GeoCfg,
) -> Result<Vec<Candidate>> {
    let region = regions.get(region_id)?;
    let boundary = Boundary::Region(region.clone());
    recommend(&boundary, facilities, settlements, params, cfg)
}

/// A malformed point inside an otherwise valid catalog is a
/// data-integrity failure, not a caller-parameter one; it aborts the
/// query with the triggering message rather than being skipped.
fn validate_catalogs(facilities: &[Facility], settlements: &[Settlement]) -> Result<()> {
    for f in facilities {
        if let Err(e) = f.point.validate() {
            return Err(Error::Computation(format!("facility {}: {e}", f.id)));
        }
    }
    for s in settlements {
        if let Err(e) = s.point.validate() {
            return Err(Error::Computation(format!("settlement {}: {e}", s.id)));
        }
    }
    Ok(())
}

fn validate_boundary(boundary: &Boundary) -> Result<()> {
    if let Boundary::Circle(c) = boundary {
        c.center.validate()?;
        if !(c.radius_km >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "circle radius must be >= 0, got {}",
                c.radius_km
            )));
        }
    }
    Ok(())
}

/// Score every settlement in scope and drop the excluded ones.
///
/// The scan runs in parallel; rayon's ordered collect plus the explicit
/// index keep downstream ordering fully deterministic.
fn scan<'a>(
    fac: &[&Facility],
    set: &[&'a Settlement],
    params: RankingParams,
    cfg: &GeoCfg,
) -> Vec<Scored<'a>> {
    set.par_iter()
        .enumerate()
        .filter_map(|(idx, &s)| {
            let min_dist = fac
                .iter()
                .map(|f| distance_km(s.point, f.point, cfg))
                .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            // A settlement with no facility in scope is never excluded.
            if let Some(d) = min_dist {
                if d < params.min_distance_km {
                    return None;
                }
            }
            let nearby = set
                .iter()
                .filter(|t| {
                    distance_km(s.point, t.point, cfg) <= params.max_settlement_distance_km
                })
                .count();
            Some(Scored {
                idx,
                settlement: s,
                min_dist,
                nearby,
            })
        })
        .collect()
}

/// Ranked top-10 path (region and circle boundaries).
fn recommend_ranked(
    boundary: &Boundary,
    fac: &[&Facility],
    set: &[&Settlement],
    params: RankingParams,
    cfg: &GeoCfg,
) -> Result<Vec<Candidate>> {
    let mut rows = scan(fac, set, params, cfg);
    // Descending by key, stable on ties via catalog order.
    rows.sort_by(|a, b| {
        b.key()
            .partial_cmp(&a.key())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.idx.cmp(&b.idx))
    });
    rows.truncate(RECOMMEND_LIMIT);
    debug!(survivors = rows.len(), "ranked candidates");
    let reason = match boundary {
        Boundary::Region(r) => format!("Recommended location in {}", r.name),
        _ => "Recommended location inside selected circle".to_string(),
    };
    Ok(rows
        .into_iter()
        .map(|row| Candidate {
            point: row.settlement.point,
            name: row.settlement.name.clone(),
            population: row.settlement.population,
            min_distance_to_facility_km: row.min_dist,
            nearby_settlement_count: row.nearby,
            reason: reason.clone(),
        })
        .collect())
}

/// Single-best path (polygon boundary) with centroid fallbacks.
fn recommend_single(
    boundary: &Boundary,
    fac: &[&Facility],
    set: &[&Settlement],
    params: RankingParams,
    cfg: &GeoCfg,
) -> Result<Vec<Candidate>> {
    if set.is_empty() {
        debug!("no settlements inside polygon, falling back to centroid");
        return Ok(vec![centroid_candidate(
            boundary,
            0,
            "No settlements inside polygon, using centroid",
        )]);
    }
    let rows = scan(fac, set, params, cfg);
    // Maximize min-distance, with a fixed stand-in score when no
    // facility is in scope; first maximum wins on ties.
    let best = rows.iter().reduce(|best, row| {
        let score = |r: &Scored<'_>| r.min_dist.unwrap_or(NO_FACILITY_SCORE);
        if score(row) > score(best) {
            row
        } else {
            best
        }
    });
    match best {
        Some(row) => Ok(vec![Candidate {
            point: row.settlement.point,
            name: row.settlement.name.clone(),
            population: row.settlement.population,
            min_distance_to_facility_km: row.min_dist,
            nearby_settlement_count: set.len(),
            reason: "Best settlement inside selected polygon".to_string(),
        }]),
        None => {
            debug!("no settlement survived exclusion, falling back to centroid");
            Ok(vec![centroid_candidate(
                boundary,
                set.len(),
                "No suitable settlement found, using centroid",
            )])
        }
    }
}

fn centroid_candidate(boundary: &Boundary, nearby: usize, reason: &str) -> Candidate {
    Candidate {
        point: boundary.centroid(),
        name: "Polygon Centroid".to_string(),
        population: None,
        min_distance_to_facility_km: None,
        nearby_settlement_count: nearby,
        reason: reason.to_string(),
    }
}
