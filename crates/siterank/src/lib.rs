//! Facility-siting core: candidate generation, filtering, scoring and
//! ranking over planar geographic data.
//!
//! The crate is a library-style engine. Callers hand it already-parsed
//! boundaries (named region, circle, or arbitrary polygon) and point
//! catalogs (existing facilities, populated settlements); it returns
//! ranked recommendation records, nearest-neighbor answers, and
//! per-region counts. Transport, persistence, auth, and ingestion stay
//! outside.
//!
//! Every query is a pure function of its inputs: no shared mutable
//! state, no internal I/O, safe to run fully in parallel.

pub mod boundary;
pub mod catalog;
pub mod counts;
pub mod engine;
pub mod error;
pub mod geo;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{Boundary, Region};
    pub use crate::catalog::{
        nearest, nearest_facilities, nearest_facility, nearest_one, within, Facility, Located,
        RegionSet, Settlement, NEARBY_LIMIT,
    };
    pub use crate::counts::{facility_counts_by_region, RegionCount};
    pub use crate::engine::{
        recommend, recommend_in_region, Candidate, RankingParams, RECOMMEND_LIMIT,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geo::{
        buffer, distance_km, Circle, GeoCfg, Point, Ring, DEFAULT_RADIUS_KM, KM_PER_DEG,
    };
}
