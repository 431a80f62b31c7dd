//! Planar geographic geometry.
//!
//! Purpose
//! - Provide the few primitives the siting engine needs: a lat/lng
//!   point, a kilometre-radius circle, validated closed rings, and one
//!   planar distance metric with an injectable km-per-degree scale.
//! - Keep the API minimal and numerically explicit (eps-aware).
//!
//! Why planar-only
//! - The engine targets county-scale searches at mid latitudes, where
//!   Euclidean-degrees-times-constant agrees with geodesic distance to
//!   well under the ranking thresholds in play.
//!
//! Code cross-refs: `Ring`, `Circle`, `GeoCfg`, `boundary::Boundary`.

pub mod rand;
mod ring;
mod types;

pub use ring::Ring;
pub use types::{buffer, distance_km, Circle, GeoCfg, Point, DEFAULT_RADIUS_KM, KM_PER_DEG};
