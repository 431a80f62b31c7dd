//! Random rings and point scatters (deterministic, replay tokens).
//!
//! Small seeded samplers used by benches and property tests. Draws are
//! reproducible and indexable through a replay token `(seed, index)`
//! mixed into a single RNG; the same token always yields the same
//! geometry.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;

use super::ring::Ring;
use super::types::{GeoCfg, Point};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Radial-jitter ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub center: Point,
    /// Distinct vertices; clamped to at least 3.
    pub vertex_count: usize,
    /// Base radius in kilometres before jitter.
    pub radius_km: f64,
    /// Radial jitter (relative amplitude). Radii are
    /// `radius_km * (1 + u)` with `u` in `[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            vertex_count: 12,
            radius_km: 25.0,
            radial_jitter: 0.25,
        }
    }
}

/// Draw a star-shaped closed ring around `cfg.center` via radial jitter.
///
/// Angles stay sorted, so the ring cannot self-intersect.
pub fn draw_ring_radial(cfg: RingCfg, geo: &GeoCfg, tok: ReplayToken) -> Result<Ring> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(3);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = geo.km_to_deg(cfg.radius_km.max(1e-6));
    let delta = std::f64::consts::TAU / n as f64;
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let theta = k as f64 * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = r0 * (1.0 + u);
            Point::new(
                cfg.center.lat + r * theta.sin(),
                cfg.center.lng + r * theta.cos(),
            )
        })
        .collect();
    pts.push(pts[0]);
    Ring::new(&pts)
}

/// Scatter `count` points inside `ring` by rejection sampling its
/// bounding box. Deterministic under the token.
pub fn scatter_in_ring(ring: &Ring, count: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = ring.bounds();
    let mut out = Vec::with_capacity(count);
    // Star-shaped rings fill a decent fraction of their box, so the
    // rejection loop terminates quickly in practice.
    while out.len() < count {
        let p = Point::new(rng.gen_range(lo.y..=hi.y), rng.gen_range(lo.x..=hi.x));
        if ring.contains(p) {
            out.push(p);
        }
    }
    out
}
