//! Closed polygon rings: validation, containment, area centroid.
//!
//! A `Ring` is the validated form of a caller-supplied closed ring
//! (GeoJSON-style: the first vertex is repeated at the end). Invariants
//! are enforced at construction; every other operation can assume them.
//!
//! Invariants:
//! - At least 3 distinct vertices after dropping the closing duplicate.
//! - Closed on input (`first == last`); stored without the duplicate.
//! - Finite coordinates.
//!
//! Well-formedness beyond that (no self-intersection) is the caller's
//! responsibility; the engine fails fast rather than attempting repair.

use nalgebra::Vector2;

use crate::error::{Error, Result};

use super::types::Point;

/// Closed, validated polygon ring. Vertices are stored in (lng, lat)
/// planar order with the closing edge implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    verts: Vec<Vector2<f64>>,
}

impl Ring {
    /// Validate and build a ring from a closed vertex sequence.
    pub fn new(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidGeometry("empty ring".into()));
        }
        for p in points {
            p.validate()?;
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if first != last {
            return Err(Error::InvalidGeometry(
                "ring is not closed (first vertex must repeat at the end)".into(),
            ));
        }
        let mut verts: Vec<Vector2<f64>> = points[..points.len() - 1]
            .iter()
            .map(|p| p.to_vec())
            .collect();
        verts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
        // dedup_by keeps the head; the wrap-around pair needs its own check
        if verts.len() >= 2 && (verts[0] - verts[verts.len() - 1]).norm() < 1e-12 {
            verts.pop();
        }
        if verts.len() < 3 {
            return Err(Error::InvalidGeometry(
                "ring needs at least 3 distinct vertices".into(),
            ));
        }
        Ok(Self { verts })
    }

    /// Number of distinct vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Distinct vertices as points (closing duplicate not included).
    pub fn points(&self) -> Vec<Point> {
        self.verts.iter().map(|v| Point::from_vec(*v)).collect()
    }

    /// Even-odd ray-cast containment test.
    ///
    /// Points exactly on an edge may land on either side; the engine's
    /// catalogs are not expected to sit on boundary edges.
    pub fn contains(&self, p: Point) -> bool {
        let q = p.to_vec();
        let n = self.verts.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[j];
            if (a.y > q.y) != (b.y > q.y) {
                let x_cross = a.x + (q.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if q.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Shoelace signed area in square degrees (positive for CCW order).
    pub fn signed_area_deg2(&self) -> f64 {
        let n = self.verts.len();
        let mut acc = 0.0;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[(i + 1) % n];
            acc += a.x * b.y - b.x * a.y;
        }
        acc / 2.0
    }

    #[inline]
    pub fn area_deg2(&self) -> f64 {
        self.signed_area_deg2().abs()
    }

    /// Area-weighted centroid. Falls back to the vertex mean for rings
    /// with numerically vanishing area (collinear vertices).
    pub fn centroid(&self) -> Point {
        let n = self.verts.len();
        let mut area2 = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[(i + 1) % n];
            let cross = a.x * b.y - b.x * a.y;
            area2 += cross;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }
        if area2.abs() < 1e-15 {
            let mut sum = Vector2::zeros();
            for v in &self.verts {
                sum += v;
            }
            return Point::from_vec(sum / n as f64);
        }
        Point::from_vec(Vector2::new(cx, cy) / (3.0 * area2))
    }

    /// Axis-aligned bounds as ((min lng, min lat), (max lng, max lat)).
    pub fn bounds(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut lo = self.verts[0];
        let mut hi = self.verts[0];
        for v in &self.verts[1..] {
            lo.x = lo.x.min(v.x);
            lo.y = lo.y.min(v.y);
            hi.x = hi.x.max(v.x);
            hi.y = hi.y.max(v.y);
        }
        (lo, hi)
    }
}
