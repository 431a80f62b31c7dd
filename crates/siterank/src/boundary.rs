//! Search boundaries: named region, circle, or caller-supplied polygon.
//!
//! One tagged variant with `contains`/`centroid` replaces what would
//! otherwise be three parallel copies of the filtering logic; the
//! engine only ever talks to `Boundary`.

use crate::error::{Error, Result};
use crate::geo::{Circle, GeoCfg, Point, Ring};

/// A named administrative region: one or more closed rings.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub id: String,
    pub name: String,
    rings: Vec<Ring>,
}

impl Region {
    /// A region must carry at least one ring.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rings: Vec<Ring>,
    ) -> Result<Self> {
        if rings.is_empty() {
            return Err(Error::InvalidGeometry("region has no rings".into()));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            rings,
        })
    }

    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Membership in any ring of the multipolygon.
    pub fn contains(&self, p: Point) -> bool {
        self.rings.iter().any(|r| r.contains(p))
    }

    /// Area-weighted centroid across rings.
    pub fn centroid(&self) -> Point {
        let total: f64 = self.rings.iter().map(Ring::area_deg2).sum();
        if total < 1e-15 {
            // Degenerate multipolygon: average the ring centroids.
            let n = self.rings.len() as f64;
            let (lat, lng) = self.rings.iter().fold((0.0, 0.0), |(la, ln), r| {
                let c = r.centroid();
                (la + c.lat, ln + c.lng)
            });
            return Point::new(lat / n, lng / n);
        }
        let (lat, lng) = self.rings.iter().fold((0.0, 0.0), |(la, ln), r| {
            let w = r.area_deg2() / total;
            let c = r.centroid();
            (la + w * c.lat, ln + w * c.lng)
        });
        Point::new(lat, lng)
    }
}

/// The three boundary shapes a query can be scoped to.
#[derive(Clone, Debug)]
pub enum Boundary {
    /// A persisted, named multipolygon region.
    Region(Region),
    /// Center + radius in kilometres.
    Circle(Circle),
    /// An arbitrary caller-drawn closed ring (no persisted name).
    Polygon(Ring),
}

impl Boundary {
    /// Containment under the configured planar metric.
    pub fn contains(&self, p: Point, cfg: &GeoCfg) -> bool {
        match self {
            Boundary::Region(r) => r.contains(p),
            Boundary::Circle(c) => c.contains(p, cfg),
            Boundary::Polygon(ring) => ring.contains(p),
        }
    }

    /// Representative interior point: area centroid for polygonal
    /// variants, the center for circles.
    pub fn centroid(&self) -> Point {
        match self {
            Boundary::Region(r) => r.centroid(),
            Boundary::Circle(c) => c.center,
            Boundary::Polygon(ring) => ring.centroid(),
        }
    }

    #[inline]
    pub fn is_polygon(&self) -> bool {
        matches!(self, Boundary::Polygon(_))
    }

    /// Display name used in provenance strings, if the variant has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Boundary::Region(r) => Some(&r.name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(lng0: f64, side: f64) -> Ring {
        Ring::new(&[
            Point::new(0.0, lng0),
            Point::new(0.0, lng0 + side),
            Point::new(side, lng0 + side),
            Point::new(side, lng0),
            Point::new(0.0, lng0),
        ])
        .unwrap()
    }

    #[test]
    fn region_requires_a_ring() {
        assert!(Region::new("x", "X", vec![]).is_err());
    }

    #[test]
    fn multipolygon_contains_any_ring() {
        let region = Region::new("m", "M", vec![square(0.0, 1.0), square(5.0, 1.0)]).unwrap();
        assert!(region.contains(Point::new(0.5, 0.5)));
        assert!(region.contains(Point::new(0.5, 5.5)));
        assert!(!region.contains(Point::new(0.5, 3.0)));
    }

    #[test]
    fn multipolygon_centroid_is_area_weighted() {
        // A 2x2 square at lng 0 and a 1x1 square at lng 10: weights 4/5 and 1/5.
        let region = Region::new("m", "M", vec![square(0.0, 2.0), square(10.0, 1.0)]).unwrap();
        let c = region.centroid();
        assert_relative_eq!(c.lng, 0.8 * 1.0 + 0.2 * 10.5, epsilon = 1e-9);
        assert_relative_eq!(c.lat, 0.8 * 1.0 + 0.2 * 0.5, epsilon = 1e-9);
    }

    #[test]
    fn boundary_centroids_per_variant() {
        let circle = Boundary::Circle(Circle::new(Point::new(53.0, -6.0), 10.0));
        assert_eq!(circle.centroid(), Point::new(53.0, -6.0));
        let polygon = Boundary::Polygon(square(0.0, 1.0));
        let c = polygon.centroid();
        assert_relative_eq!(c.lat, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.lng, 0.5, epsilon = 1e-12);
    }
}
