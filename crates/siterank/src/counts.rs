//! Per-region facility counts (heatmap-style summaries).

use serde::Serialize;

use crate::boundary::Region;
use crate::catalog::Facility;

/// Exact facility count for one region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub region_id: String,
    pub region_name: String,
    pub count: usize,
}

/// Count facilities contained in each region, in region input order.
///
/// O(regions * facilities) by design; at county-level granularity and
/// low thousands of points a spatial index buys nothing.
pub fn facility_counts_by_region(regions: &[Region], facilities: &[Facility]) -> Vec<RegionCount> {
    regions
        .iter()
        .map(|region| RegionCount {
            region_id: region.id.clone(),
            region_name: region.name.clone(),
            count: facilities
                .iter()
                .filter(|f| region.contains(f.point))
                .count(),
        })
        .collect()
}
