// * Price reconciliation.
// * Listings carry up to two competing price sources: direct min/max rent
// * fields and per-floorplan rent ranges. Direct fields win; floorplans are
// * the fallback only when no valid direct minimum exists.

use crate::schema::RawRecord;

/// Resolved price band. Both sides `None` means no numeric price could be
/// derived from any source and the listing is "call for price" downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Reconciles direct price fields and per-floorplan prices into one band.
pub struct PriceResolver;

impl PriceResolver {
    /// `direct_min`/`direct_max` are the leniently parsed `min_rent`/
    /// `max_rent` record fields; `floorplans` are the raw floorplan entries.
    ///
    /// The two sides resolve independently: a direct max with no usable
    /// direct min is retained as-is. When the minimum has to come from
    /// floorplans, the floorplan-derived maximum replaces any direct max —
    /// a long-standing asymmetry that downstream consumers rely on, kept
    /// intact here.
    pub fn resolve(
        direct_min: Option<f64>,
        direct_max: Option<f64>,
        floorplans: &[RawRecord],
    ) -> PriceRange {
        let mut min = direct_min.filter(|v| v.is_finite());
        let mut max = direct_max.filter(|v| v.is_finite());

        if min.is_none() && !floorplans.is_empty() {
            let plan_mins: Vec<f64> = floorplans
                .iter()
                .filter_map(|fp| fp.number("min_rent"))
                .filter(|rent| *rent > 0.0)
                .collect();

            if let Some(lowest) = plan_mins.into_iter().reduce(f64::min) {
                min = Some(lowest);

                // * Max values are only NaN-filtered, not required positive
                let highest = floorplans
                    .iter()
                    .filter_map(|fp| fp.number("max_rent"))
                    .reduce(f64::max);
                if highest.is_some() {
                    max = highest;
                }
            }
        }

        PriceRange { min, max }
    }
}
