// * Floorplan normalization.
// * Converts raw floorplan entries into typed, bounds-checked records. No
// * entry is ever dropped: zero-value defaults keep the array aligned with
// * the raw source, so plan indexes stay meaningful downstream.

use crate::schema::{Floorplan, RawRecord};

pub struct FloorplanNormalizer;

impl FloorplanNormalizer {
    pub fn normalize(plans: &[RawRecord]) -> Vec<Floorplan> {
        plans.iter().map(Self::normalize_one).collect()
    }

    fn normalize_one(raw: &RawRecord) -> Floorplan {
        Floorplan {
            bedrooms: raw.integer("bed").filter(|b| *b >= 0).unwrap_or(0) as u32,
            // * A bath count must be at least 1; zero and garbage both
            // * default
            bathrooms: raw.integer("bath").filter(|b| *b > 0).unwrap_or(1) as u32,
            rent_min: raw.number("min_rent").unwrap_or(0.0).max(0.0),
            rent_max: raw.number("max_rent").unwrap_or(0.0).max(0.0),
            sqft: raw
                .integer("sq_footage")
                .filter(|v| *v >= 0)
                .map(|v| v as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_plans(value: serde_json::Value) -> Vec<RawRecord> {
        RawRecord::new(json!({ "floorplans": value })).records("floorplans")
    }

    #[test]
    fn test_typed_conversion() {
        let plans = raw_plans(json!([
            {"bed": "2", "bath": 2, "min_rent": "1150", "max_rent": 1350, "sq_footage": "880"}
        ]));
        let normalized = FloorplanNormalizer::normalize(&plans);

        assert_eq!(
            normalized,
            vec![Floorplan {
                bedrooms: 2,
                bathrooms: 2,
                rent_min: 1150.0,
                rent_max: 1350.0,
                sqft: Some(880),
            }]
        );
    }

    #[test]
    fn test_defaults_on_empty_entry() {
        let normalized = FloorplanNormalizer::normalize(&raw_plans(json!([{}])));

        assert_eq!(
            normalized,
            vec![Floorplan {
                bedrooms: 0,
                bathrooms: 1,
                rent_min: 0.0,
                rent_max: 0.0,
                sqft: None,
            }]
        );
    }

    #[test]
    fn test_zero_bath_count_defaults_to_one() {
        let normalized = FloorplanNormalizer::normalize(&raw_plans(json!([{"bath": 0}])));
        assert_eq!(normalized[0].bathrooms, 1);
    }

    #[test]
    fn test_unparseable_sqft_is_null_not_zero() {
        let normalized =
            FloorplanNormalizer::normalize(&raw_plans(json!([{"sq_footage": "varies"}])));
        assert_eq!(normalized[0].sqft, None);
    }

    #[test]
    fn test_malformed_entries_keep_length_and_order() {
        let plans = raw_plans(json!([
            {"bed": 1, "min_rent": 900},
            "garbage",
            {"bed": 4, "min_rent": 2400}
        ]));
        let normalized = FloorplanNormalizer::normalize(&plans);

        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].bedrooms, 1);
        assert_eq!(normalized[1].bedrooms, 0);
        assert_eq!(normalized[2].bedrooms, 4);
    }

    #[test]
    fn test_negative_rent_clamps_to_zero() {
        let normalized =
            FloorplanNormalizer::normalize(&raw_plans(json!([{"min_rent": -500}])));
        assert_eq!(normalized[0].rent_min, 0.0);
    }
}
