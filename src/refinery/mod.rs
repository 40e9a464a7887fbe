// * The Refinery (listing normalization)
// * Turns heterogeneous raw portal records into clean, internally
// * consistent listings. Per-field transforms (address, neighborhood,
// * amenities, pricing, floorplans) are independent; the transformer
// * assembles them into one record.

pub mod address;
pub mod amenities;
pub mod floorplans;
pub mod neighborhood;
pub mod pricing;
pub mod transformer;

// * Re-exports for convenient access
pub use address::{AddressParser, PostalDefaults};
pub use amenities::{AmenityExtractor, AmenityProfile, AmenitySignals, FeatureFlags};
pub use floorplans::FloorplanNormalizer;
pub use neighborhood::{ClassifierConfig, GeoRule, KeywordRule, NeighborhoodClassifier};
pub use pricing::{PriceRange, PriceResolver};
pub use transformer::{ListingTransformer, TransformerConfig};

use crate::schema::{Listing, RawRecord};

/// Convenience function to transform one record with portal defaults.
pub fn transform_record(raw: &RawRecord) -> Listing {
    ListingTransformer::new().transform(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_module_exports() {
        // * Verify the major components are accessible
        let _parser = AddressParser::new();
        let _classifier = NeighborhoodClassifier::new();
        let _transformer = ListingTransformer::new();
    }

    #[test]
    fn test_convenience_function() {
        let listing = transform_record(&RawRecord::new(json!({
            "id": 7,
            "title": "Convenience Court"
        })));

        assert_eq!(listing.name, "Convenience Court");
        assert_eq!(listing.slug, "apartment-7");
    }
}
