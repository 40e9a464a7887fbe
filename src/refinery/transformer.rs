// * Listing assembly.
// * One raw portal record in, one normalized listing out. Strictly a data
// * transform: no network, no disk, no shared state — safe to run across
// * records in parallel and fully unit-testable with in-memory fixtures.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::config::constants::{
    DEFAULT_CATEGORY, DEFAULT_LISTING_NAME, LISTING_DETAIL_BASE, SLIDER_IMAGE_CDN_BASE,
};
use crate::refinery::address::{AddressParser, PostalDefaults};
use crate::refinery::amenities::{AmenityExtractor, AmenitySignals};
use crate::refinery::floorplans::FloorplanNormalizer;
use crate::refinery::neighborhood::NeighborhoodClassifier;
use crate::refinery::pricing::PriceResolver;
use crate::schema::{Listing, RawRecord};

// * First digit run in a distance string like "9 mins"
static PATTERN_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("Invalid minutes regex"));

/// URL templates and fallback values injected into the transformer.
///
/// Hoisted out of the transform logic so tests can substitute them and the
/// transformer itself carries no hidden global state.
#[derive(Debug, Clone)]
pub struct TransformerConfig {
    /// CDN prefix for raw slider-image filenames.
    pub cdn_image_base: String,
    /// Portal detail-page prefix; the listing slug is appended.
    pub detail_url_base: String,
    /// Postal fallbacks for the address parser.
    pub postal_defaults: PostalDefaults,
    pub default_name: String,
    pub default_category: String,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            cdn_image_base: SLIDER_IMAGE_CDN_BASE.to_string(),
            detail_url_base: LISTING_DETAIL_BASE.to_string(),
            postal_defaults: PostalDefaults::default(),
            default_name: DEFAULT_LISTING_NAME.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Turns one raw portal record into a [`Listing`].
///
/// # Example
/// ```ignore
/// use listing_flow::refinery::ListingTransformer;
/// use listing_flow::schema::RawRecord;
///
/// let transformer = ListingTransformer::new();
/// let listing = transformer.transform(&RawRecord::new(raw_json));
///
/// println!("{} ({})", listing.name, listing.neighborhood.as_str());
/// ```
pub struct ListingTransformer {
    config: TransformerConfig,
    address_parser: AddressParser,
    classifier: NeighborhoodClassifier,
}

impl ListingTransformer {
    /// Creates a transformer with the portal defaults.
    pub fn new() -> Self {
        Self::with_config(TransformerConfig::default())
    }

    /// Creates a transformer with custom URL templates and fallbacks.
    pub fn with_config(config: TransformerConfig) -> Self {
        Self {
            address_parser: AddressParser::with_defaults(config.postal_defaults.clone()),
            classifier: NeighborhoodClassifier::new(),
            config,
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Transforms a raw record into a normalized listing. Total: missing,
    /// mistyped, or garbage fields degrade to documented defaults and the
    /// transform never fails on a single record.
    pub fn transform(&self, raw: &RawRecord) -> Listing {
        let parsed = self.address_parser.parse(raw.text("address").unwrap_or(""));

        let id = raw.integer("id").unwrap_or(0);
        let slug = raw
            .text("slug")
            .map(str::to_string)
            .unwrap_or_else(|| format!("apartment-{id}"));

        let lat = raw.number("lat");
        let lng = raw.number("lng");

        // * Floorplans feed both price resolution (raw) and the typed output
        let raw_plans = raw.records("floorplans");
        let price = PriceResolver::resolve(
            raw.number("min_rent"),
            raw.number("max_rent"),
            &raw_plans,
        );
        let floorplans = FloorplanNormalizer::normalize(&raw_plans);

        let unit_features = raw.text_list("unitFeatures");
        let property_features = raw.text_list("listingFeatures");
        let utilities = raw.text_list("utilities");
        let amenity = AmenityExtractor::extract(
            &unit_features,
            &property_features,
            &utilities,
            &AmenitySignals {
                pets_policy: raw.text("pets_allowed").map(str::to_string),
                parking: raw.truthy("parking_allowed"),
                laundry: raw.truthy("laundry_allowed"),
            },
        );

        let images: Vec<String> = raw
            .text_list("images")
            .into_iter()
            .map(|file| format!("{}{}", self.config.cdn_image_base, file))
            .collect();

        Listing {
            id,
            name: raw
                .text("title")
                .unwrap_or(&self.config.default_name)
                .to_string(),
            address: parsed.street.clone(),
            city: parsed.city,
            state: parsed.state,
            zip_code: parsed.zip,
            latitude: lat.unwrap_or(0.0),
            longitude: lng.unwrap_or(0.0),
            price_min: price.min,
            price_max: price.max,
            price_per_person: Self::per_person(raw),
            bedroom_min: raw.integer("min_bed").filter(|v| *v >= 0).unwrap_or(0) as u32,
            bedroom_max: raw.integer("max_bed").filter(|v| *v >= 0).unwrap_or(0) as u32,
            bathroom_min: raw.integer("min_bath").filter(|v| *v > 0).unwrap_or(1) as u32,
            bathroom_max: raw.integer("max_bath").filter(|v| *v > 0).unwrap_or(1) as u32,
            phone: first_text(raw, &["contact_number", "phone"]),
            email: first_text(raw, &["landlord_email", "email"]),
            website: first_text(raw, &["landlord_website", "website"]),
            walk_time: parse_walk_time(raw.text("distance")),
            image_url: images.first().cloned(),
            images,
            neighborhood: self.classifier.classify(&parsed.street, lat, lng),
            category: raw
                .text("category_title")
                .unwrap_or(&self.config.default_category)
                .to_string(),
            description: decode_description(raw.text("description")),
            amenities: amenity.all_tags,
            unit_features,
            property_features,
            utilities,
            floorplans,
            pets_allowed: amenity.flags.pets_allowed,
            furnished: amenity.flags.furnished,
            has_parking: amenity.flags.has_parking,
            has_pool: amenity.flags.has_pool,
            has_gym: amenity.flags.has_gym,
            has_laundry: amenity.flags.has_laundry,
            detail_url: format!("{}{}", self.config.detail_url_base, slug),
            slug,
        }
    }

    // * Per-person pricing: the boolean flag must be literally true; the
    // * rent-style field must equal "person" exactly
    fn per_person(raw: &RawRecord) -> bool {
        matches!(raw.get("per_person_property"), Some(Value::Bool(true)))
            || raw.text("rent_style") == Some("person")
    }
}

impl Default for ListingTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the first key with a non-empty string value.
fn first_text(raw: &RawRecord, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| raw.text(k)).map(str::to_string)
}

/// Pulls walking minutes out of free text like "9 mins".
fn parse_walk_time(distance: Option<&str>) -> Option<u32> {
    let text = distance?;
    let captures = PATTERN_MINUTES.captures(text)?;
    captures[1].parse().ok()
}

/// Decodes a base64 description to UTF-8 text. Absent input or a failed
/// decode yields None, never an error.
fn decode_description(encoded: Option<&str>) -> Option<String> {
    let trimmed = encoded?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let bytes = BASE64.decode(trimmed).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Neighborhood;
    use serde_json::json;

    #[test]
    fn test_empty_record_gets_full_defaults() {
        let transformer = ListingTransformer::new();
        let listing = transformer.transform(&RawRecord::new(json!({})));

        assert_eq!(listing.id, 0);
        assert_eq!(listing.name, "Unknown");
        assert_eq!(listing.slug, "apartment-0");
        assert_eq!(listing.city, "Austin");
        assert_eq!(listing.state, "TX");
        assert_eq!(listing.zip_code, "78705");
        assert_eq!(listing.latitude, 0.0);
        assert_eq!(listing.longitude, 0.0);
        assert_eq!(listing.price_min, None);
        assert_eq!(listing.bathroom_min, 1);
        assert_eq!(listing.bedroom_min, 0);
        assert_eq!(listing.category, "Apartment");
        assert_eq!(listing.description, None);
        assert_eq!(listing.image_url, None);
        assert_eq!(
            listing.detail_url,
            "https://housing.offcampus.utexas.edu/listing/apartment-0"
        );
        assert!(!listing.is_valid());
    }

    #[test]
    fn test_images_get_cdn_prefix_and_first_becomes_cover() {
        let transformer = ListingTransformer::new();
        let listing = transformer.transform(&RawRecord::new(json!({
            "images": ["a.jpg", "b.jpg"]
        })));

        assert_eq!(
            listing.images[0],
            "https://rcp-prod-uploads.s3.amazonaws.com/property_images/slider_images/a.jpg"
        );
        assert_eq!(listing.image_url.as_deref(), Some(listing.images[0].as_str()));
        assert_eq!(listing.images.len(), 2);
    }

    #[test]
    fn test_contact_fields_prefer_landlord_variants() {
        let transformer = ListingTransformer::new();
        let listing = transformer.transform(&RawRecord::new(json!({
            "contact_number": "512-555-0100",
            "phone": "512-555-0199",
            "email": "leasing@example.com",
            "landlord_website": ""
        })));

        assert_eq!(listing.phone.as_deref(), Some("512-555-0100"));
        assert_eq!(listing.email.as_deref(), Some("leasing@example.com"));
        assert_eq!(listing.website, None);
    }

    #[test]
    fn test_per_person_pricing_flags() {
        let transformer = ListingTransformer::new();

        let flagged = transformer.transform(&RawRecord::new(json!({"per_person_property": true})));
        assert!(flagged.price_per_person);

        let styled = transformer.transform(&RawRecord::new(json!({"rent_style": "person"})));
        assert!(styled.price_per_person);

        // * Truthy-but-not-true flag values do not count
        let stringly = transformer.transform(&RawRecord::new(json!({"per_person_property": "yes"})));
        assert!(!stringly.price_per_person);

        let unit = transformer.transform(&RawRecord::new(json!({"rent_style": "unit"})));
        assert!(!unit.price_per_person);
    }

    #[test]
    fn test_walk_time_parses_leading_minutes() {
        assert_eq!(parse_walk_time(Some("9 mins")), Some(9));
        assert_eq!(parse_walk_time(Some("about 15 minutes")), Some(15));
        assert_eq!(parse_walk_time(Some("far")), None);
        assert_eq!(parse_walk_time(None), None);
    }

    #[test]
    fn test_description_round_trip() {
        let original = "Spacious 2/2 steps from campus. Utilities included!";
        let encoded = BASE64.encode(original);

        let transformer = ListingTransformer::new();
        let listing = transformer.transform(&RawRecord::new(json!({"description": encoded})));

        assert_eq!(listing.description.as_deref(), Some(original));
    }

    #[test]
    fn test_description_failures_are_null() {
        assert_eq!(decode_description(None), None);
        assert_eq!(decode_description(Some("")), None);
        assert_eq!(decode_description(Some("!!! not base64 !!!")), None);
    }

    #[test]
    fn test_classifier_runs_on_parsed_street() {
        // * No coordinates: the keyword fallback sees the parsed street, not
        // * the full raw address line
        let transformer = ListingTransformer::new();
        let listing = transformer.transform(&RawRecord::new(json!({
            "address": "2222 Rio Grande Street Austin, TX 78705"
        })));

        assert_eq!(listing.neighborhood, Neighborhood::WestCampus);
        assert_eq!(listing.address, "2222 Rio Grande Street");
    }

    #[test]
    fn test_custom_config_substitutes_url_templates() {
        let transformer = ListingTransformer::with_config(TransformerConfig {
            cdn_image_base: "https://cdn.test/".to_string(),
            detail_url_base: "https://portal.test/l/".to_string(),
            ..Default::default()
        });
        let listing = transformer.transform(&RawRecord::new(json!({
            "slug": "the-quarters",
            "images": ["x.png"]
        })));

        assert_eq!(listing.images[0], "https://cdn.test/x.png");
        assert_eq!(listing.detail_url, "https://portal.test/l/the-quarters");
    }

    #[test]
    fn test_amenity_lists_keep_provenance() {
        let transformer = ListingTransformer::new();
        let listing = transformer.transform(&RawRecord::new(json!({
            "unitFeatures": ["Furnished"],
            "listingFeatures": ["Pool"],
            "utilities": ["Trash"],
        })));

        assert_eq!(listing.unit_features, vec!["Furnished"]);
        assert_eq!(listing.property_features, vec!["Pool"]);
        assert_eq!(listing.utilities, vec!["Trash"]);
        assert_eq!(listing.amenities, vec!["Furnished", "Pool", "Trash"]);
        assert!(listing.furnished);
        assert!(listing.has_pool);
    }
}
