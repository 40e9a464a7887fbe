// * Configuration Constants
// * Central location for the portal URL templates and campus-area defaults.
// * These values are artifact compatibility constants: downstream consumers
// * key off them, so they must not drift.

// * CDN base path for listing slider images
pub const SLIDER_IMAGE_CDN_BASE: &str =
    "https://rcp-prod-uploads.s3.amazonaws.com/property_images/slider_images/";

// * Source portal detail-page base; the listing slug is appended
pub const LISTING_DETAIL_BASE: &str = "https://housing.offcampus.utexas.edu/listing/";

// * Source portal listing index page (default acquisition endpoint)
pub const LISTING_INDEX_URL: &str = "https://housing.offcampus.utexas.edu/listing";

// * Campus-area postal defaults applied when an address cannot be parsed
pub const DEFAULT_CITY: &str = "Austin";
pub const DEFAULT_STATE: &str = "TX";
pub const DEFAULT_ZIP: &str = "78705";

// * Fallback listing name when the source record carries no title
pub const DEFAULT_LISTING_NAME: &str = "Unknown";

// * Fallback listing category
pub const DEFAULT_CATEGORY: &str = "Apartment";

// * Default output artifact path
pub const DEFAULT_ARTIFACT_PATH: &str = "scraped-apartments.json";
