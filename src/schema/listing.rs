// * Normalized listing model — the pipeline's unit of output.
// * Field names are fixed by the downstream artifact consumers (camelCase,
// * matching the portal-era export format); do not rename.

use serde::{Deserialize, Serialize};

/// Closed set of campus-area neighborhood labels.
///
/// Assigned by the classifier from heuristic bounding boxes and address
/// keywords; best-effort, not authoritative. Boundary addresses may land in
/// an adjacent bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighborhood {
    #[serde(rename = "West Campus")]
    WestCampus,
    #[serde(rename = "North Campus")]
    NorthCampus,
    #[serde(rename = "Hyde Park")]
    HydePark,
    #[serde(rename = "East Campus")]
    EastCampus,
    #[serde(rename = "Riverside")]
    Riverside,
    #[serde(rename = "Far Campus")]
    FarCampus,
    #[serde(rename = "Other")]
    Other,
}

impl Neighborhood {
    /// Display string, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Neighborhood::WestCampus => "West Campus",
            Neighborhood::NorthCampus => "North Campus",
            Neighborhood::HydePark => "Hyde Park",
            Neighborhood::EastCampus => "East Campus",
            Neighborhood::Riverside => "Riverside",
            Neighborhood::FarCampus => "Far Campus",
            Neighborhood::Other => "Other",
        }
    }
}

/// One priced unit configuration within a listing.
///
/// Zero-value defaults (not dropped entries) keep the floorplan array aligned
/// with the raw source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floorplan {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub rent_min: f64,
    pub rent_max: f64,
    pub sqft: Option<u32>,
}

/// Structured postal components extracted from a free-text address.
///
/// All fields are always populated; unparseable input degrades to the
/// campus-area defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// The pipeline's validated, defaulted, typed output record.
///
/// Created once per run from a raw portal record and never mutated
/// afterwards; serialized whole into the output artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    // * Identity
    pub id: i64,
    pub name: String,
    pub slug: String,

    // * Location
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,

    // * Pricing
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub price_per_person: bool,

    // * Bedroom/bathroom ranges
    pub bedroom_min: u32,
    pub bedroom_max: u32,
    pub bathroom_min: u32,
    pub bathroom_max: u32,

    // * Contact
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,

    // * Distance to campus, in walking minutes
    pub walk_time: Option<u32>,

    // * Media
    pub image_url: Option<String>,
    pub images: Vec<String>,

    // * Classification
    pub neighborhood: Neighborhood,
    pub category: String,

    pub description: Option<String>,

    // * Amenities: merged tag set plus the three provenance lists
    pub amenities: Vec<String>,
    pub unit_features: Vec<String>,
    pub property_features: Vec<String>,
    pub utilities: Vec<String>,

    pub floorplans: Vec<Floorplan>,

    // * Derived feature flags
    pub pets_allowed: bool,
    pub furnished: bool,
    pub has_parking: bool,
    pub has_pool: bool,
    pub has_gym: bool,
    pub has_laundry: bool,

    pub detail_url: String,
}

impl Listing {
    /// Final validity invariant: mappable coordinates and a usable name.
    /// Records failing this are dropped at the pipeline boundary.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.latitude != 0.0 && self.longitude != 0.0
    }

    /// Whether any price could be derived from the source data.
    pub fn has_price(&self) -> bool {
        self.price_min.is_some()
    }

    /// Human-readable price for summaries; "Call for price" when no numeric
    /// price survived resolution.
    pub fn price_label(&self) -> String {
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) if max != min => format!("${min}-${max}"),
            (Some(min), _) => format!("${min}"),
            (None, _) => "Call for price".to_string(),
        }
    }

    /// Converts the listing to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
