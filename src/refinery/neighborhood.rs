// * Neighborhood classification.
// * Heuristic, best-effort: hardcoded bounding boxes are checked first
// * (reliable when geocoding succeeded), then address keywords recover a
// * label when coordinates are missing. Boundary addresses may misclassify.
// * Thresholds are empirical; tune them in the rule tables, not in the
// * matching logic.

use crate::schema::Neighborhood;

/// One geographic rule: a (partially) bounded lat/lng box mapping to a label.
///
/// Unset bounds are unconstrained; set bounds are strict inequalities and
/// only match when the coordinate is present.
#[derive(Debug, Clone)]
pub struct GeoRule {
    pub label: Neighborhood,
    pub lat_min: Option<f64>,
    pub lat_max: Option<f64>,
    pub lng_min: Option<f64>,
    pub lng_max: Option<f64>,
}

impl GeoRule {
    fn matches(&self, lat: Option<f64>, lng: Option<f64>) -> bool {
        Self::within(lat, self.lat_min, self.lat_max) && Self::within(lng, self.lng_min, self.lng_max)
    }

    fn within(coord: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
        if min.is_none() && max.is_none() {
            return true;
        }
        let Some(value) = coord else {
            // * A bounded axis cannot match a missing coordinate
            return false;
        };
        min.map_or(true, |m| value > m) && max.map_or(true, |m| value < m)
    }
}

/// One textual rule: lowercased address substring keywords mapping to a label.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub label: Neighborhood,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    fn matches(&self, lowercased_address: &str) -> bool {
        self.keywords.iter().any(|k| lowercased_address.contains(k.as_str()))
    }
}

/// Ordered rule tables; first match wins.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub geo_rules: Vec<GeoRule>,
    pub keyword_rules: Vec<KeywordRule>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            geo_rules: vec![
                // * West Campus: west of Guadalupe, north of MLK
                GeoRule {
                    label: Neighborhood::WestCampus,
                    lat_min: Some(30.28),
                    lat_max: Some(30.295),
                    lng_min: Some(-97.755),
                    lng_max: Some(-97.735),
                },
                // * North Campus: north of 30th St
                GeoRule {
                    label: Neighborhood::NorthCampus,
                    lat_min: Some(30.295),
                    lat_max: Some(30.315),
                    lng_min: Some(-97.75),
                    lng_max: Some(-97.72),
                },
                // * Hyde Park: further north
                GeoRule {
                    label: Neighborhood::HydePark,
                    lat_min: Some(30.3),
                    lat_max: None,
                    lng_min: Some(-97.735),
                    lng_max: Some(-97.71),
                },
                // * East Campus: east of I-35
                GeoRule {
                    label: Neighborhood::EastCampus,
                    lat_min: None,
                    lat_max: None,
                    lng_min: Some(-97.72),
                    lng_max: None,
                },
                // * Riverside: south of the river
                GeoRule {
                    label: Neighborhood::Riverside,
                    lat_min: None,
                    lat_max: Some(30.25),
                    lng_min: None,
                    lng_max: None,
                },
                // * Far West / Far Campus
                GeoRule {
                    label: Neighborhood::FarCampus,
                    lat_min: None,
                    lat_max: None,
                    lng_min: None,
                    lng_max: Some(-97.76),
                },
            ],
            keyword_rules: vec![
                KeywordRule {
                    label: Neighborhood::WestCampus,
                    keywords: ["west", "rio grande", "nueces", "pearl", "san antonio"]
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                },
                KeywordRule {
                    label: Neighborhood::NorthCampus,
                    keywords: ["speedway", "duval", "avenue"]
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                },
            ],
        }
    }
}

/// Assigns a campus-area neighborhood label from coordinates and/or address
/// text.
///
/// Pure function of its inputs: rules are evaluated in fixed priority order
/// and short-circuit on the first match, so identical inputs always yield
/// the identical label.
pub struct NeighborhoodClassifier {
    config: ClassifierConfig,
}

impl NeighborhoodClassifier {
    /// Creates a classifier with the default campus rule tables.
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }

    /// Creates a classifier with custom rule tables.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, address: &str, lat: Option<f64>, lng: Option<f64>) -> Neighborhood {
        for rule in &self.config.geo_rules {
            if rule.matches(lat, lng) {
                return rule.label;
            }
        }

        let addr = address.to_lowercase();
        for rule in &self.config.keyword_rules {
            if rule.matches(&addr) {
                return rule.label;
            }
        }

        Neighborhood::Other
    }
}

impl Default for NeighborhoodClassifier {
    fn default() -> Self {
        Self::new()
    }
}
