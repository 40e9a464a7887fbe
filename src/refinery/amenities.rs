// * Amenity tag merging and feature-flag derivation.
// * The portal splits amenity-ish data across three free-text lists plus a
// * handful of structured source flags; this merges them into one tag set
// * and summarizes it as booleans via case-insensitive keyword search.

/// Pet policy values that grant the pets flag outright.
const PET_POLICIES: [&str; 2] = ["All Pets", "Some Pets"];

/// Structured source flags that feed the derived booleans alongside the
/// free-text tags.
#[derive(Debug, Clone, Default)]
pub struct AmenitySignals {
    /// Raw pets-allowed policy string, when present.
    pub pets_policy: Option<String>,
    /// Truthy parking-allowed source flag.
    pub parking: bool,
    /// Truthy laundry-allowed source flag.
    pub laundry: bool,
}

/// Boolean amenity summaries derived by keyword matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub pets_allowed: bool,
    pub furnished: bool,
    pub has_parking: bool,
    pub has_pool: bool,
    pub has_gym: bool,
    pub has_laundry: bool,
}

/// Unified amenity view: the merged tag sequence plus derived flags.
#[derive(Debug, Clone, Default)]
pub struct AmenityProfile {
    /// Concatenation of the three source lists in source order. Duplicates
    /// are kept: the provenance lists are retained separately on the
    /// listing, and deduplicating here would change the observable output.
    pub all_tags: Vec<String>,
    pub flags: FeatureFlags,
}

/// Merges the three raw amenity lists and derives feature flags.
pub struct AmenityExtractor;

impl AmenityExtractor {
    /// Tag substring search is case-insensitive and intentionally loose:
    /// "Garage Parking" and "Parking Garage" both set the parking flag, and
    /// a tag like "Carpeted Floors" matches "pet". That looseness is part of
    /// the observable contract.
    pub fn extract(
        unit_features: &[String],
        property_features: &[String],
        utilities: &[String],
        signals: &AmenitySignals,
    ) -> AmenityProfile {
        let all_tags: Vec<String> = unit_features
            .iter()
            .chain(property_features)
            .chain(utilities)
            .cloned()
            .collect();

        let text = all_tags.join(" ").to_lowercase();
        let policy_grants_pets = signals
            .pets_policy
            .as_deref()
            .map(|p| PET_POLICIES.contains(&p))
            .unwrap_or(false);

        let flags = FeatureFlags {
            pets_allowed: policy_grants_pets || text.contains("pet"),
            furnished: text.contains("furnished"),
            has_parking: signals.parking || text.contains("parking") || text.contains("garage"),
            has_pool: text.contains("pool") || text.contains("swim"),
            has_gym: text.contains("fitness") || text.contains("gym"),
            has_laundry: signals.laundry || text.contains("washer") || text.contains("laundry"),
        };

        AmenityProfile { all_tags, flags }
    }
}
