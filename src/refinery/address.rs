// * Address component extraction.
// * Portal addresses arrive as one free-text line ("701 West 28th Street
// * Austin, TX 78705 USA"). Extraction chain: zip -> state -> city -> street,
// * each falling back to a campus-area default so parsing never fails.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::constants::{DEFAULT_CITY, DEFAULT_STATE, DEFAULT_ZIP};
use crate::schema::ParsedAddress;

// * Precompiled patterns for the postal components
static PATTERN_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{5})(?:-\d{4})?$").expect("Invalid zip regex"));

static PATTERN_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",?\s*([A-Z]{2})\s+\d{5}").expect("Invalid state regex"));

// * Single-token city capture. A letters-and-spaces run would swallow
// * trailing street words ("24th Street Austin"); one word immediately
// * before the state+zip is the city for campus-area addresses.
static PATTERN_CITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+),?\s*[A-Z]{2}\s+\d{5}").expect("Invalid city regex"));

/// Fallback postal components for unparseable addresses.
#[derive(Debug, Clone)]
pub struct PostalDefaults {
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Default for PostalDefaults {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            state: DEFAULT_STATE.to_string(),
            zip: DEFAULT_ZIP.to_string(),
        }
    }
}

/// Extracts structured postal components from a free-text address.
///
/// Total: every input (including the empty string) yields a populated
/// [`ParsedAddress`]; city, state, and zip degrade to the configured
/// defaults when absent.
pub struct AddressParser {
    defaults: PostalDefaults,
}

impl AddressParser {
    /// Creates a parser with the campus-area defaults.
    pub fn new() -> Self {
        Self {
            defaults: PostalDefaults::default(),
        }
    }

    /// Creates a parser with custom fallback components.
    pub fn with_defaults(defaults: PostalDefaults) -> Self {
        Self { defaults }
    }

    pub fn parse(&self, full_address: &str) -> ParsedAddress {
        // * Strip the country marker before positional matching
        let stripped = full_address.replacen(" USA", "", 1);
        let parts = stripped.trim();

        let zip = PATTERN_ZIP
            .captures(parts)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| self.defaults.zip.clone());

        let state = PATTERN_STATE
            .captures(parts)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| self.defaults.state.clone());

        let city = PATTERN_CITY
            .captures(parts)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_else(|| self.defaults.city.clone());

        // * Street is everything before the first occurrence of the city.
        // * When the city cannot be located at a positive offset, the whole
        // * (country-stripped) input is kept as the street.
        let street = match parts.find(city.as_str()) {
            Some(idx) if idx > 0 => {
                let prefix = parts[..idx].trim();
                prefix.strip_suffix(',').unwrap_or(prefix).trim_end().to_string()
            }
            _ => parts.to_string(),
        };

        ParsedAddress {
            street,
            city,
            state,
            zip,
        }
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}
