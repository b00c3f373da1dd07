/// Normalized geocoding output types
///
/// A [`GeocodeRecord`] is the flat record handed to callers regardless of how
/// the provider call went. [`GeocodeOutcome`] wraps it and preserves how the
/// record was produced (confident match, provider miss, or a response we
/// could not make sense of) so tests and diagnostics can tell them apart.

use serde::{Deserialize, Serialize};

/// A single geocoding request: street address, city, and a state given as
/// either a full name ("california") or an abbreviation ("CA").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeQuery {
    /// Street address, e.g. "123 Main St"
    pub address: String,

    /// City name
    pub city: String,

    /// State full name or two-letter abbreviation (any case)
    pub state: String,
}

impl GeocodeQuery {
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

/// Flat, normalized geocoding record
///
/// On a confident match every field is populated from the provider's
/// address components and geometry; any component the provider omitted is
/// left absent. On a miss or unparseable response the input address, city,
/// and state are echoed back and the derived fields stay absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeRecord {
    /// Street number and route, joined with a space and trimmed
    pub address: Option<String>,

    /// Locality short name
    pub city: Option<String>,

    /// First-level administrative area short name (two-letter state code)
    pub state: Option<String>,

    /// Postal code short name
    pub zip_code: Option<String>,

    /// Latitude from the result geometry
    pub latitude: Option<f64>,

    /// Longitude from the result geometry
    pub longitude: Option<f64>,
}

impl GeocodeRecord {
    /// Builds the fallback record: inputs echoed, derived fields absent.
    pub fn fallback(address: &str, city: &str, state: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            zip_code: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// How a [`GeocodeRecord`] was produced
///
/// All three variants carry the same record shape, so callers that only want
/// the flat record can call [`GeocodeOutcome::into_record`] and ignore the
/// distinction. Tests assert on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GeocodeOutcome {
    /// The provider returned a usable result and extraction succeeded.
    Matched(GeocodeRecord),

    /// The provider answered with a status other than "OK".
    NoMatch(GeocodeRecord),

    /// Transport failure, timeout, or a response we could not extract
    /// fields from. Collapses to the same fallback shape as a miss.
    ParseFailed(GeocodeRecord),
}

impl GeocodeOutcome {
    /// Borrows the record regardless of variant.
    pub fn record(&self) -> &GeocodeRecord {
        match self {
            GeocodeOutcome::Matched(r)
            | GeocodeOutcome::NoMatch(r)
            | GeocodeOutcome::ParseFailed(r) => r,
        }
    }

    /// Consumes the outcome, yielding the flat record.
    pub fn into_record(self) -> GeocodeRecord {
        match self {
            GeocodeOutcome::Matched(r)
            | GeocodeOutcome::NoMatch(r)
            | GeocodeOutcome::ParseFailed(r) => r,
        }
    }

    /// True only for a confident provider match.
    pub fn is_matched(&self) -> bool {
        matches!(self, GeocodeOutcome::Matched(_))
    }
}
