/// Provider response parsing and field extraction
///
/// The provider returns a JSON body with a `status` field and, on "OK", a
/// `results` array of address objects. This module deserializes that shape
/// and extracts the normalized [`GeocodeRecord`] fields from it.
///
/// Extraction rules:
///
/// - Prefer the first result whose `types` includes `"street_address"`,
///   otherwise use the first result unconditionally.
/// - Street number, route, locality, first-level administrative area, and
///   postal code are each scanned independently; the first component whose
///   `types` contains the tag wins, and a missing component leaves the
///   output field absent rather than failing extraction.
/// - Latitude and longitude come from the result's geometry block, if any.

use serde::Deserialize;

use crate::record::GeocodeRecord;

/// Provider status value indicating at least one result.
pub(crate) const STATUS_OK: &str = "OK";

/// Top-level provider response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderResponse {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub results: Vec<ProviderResult>,
}

/// One candidate result from the provider.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderResult {
    #[serde(default)]
    pub types: Vec<String>,

    #[serde(default)]
    pub address_components: Vec<AddressComponent>,

    pub geometry: Option<Geometry>,
}

/// A typed fragment of a structured address.
#[derive(Debug, Deserialize)]
pub(crate) struct AddressComponent {
    #[serde(default)]
    pub types: Vec<String>,

    pub short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl ProviderResult {
    /// First component carrying the given type tag, by short name.
    fn component(&self, tag: &str) -> Option<String> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == tag))
            .and_then(|c| c.short_name.clone())
    }
}

/// Extracts the normalized record from a provider response.
///
/// Returns `None` when the response carries no results at all; the caller
/// treats that the same as any other extraction failure.
pub(crate) fn extract_record(response: &ProviderResponse) -> Option<GeocodeRecord> {
    let result = response
        .results
        .iter()
        .find(|r| r.types.iter().any(|t| t == "street_address"))
        .or_else(|| response.results.first())?;

    let street_number = result.component("street_number").unwrap_or_default();
    let route = result.component("route").unwrap_or_default();
    let address = format!("{} {}", street_number, route).trim().to_string();

    let location = result.geometry.as_ref().and_then(|g| g.location.as_ref());

    Some(GeocodeRecord {
        address: Some(address),
        city: result.component("locality"),
        state: result.component("administrative_area_level_1"),
        zip_code: result.component("postal_code"),
        latitude: location.map(|l| l.lat),
        longitude: location.map(|l| l.lng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> &'static str {
        r#"{
            "status": "OK",
            "results": [
                {
                    "types": ["street_address"],
                    "address_components": [
                        {"types": ["street_number"], "short_name": "123"},
                        {"types": ["route"], "short_name": "Main St"},
                        {"types": ["locality", "political"], "short_name": "Anytown"},
                        {"types": ["administrative_area_level_1", "political"], "short_name": "CA"},
                        {"types": ["postal_code"], "short_name": "90210"}
                    ],
                    "geometry": {"location": {"lat": 34.0, "lng": -118.0}}
                }
            ]
        }"#
    }

    #[test]
    fn test_extract_complete_result() {
        let response: ProviderResponse = serde_json::from_str(sample_body()).unwrap();
        let record = extract_record(&response).unwrap();

        assert_eq!(record.address.as_deref(), Some("123 Main St"));
        assert_eq!(record.city.as_deref(), Some("Anytown"));
        assert_eq!(record.state.as_deref(), Some("CA"));
        assert_eq!(record.zip_code.as_deref(), Some("90210"));
        assert_eq!(record.latitude, Some(34.0));
        assert_eq!(record.longitude, Some(-118.0));
    }

    #[test]
    fn test_prefers_street_address_result() {
        let body = r#"{
            "status": "OK",
            "results": [
                {
                    "types": ["route"],
                    "address_components": [
                        {"types": ["route"], "short_name": "Wrong Rd"}
                    ],
                    "geometry": null
                },
                {
                    "types": ["premise", "street_address"],
                    "address_components": [
                        {"types": ["street_number"], "short_name": "7"},
                        {"types": ["route"], "short_name": "Right Ave"}
                    ],
                    "geometry": null
                }
            ]
        }"#;

        let response: ProviderResponse = serde_json::from_str(body).unwrap();
        let record = extract_record(&response).unwrap();
        assert_eq!(record.address.as_deref(), Some("7 Right Ave"));
    }

    #[test]
    fn test_falls_back_to_first_result() {
        let body = r#"{
            "status": "OK",
            "results": [
                {
                    "types": ["route"],
                    "address_components": [
                        {"types": ["route"], "short_name": "Lone Rd"}
                    ],
                    "geometry": {"location": {"lat": 1.5, "lng": -2.5}}
                }
            ]
        }"#;

        let response: ProviderResponse = serde_json::from_str(body).unwrap();
        let record = extract_record(&response).unwrap();

        // No street number: the joined address trims down to the route alone
        assert_eq!(record.address.as_deref(), Some("Lone Rd"));
        assert_eq!(record.latitude, Some(1.5));
        assert_eq!(record.longitude, Some(-2.5));
    }

    #[test]
    fn test_missing_components_stay_absent() {
        let body = r#"{
            "status": "OK",
            "results": [
                {
                    "types": ["street_address"],
                    "address_components": [
                        {"types": ["street_number"], "short_name": "9"},
                        {"types": ["route"], "short_name": "Oak Ln"},
                        {"types": ["locality"], "short_name": "Smallville"}
                    ],
                    "geometry": {"location": {"lat": 40.0, "lng": -90.0}}
                }
            ]
        }"#;

        let response: ProviderResponse = serde_json::from_str(body).unwrap();
        let record = extract_record(&response).unwrap();

        assert_eq!(record.address.as_deref(), Some("9 Oak Ln"));
        assert_eq!(record.city.as_deref(), Some("Smallville"));
        assert!(record.state.is_none());
        assert!(record.zip_code.is_none());
        assert_eq!(record.latitude, Some(40.0));
    }

    #[test]
    fn test_missing_geometry() {
        let body = r#"{
            "status": "OK",
            "results": [
                {
                    "types": ["street_address"],
                    "address_components": [
                        {"types": ["street_number"], "short_name": "5"},
                        {"types": ["route"], "short_name": "Pine St"}
                    ]
                }
            ]
        }"#;

        let response: ProviderResponse = serde_json::from_str(body).unwrap();
        let record = extract_record(&response).unwrap();

        assert_eq!(record.address.as_deref(), Some("5 Pine St"));
        assert!(record.latitude.is_none());
        assert!(record.longitude.is_none());
    }

    #[test]
    fn test_empty_results_yields_none() {
        let body = r#"{"status": "OK", "results": []}"#;
        let response: ProviderResponse = serde_json::from_str(body).unwrap();
        assert!(extract_record(&response).is_none());
    }
}
