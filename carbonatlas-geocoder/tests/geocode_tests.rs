/// Integration tests for the geocoding client
///
/// These tests run the full request/response cycle against a local mock of
/// the provider endpoint. No real network access is required.

use carbonatlas_geocoder::{GeocodeOutcome, GeocodeQuery, GeocodeRecord, GeocodingClient};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> GeocodingClient {
    GeocodingClient::with_endpoint("test-key", format!("{}/geocode", server.base_url()))
        .expect("client should build")
}

fn ok_body(
    street_number: &str,
    route: &str,
    city: &str,
    state: &str,
    zip: &str,
    lat: f64,
    lng: f64,
) -> serde_json::Value {
    json!({
        "status": "OK",
        "results": [
            {
                "types": ["street_address"],
                "address_components": [
                    {"types": ["street_number"], "short_name": street_number},
                    {"types": ["route"], "short_name": route},
                    {"types": ["locality", "political"], "short_name": city},
                    {"types": ["administrative_area_level_1", "political"], "short_name": state},
                    {"types": ["postal_code"], "short_name": zip}
                ],
                "geometry": {"location": {"lat": lat, "lng": lng}}
            }
        ]
    })
}

#[tokio::test]
async fn test_geocode_success_extracts_all_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/geocode")
            .query_param("key", "test-key");
        then.status(200)
            .json_body(ok_body("123", "Main St", "Anytown", "CA", "90210", 34.0, -118.0));
    });

    let client = client_for(&server);
    let outcome = client
        .geocode("123 Main Street", "Anytown", "California")
        .await
        .expect("state should resolve");

    mock.assert();

    let record = outcome.record().clone();
    assert!(outcome.is_matched());
    assert_eq!(record.address.as_deref(), Some("123 Main St"));
    assert_eq!(record.city.as_deref(), Some("Anytown"));
    assert_eq!(record.state.as_deref(), Some("CA"));
    assert_eq!(record.zip_code.as_deref(), Some("90210"));
    assert_eq!(record.latitude, Some(34.0));
    assert_eq!(record.longitude, Some(-118.0));
}

#[tokio::test]
async fn test_geocode_state_full_name_and_abbreviation_build_same_query() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/geocode")
            .query_param("address", "1 Elm St, Provo, UT");
        then.status(200)
            .json_body(ok_body("1", "Elm St", "Provo", "UT", "84601", 40.2, -111.7));
    });

    let client = client_for(&server);

    // Full name, abbreviation, and odd casing all resolve to the same code
    for state in ["Utah", "utah", "UT", "ut"] {
        let outcome = client
            .geocode("1 Elm St", "Provo", state)
            .await
            .expect("state should resolve");
        assert!(outcome.is_matched());
    }

    mock.assert_hits(4);
}

#[tokio::test]
async fn test_geocode_no_match_echoes_input() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geocode");
        then.status(200)
            .json_body(json!({"status": "ZERO_RESULTS", "results": []}));
    });

    let client = client_for(&server);

    // The echo carries the state as the caller wrote it, not the
    // resolved abbreviation the request was built with
    let outcome = client
        .geocode("999 Nowhere Rd", "Ghosttown", "Nevada")
        .await
        .expect("state should resolve");

    assert!(matches!(outcome, GeocodeOutcome::NoMatch(_)));
    assert_eq!(
        outcome.into_record(),
        GeocodeRecord::fallback("999 Nowhere Rd", "Ghosttown", "Nevada")
    );

    let outcome = client
        .geocode("999 Nowhere Rd", "Ghosttown", "NV")
        .await
        .expect("state should resolve");
    assert_eq!(
        outcome.into_record(),
        GeocodeRecord::fallback("999 Nowhere Rd", "Ghosttown", "NV")
    );
}

#[tokio::test]
async fn test_geocode_malformed_body_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geocode");
        then.status(200).body("not json at all");
    });

    let client = client_for(&server);
    let outcome = client
        .geocode("1 A St", "Town", "CA")
        .await
        .expect("state should resolve");

    assert!(matches!(outcome, GeocodeOutcome::ParseFailed(_)));
    assert_eq!(
        outcome.into_record(),
        GeocodeRecord::fallback("1 A St", "Town", "CA")
    );
}

#[tokio::test]
async fn test_geocode_missing_postal_code_leaves_field_absent() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geocode");
        then.status(200).json_body(json!({
            "status": "OK",
            "results": [
                {
                    "types": ["street_address"],
                    "address_components": [
                        {"types": ["street_number"], "short_name": "42"},
                        {"types": ["route"], "short_name": "Birch Blvd"},
                        {"types": ["locality"], "short_name": "Riverton"},
                        {"types": ["administrative_area_level_1"], "short_name": "OR"}
                    ],
                    "geometry": {"location": {"lat": 45.5, "lng": -122.6}}
                }
            ]
        }));
    });

    let client = client_for(&server);
    let outcome = client
        .geocode("42 Birch Blvd", "Riverton", "Oregon")
        .await
        .expect("state should resolve");

    let record = outcome.into_record();
    assert!(record.zip_code.is_none());
    assert_eq!(record.address.as_deref(), Some("42 Birch Blvd"));
    assert_eq!(record.city.as_deref(), Some("Riverton"));
    assert_eq!(record.state.as_deref(), Some("OR"));
    assert_eq!(record.latitude, Some(45.5));
}

#[tokio::test]
async fn test_geocode_timeout_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geocode");
        then.status(200)
            .delay(std::time::Duration::from_millis(500))
            .json_body(ok_body("1", "Slow St", "Lagville", "CA", "90210", 34.0, -118.0));
    });

    // Timeout far below the mock's delay: the request is abandoned and
    // the outcome is the same fallback as any other transport failure
    let client = GeocodingClient::with_settings(
        "test-key",
        format!("{}/geocode", server.base_url()),
        std::time::Duration::from_millis(50),
    )
    .expect("client should build");

    let outcome = client
        .geocode("1 Slow St", "Lagville", "California")
        .await
        .expect("state should resolve");

    assert!(matches!(outcome, GeocodeOutcome::ParseFailed(_)));
    assert_eq!(
        outcome.into_record(),
        GeocodeRecord::fallback("1 Slow St", "Lagville", "California")
    );
}

#[tokio::test]
async fn test_bulk_geocode_preserves_order_and_isolates_failures() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/geocode")
            .query_param("address", "1 First St, Alpha, CA");
        then.status(200)
            .json_body(ok_body("1", "First St", "Alpha", "CA", "90001", 34.1, -118.1));
    });

    // Second address: the provider blows up with a non-JSON error page
    server.mock(|when, then| {
        when.method(GET)
            .path("/geocode")
            .query_param("address", "2 Second St, Beta, CA");
        then.status(500).body("internal provider error");
    });

    server.mock(|when, then| {
        when.method(GET)
            .path("/geocode")
            .query_param("address", "3 Third St, Gamma, CA");
        then.status(200)
            .json_body(ok_body("3", "Third St", "Gamma", "CA", "90003", 34.3, -118.3));
    });

    let client = client_for(&server);
    let queries = vec![
        GeocodeQuery::new("1 First St", "Alpha", "California"),
        GeocodeQuery::new("2 Second St", "Beta", "California"),
        GeocodeQuery::new("3 Third St", "Gamma", "ca"),
    ];

    let outcomes = client
        .bulk_geocode(&queries)
        .await
        .expect("all states should resolve");

    assert_eq!(outcomes.len(), 3);

    // First and third resolved normally, in input order
    assert!(outcomes[0].is_matched());
    assert_eq!(outcomes[0].record().zip_code.as_deref(), Some("90001"));
    assert!(outcomes[2].is_matched());
    assert_eq!(outcomes[2].record().zip_code.as_deref(), Some("90003"));

    // The failing slot collapsed to its own fallback without touching the
    // rest, echoing its state exactly as the caller wrote it
    assert!(matches!(outcomes[1], GeocodeOutcome::ParseFailed(_)));
    assert_eq!(
        outcomes[1].record(),
        &GeocodeRecord::fallback("2 Second St", "Beta", "California")
    );
}

#[tokio::test]
async fn test_bulk_geocode_empty_input() {
    let server = MockServer::start();
    let client = client_for(&server);

    let outcomes = client.bulk_geocode(&[]).await.expect("empty batch is fine");
    assert!(outcomes.is_empty());
}
