/// Geocoding provider client
///
/// Wraps a single outbound HTTP endpoint: given a street address, city, and
/// state, the client builds the provider query, performs one GET, and maps
/// the JSON body (or the absence of a match) into a [`GeocodeOutcome`].
///
/// Error policy follows two distinct paths:
///
/// - Invalid state input fails fast with [`GeocodeError::InvalidState`]
///   before any network call is made.
/// - Everything after the request is sent — transport errors, timeouts,
///   non-"OK" provider status, unparseable bodies — is recovered locally
///   into the fallback record and never surfaces as an error.
///
/// # Example
///
/// ```no_run
/// use carbonatlas_geocoder::GeocodingClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeocodingClient::new("api-key")?;
/// let outcome = client.geocode("123 Main St", "Anytown", "California").await?;
/// println!("{:?}", outcome.record());
/// # Ok(())
/// # }
/// ```

use std::time::Duration;

use futures::future::join_all;
use tracing::debug;

use crate::record::{GeocodeOutcome, GeocodeQuery, GeocodeRecord};
use crate::response::{extract_record, ProviderResponse, STATUS_OK};
use crate::states::{resolve_state, InvalidStateError};

/// Fixed provider endpoint for forward geocoding.
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Default per-request timeout. A timed-out request collapses to the
/// fallback record, the same as a provider miss.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for geocoding operations
///
/// Only pre-request conditions are errors; post-request failures are folded
/// into [`GeocodeOutcome::ParseFailed`].
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// State input matched neither a full name nor an abbreviation.
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),
}

/// Client for the forward-geocoding provider.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeocodingClient {
    /// Creates a client against the fixed provider endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::ClientInit`] if the HTTP client cannot be
    /// built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeocodeError> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Creates a client against a custom endpoint. Used by tests to point
    /// at a local mock server.
    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, GeocodeError> {
        Self::with_settings(api_key, endpoint, REQUEST_TIMEOUT)
    }

    /// Creates a client with an explicit per-request timeout. A request
    /// that exceeds it collapses to the fallback record, the same as any
    /// other transport failure.
    pub fn with_settings(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GeocodeError::ClientInit)?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }

    /// Builds the provider URI: address, city, and resolved abbreviation
    /// joined with commas, spaces replaced with `+`, plus the API key.
    fn build_uri(&self, address: &str, city: &str, state_abbr: &str) -> String {
        let joined = format!("{}, {}, {}", address, city, state_abbr).replace(' ', "+");
        format!("{}?address={}&key={}", self.endpoint, joined, self.api_key)
    }

    /// Geocodes a single address.
    ///
    /// One call performs one request/response cycle. The state may be a
    /// full name (any case) or a two-letter abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidState`] before any network call when
    /// the state is unrecognized. Network and parse failures do not error;
    /// they come back as [`GeocodeOutcome::ParseFailed`].
    pub async fn geocode(
        &self,
        address: &str,
        city: &str,
        state: &str,
    ) -> Result<GeocodeOutcome, GeocodeError> {
        let abbr = resolve_state(state)?;
        let uri = self.build_uri(address, city, &abbr);
        Ok(self.fetch_outcome(&uri, address, city, state).await)
    }

    /// Geocodes a batch of addresses concurrently.
    ///
    /// All underlying requests are issued in one scatter/gather and results
    /// come back in input order. A failing request only affects its own
    /// slot; the rest resolve independently.
    ///
    /// # Errors
    ///
    /// Every state is resolved up front, so an unrecognized state anywhere
    /// in the batch fails the whole call before any request is sent.
    pub async fn bulk_geocode(
        &self,
        queries: &[GeocodeQuery],
    ) -> Result<Vec<GeocodeOutcome>, GeocodeError> {
        let mut resolved = Vec::with_capacity(queries.len());
        for query in queries {
            resolved.push((query, resolve_state(&query.state)?));
        }

        let requests = resolved.iter().map(|(query, abbr)| {
            let uri = self.build_uri(&query.address, &query.city, abbr);
            async move {
                self.fetch_outcome(&uri, &query.address, &query.city, &query.state)
                    .await
            }
        });

        Ok(join_all(requests).await)
    }

    /// Performs the request/response cycle and folds every failure mode
    /// into an outcome carrying the fallback record. The fallback echoes
    /// the caller's raw inputs, so `state` here is the unresolved input,
    /// not the abbreviation the request was built with.
    async fn fetch_outcome(
        &self,
        uri: &str,
        address: &str,
        city: &str,
        state: &str,
    ) -> GeocodeOutcome {
        let response = match self.http.get(uri).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "geocoding request failed");
                return GeocodeOutcome::ParseFailed(GeocodeRecord::fallback(address, city, state));
            }
        };

        let body: ProviderResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "geocoding response body was not valid JSON");
                return GeocodeOutcome::ParseFailed(GeocodeRecord::fallback(address, city, state));
            }
        };

        if body.status != STATUS_OK {
            debug!(status = %body.status, "geocoding provider returned no match");
            return GeocodeOutcome::NoMatch(GeocodeRecord::fallback(address, city, state));
        }

        match extract_record(&body) {
            Some(record) => GeocodeOutcome::Matched(record),
            None => {
                debug!("geocoding response had no extractable result");
                GeocodeOutcome::ParseFailed(GeocodeRecord::fallback(address, city, state))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GeocodingClient {
        GeocodingClient::new("test-key").expect("client should build")
    }

    #[test]
    fn test_build_uri_joins_and_encodes() {
        let client = test_client();
        let uri = client.build_uri("123 Main St", "Anytown", "CA");

        assert_eq!(
            uri,
            format!(
                "{}?address=123+Main+St,+Anytown,+CA&key=test-key",
                DEFAULT_ENDPOINT
            )
        );
    }

    #[tokio::test]
    async fn test_invalid_state_fails_before_network() {
        // Endpoint that cannot be reached: if resolution failed to short
        // circuit, this would error differently or hang
        let client = GeocodingClient::with_endpoint("k", "http://127.0.0.1:1/geocode")
            .expect("client should build");

        let result = client.geocode("1 A St", "Town", "Atlantis").await;
        assert!(matches!(result, Err(GeocodeError::InvalidState(_))));
    }

    #[tokio::test]
    async fn test_bulk_invalid_state_fails_whole_call() {
        let client = GeocodingClient::with_endpoint("k", "http://127.0.0.1:1/geocode")
            .expect("client should build");

        let queries = vec![
            GeocodeQuery::new("1 A St", "Town", "CA"),
            GeocodeQuery::new("2 B St", "Town", "Atlantis"),
        ];

        let result = client.bulk_geocode(&queries).await;
        assert!(matches!(result, Err(GeocodeError::InvalidState(_))));
    }

    // Full request/response behavior is covered in tests/geocode_tests.rs
    // against a mock provider.
}
