/// Geocoding endpoints
///
/// Thin wrappers over the geocoding client. An unrecognized state is the
/// only client error (400); provider misses and unparseable responses come
/// back as 200 with the fallback record.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use carbonatlas_geocoder::{GeocodeQuery, GeocodeRecord};

use crate::app::AppState;
use crate::error::ApiResult;
use crate::routes::validate_request;

/// Single geocode request body
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct GeocodeRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,

    /// Full state name or two-letter abbreviation
    #[validate(length(min = 1, message = "must not be empty"))]
    pub state: String,
}

/// Bulk geocode request body
#[derive(Debug, Deserialize, Validate)]
pub struct BulkGeocodeRequest {
    #[validate(length(max = 100, message = "at most 100 addresses per call"))]
    pub addresses: Vec<GeocodeRequest>,
}

/// Geocode response: the flat record plus whether the provider matched
#[derive(Debug, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(flatten)]
    pub record: GeocodeRecord,

    /// True only when the provider returned a usable match
    pub matched: bool,
}

/// POST /v1/geocode
pub async fn geocode(
    State(state): State<AppState>,
    Json(body): Json<GeocodeRequest>,
) -> ApiResult<Json<GeocodeResponse>> {
    validate_request(&body)?;

    let outcome = state
        .geocoder
        .geocode(&body.address, &body.city, &body.state)
        .await?;

    let matched = outcome.is_matched();
    Ok(Json(GeocodeResponse {
        record: outcome.into_record(),
        matched,
    }))
}

/// POST /v1/geocode/bulk
///
/// Results come back in input order. An unrecognized state anywhere in the
/// batch rejects the whole call before any provider request is sent.
pub async fn geocode_bulk(
    State(state): State<AppState>,
    Json(body): Json<BulkGeocodeRequest>,
) -> ApiResult<Json<Vec<GeocodeResponse>>> {
    validate_request(&body)?;
    for entry in &body.addresses {
        validate_request(entry)?;
    }

    let queries: Vec<GeocodeQuery> = body
        .addresses
        .iter()
        .map(|entry| {
            GeocodeQuery::new(
                entry.address.as_str(),
                entry.city.as_str(),
                entry.state.as_str(),
            )
        })
        .collect();

    let outcomes = state.geocoder.bulk_geocode(&queries).await?;

    let responses = outcomes
        .into_iter()
        .map(|outcome| {
            let matched = outcome.is_matched();
            GeocodeResponse {
                record: outcome.into_record(),
                matched,
            }
        })
        .collect();

    Ok(Json(responses))
}
