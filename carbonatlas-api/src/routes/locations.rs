/// Location CRUD endpoints
///
/// Locations support exact-match filtering by state on the list endpoint
/// and in-place updates; setting `state` to null in a PATCH clears it.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use carbonatlas_geocoder::resolve_state;
use carbonatlas_shared::models::location::{CreateLocation, Location, UpdateLocation};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::routes::validate_request;

/// Query parameters for listing locations
#[derive(Debug, Deserialize)]
pub struct LocationListParams {
    /// Filter by state, full name or two-letter code
    pub state: Option<String>,

    pub limit: Option<i64>,

    pub offset: Option<i64>,
}

/// Request body for creating a location
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub address: String,

    /// State, full name or two-letter code; normalized to the code
    pub state: Option<String>,
}

/// Request body for updating a location
///
/// `state` distinguishes absent (leave unchanged) from null (clear).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub state: Option<Option<String>>,
}

/// Distinguishes an absent field (outer None) from an explicit null
/// (Some(None)): a field that is present, even as null, passes through
/// this deserializer and lands in the outer Some.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// List response
#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub locations: Vec<Location>,
}

fn normalize_state(raw: &str) -> Result<String, ApiError> {
    resolve_state(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// GET /v1/locations
///
/// With `?state=`, returns locations in that state (the filter accepts a
/// full state name or a code and normalizes it first).
pub async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<LocationListParams>,
) -> ApiResult<Json<LocationListResponse>> {
    let locations = match &params.state {
        Some(raw) => {
            let abbr = normalize_state(raw)?;
            Location::list_by_state(&state.db, &abbr).await?
        }
        None => {
            let limit = params.limit.unwrap_or(50).clamp(1, 100);
            let offset = params.offset.unwrap_or(0).max(0);
            Location::list(&state.db, limit, offset).await?
        }
    };

    Ok(Json(LocationListResponse { locations }))
}

/// GET /v1/locations/:id
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Location>> {
    let location = Location::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Location {} not found", id)))?;

    Ok(Json(location))
}

/// POST /v1/locations
pub async fn create_location(
    State(state): State<AppState>,
    Json(body): Json<CreateLocationRequest>,
) -> ApiResult<(StatusCode, Json<Location>)> {
    validate_request(&body)?;

    let normalized = match body.state.as_deref() {
        Some(raw) => Some(normalize_state(raw)?),
        None => None,
    };

    let location = Location::create(
        &state.db,
        CreateLocation {
            address: body.address,
            state: normalized,
        },
    )
    .await?;

    tracing::info!(location_id = %location.id, "location created");

    Ok((StatusCode::CREATED, Json(location)))
}

/// PATCH /v1/locations/:id
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateLocationRequest>,
) -> ApiResult<Json<Location>> {
    validate_request(&body)?;

    let normalized = match body.state {
        Some(Some(ref raw)) => Some(Some(normalize_state(raw)?)),
        Some(None) => Some(None),
        None => None,
    };

    let location = Location::update(
        &state.db,
        id,
        UpdateLocation {
            address: body.address,
            state: normalized,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Location {} not found", id)))?;

    Ok(Json(location))
}

/// DELETE /v1/locations/:id
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = Location::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Location {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
