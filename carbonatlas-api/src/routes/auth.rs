/// Registration and login endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use validator::Validate;

use carbonatlas_shared::auth::jwt::{create_token, Claims};
use carbonatlas_shared::auth::password::{
    hash_password, validate_password_strength, verify_password,
};
use carbonatlas_shared::models::user::{CreateUser, User};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::routes::validate_request;

/// Registration request body
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address, stored case-insensitively
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    pub password: String,
}

/// Successful auth response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user's id
    pub user_id: String,

    /// Bearer token for subsequent requests
    pub access_token: String,

    /// Token type, always "Bearer"
    pub token_type: String,
}

/// POST /v1/auth/register
///
/// Creates a user with a hashed password and returns a fresh access
/// token. Duplicate emails produce a 409.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    validate_request(&body)?;
    validate_password_strength(&body.password)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let password_hash = hash_password(&body.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            email: body.email,
            password_hash,
            role_id: None,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "user registered");

    let response = issue_token(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /v1/auth/login
///
/// Verifies credentials and returns an access token. Unknown emails and
/// wrong passwords both yield the same 401 message.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    validate_request(&body)?;

    let user = User::find_by_email(&state.db, &body.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let verified = verify_password(&body.password, &user.password_hash)?;
    if !verified {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    User::update_last_login(&state.db, user.id).await?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(issue_token(&state, &user)?))
}

fn issue_token(state: &AppState, user: &User) -> ApiResult<AuthResponse> {
    let claims = Claims::with_expiration(
        user.id.to_string(),
        Duration::hours(state.config.auth.token_expiration_hours),
    );
    let access_token = create_token(&claims, &state.config.auth.jwt_secret)?;

    Ok(AuthResponse {
        user_id: user.id.to_string(),
        access_token,
        token_type: "Bearer".to_string(),
    })
}
