/// Application state and router assembly
///
/// Builds the axum router, wires shared state into handlers, and applies
/// the middleware stack (request tracing, CORS, token authentication on
/// protected routes).

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use carbonatlas_geocoder::GeocodingClient;
use carbonatlas_shared::auth::jwt::validate_token;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ApiError;
use crate::routes;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Server configuration
    pub config: Arc<Config>,

    /// Geocoding provider client
    pub geocoder: Arc<GeocodingClient>,
}

/// Authenticated user identity, inserted by the auth middleware
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// Subject claim of the verified token (the user id)
    pub user_id: String,
}

/// Build the full application router.
///
/// Public routes: health check and the auth endpoints. Everything else
/// requires a valid bearer token.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/v1/auth/register", post(routes::auth::register))
        .route("/v1/auth/login", post(routes::auth::login));

    let protected = Router::new()
        .route(
            "/v1/projects",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route(
            "/v1/projects/:id",
            get(routes::projects::get_project)
                .patch(routes::projects::update_project)
                .delete(routes::projects::delete_project),
        )
        .route(
            "/v1/locations",
            get(routes::locations::list_locations).post(routes::locations::create_location),
        )
        .route(
            "/v1/locations/:id",
            get(routes::locations::get_location)
                .patch(routes::locations::update_location)
                .delete(routes::locations::delete_location),
        )
        .route("/v1/geocode", post(routes::geocode::geocode))
        .route("/v1/geocode/bulk", post(routes::geocode::geocode_bulk))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Middleware that verifies the bearer token and attaches the caller's
/// identity to the request.
async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let claims = validate_token(token, &state.config.auth.jwt_secret)?;

    request.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
    });

    Ok(next.run(request).await)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if config.server.cors_origins.is_empty() {
        layer
    } else if config.server.cors_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
