/// HTTP route handlers

pub mod auth;
pub mod geocode;
pub mod health;
pub mod locations;
pub mod projects;

use crate::error::{ApiError, ValidationErrorDetail};
use validator::Validate;

/// Run `validator` checks on a request body and convert failures into a
/// 422 response.
pub(crate) fn validate_request<T: Validate>(body: &T) -> Result<(), ApiError> {
    body.validate().map_err(|errors| {
        let details = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| ValidationErrorDetail {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("validation failed: {}", err.code)),
                })
            })
            .collect();
        ApiError::ValidationError(details)
    })
}
