/// Project CRUD endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use carbonatlas_shared::models::project::{CreateProject, Project, UpdateProject};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::routes::validate_request;

/// Pagination parameters for list endpoints
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Page size, capped at 100
    pub limit: Option<i64>,

    /// Row offset
    pub offset: Option<i64>,
}

impl ListParams {
    pub(crate) fn limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 100)
    }

    pub(crate) fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Request body for creating a project
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    pub photo_url: Option<String>,

    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    pub website_url: Option<String>,

    pub year: Option<i32>,

    pub gge_reduced: Option<f64>,

    pub ghg_reduced: Option<f64>,
}

/// Request body for updating a project; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    pub photo_url: Option<String>,

    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    pub website_url: Option<String>,

    pub year: Option<i32>,

    pub gge_reduced: Option<f64>,

    pub ghg_reduced: Option<f64>,
}

/// Paged list response
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: i64,
}

/// GET /v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = Project::list(&state.db, params.limit(), params.offset()).await?;
    let total = Project::count(&state.db).await?;

    Ok(Json(ProjectListResponse { projects, total }))
}

/// GET /v1/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    let project = Project::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", id)))?;

    Ok(Json(project))
}

/// POST /v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    validate_request(&body)?;

    let project = Project::create(
        &state.db,
        CreateProject {
            name: body.name,
            description: body.description,
            photo_url: body.photo_url,
            website_url: body.website_url,
            year: body.year,
            gge_reduced: body.gge_reduced,
            ghg_reduced: body.ghg_reduced,
        },
    )
    .await?;

    tracing::info!(project_id = %project.id, "project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /v1/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProjectRequest>,
) -> ApiResult<Json<Project>> {
    validate_request(&body)?;

    let project = Project::update(
        &state.db,
        id,
        UpdateProject {
            name: body.name,
            description: body.description,
            photo_url: body.photo_url,
            website_url: body.website_url,
            year: body.year,
            gge_reduced: body.gge_reduced,
            ghg_reduced: body.ghg_reduced,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", id)))?;

    Ok(Json(project))
}

/// DELETE /v1/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = Project::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Project {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let params = ListParams {
            limit: None,
            offset: None,
        };
        assert_eq!(params.limit(), 50);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_list_params_clamped() {
        let params = ListParams {
            limit: Some(10_000),
            offset: Some(-5),
        };
        assert_eq!(params.limit(), 100);
        assert_eq!(params.offset(), 0);
    }
}
