/// Project model and database operations
///
/// A project is a clean-energy initiative with descriptive fields and two
/// environmental-impact metrics: gasoline-gallon-equivalents reduced
/// (`gge_reduced`) and greenhouse gas reduced (`ghg_reduced`). There are no
/// computed or derived fields.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE projects (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     description TEXT,
///     photo_url VARCHAR(512),
///     website_url VARCHAR(512),
///     year INTEGER,
///     gge_reduced DOUBLE PRECISION,
///     ghg_reduced DOUBLE PRECISION,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Clean-energy project record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,

    pub name: String,

    pub description: Option<String>,

    pub photo_url: Option<String>,

    pub website_url: Option<String>,

    /// Project year
    pub year: Option<i32>,

    /// Gasoline gallon equivalents reduced
    pub gge_reduced: Option<f64>,

    /// Greenhouse gas reduced
    pub ghg_reduced: Option<f64>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub website_url: Option<String>,
    pub year: Option<i32>,
    pub gge_reduced: Option<f64>,
    pub ghg_reduced: Option<f64>,
}

/// Input for updating an existing project
///
/// Only non-None fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub website_url: Option<String>,
    pub year: Option<i32>,
    pub gge_reduced: Option<f64>,
    pub ghg_reduced: Option<f64>,
}

impl Project {
    /// Creates a new project.
    pub async fn create(pool: &PgPool, data: CreateProject) -> Result<Self, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description, photo_url, website_url, year, gge_reduced, ghg_reduced)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, description, photo_url, website_url, year,
                      gge_reduced, ghg_reduced, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.photo_url)
        .bind(data.website_url)
        .bind(data.year)
        .bind(data.gge_reduced)
        .bind(data.ghg_reduced)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Finds a project by ID, `None` if absent.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, photo_url, website_url, year,
                   gge_reduced, ghg_reduced, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// Finds the first project with an exact name match.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, photo_url, website_url, year,
                   gge_reduced, ghg_reduced, created_at, updated_at
            FROM projects
            WHERE name = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// Updates an existing project. Only non-None fields in `data` are
    /// written; `updated_at` is always refreshed.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateProject,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut query = String::from("UPDATE projects SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.name.is_some() {
            bind_count += 1;
            query.push_str(&format!(", name = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.photo_url.is_some() {
            bind_count += 1;
            query.push_str(&format!(", photo_url = ${}", bind_count));
        }
        if data.website_url.is_some() {
            bind_count += 1;
            query.push_str(&format!(", website_url = ${}", bind_count));
        }
        if data.year.is_some() {
            bind_count += 1;
            query.push_str(&format!(", year = ${}", bind_count));
        }
        if data.gge_reduced.is_some() {
            bind_count += 1;
            query.push_str(&format!(", gge_reduced = ${}", bind_count));
        }
        if data.ghg_reduced.is_some() {
            bind_count += 1;
            query.push_str(&format!(", ghg_reduced = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, name, description, photo_url, website_url, year, gge_reduced, ghg_reduced, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Project>(&query).bind(id);

        if let Some(name) = data.name {
            q = q.bind(name);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(photo_url) = data.photo_url {
            q = q.bind(photo_url);
        }
        if let Some(website_url) = data.website_url {
            q = q.bind(website_url);
        }
        if let Some(year) = data.year {
            q = q.bind(year);
        }
        if let Some(gge_reduced) = data.gge_reduced {
            q = q.bind(gge_reduced);
        }
        if let Some(ghg_reduced) = data.ghg_reduced {
            q = q.bind(ghg_reduced);
        }

        let project = q.fetch_optional(pool).await?;

        Ok(project)
    }

    /// Deletes a project. Returns true if a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists projects, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Self>, sqlx::Error> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, photo_url, website_url, year,
                   gge_reduced, ghg_reduced, created_at, updated_at
            FROM projects
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(projects)
    }

    /// Counts all projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_struct() {
        let create = CreateProject {
            name: "Solar Farm Alpha".to_string(),
            description: Some("Rooftop solar install".to_string()),
            photo_url: Some("https://example.com/photo.jpg".to_string()),
            website_url: Some("https://example.com".to_string()),
            year: Some(1999),
            gge_reduced: Some(1.234),
            ghg_reduced: Some(2.234),
        };

        assert_eq!(create.name, "Solar Farm Alpha");
        assert_eq!(create.year, Some(1999));
        assert_eq!(create.gge_reduced, Some(1.234));
        assert_eq!(create.ghg_reduced, Some(2.234));
    }

    #[test]
    fn test_update_project_default_is_noop() {
        let update = UpdateProject::default();
        assert!(update.name.is_none());
        assert!(update.gge_reduced.is_none());
        assert!(update.ghg_reduced.is_none());
    }
}
