/// Role model
///
/// A role is a plain name tag ("admin", "editor") attached to users via
/// `users.role_id`. There is no hierarchy or permission logic here; route
/// handlers decide what a tag means.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Role tag
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Role {
    pub id: Uuid,

    /// Unique role name, e.g. "admin"
    pub role_name: String,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a new role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    pub role_name: String,
}

impl Role {
    /// Creates a new role.
    ///
    /// # Errors
    ///
    /// Returns an error on a duplicate name (unique constraint).
    pub async fn create(pool: &PgPool, data: CreateRole) -> Result<Self, sqlx::Error> {
        let role = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (role_name)
            VALUES ($1)
            RETURNING id, role_name, created_at
            "#,
        )
        .bind(data.role_name)
        .fetch_one(pool)
        .await?;

        Ok(role)
    }

    /// Finds a role by ID, `None` if absent.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let role = sqlx::query_as::<_, Role>(
            "SELECT id, role_name, created_at FROM roles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(role)
    }

    /// Finds a role by its exact name.
    pub async fn find_by_name(pool: &PgPool, role_name: &str) -> Result<Option<Self>, sqlx::Error> {
        let role = sqlx::query_as::<_, Role>(
            "SELECT id, role_name, created_at FROM roles WHERE role_name = $1",
        )
        .bind(role_name)
        .fetch_optional(pool)
        .await?;

        Ok(role)
    }

    /// Lists all roles, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let roles = sqlx::query_as::<_, Role>(
            "SELECT id, role_name, created_at FROM roles ORDER BY role_name",
        )
        .fetch_all(pool)
        .await?;

        Ok(roles)
    }

    /// Deletes a role. Returns true if a row was removed.
    ///
    /// Fails while any user still references the role.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_role_struct() {
        let create_role = CreateRole {
            role_name: "admin".to_string(),
        };
        assert_eq!(create_role.role_name, "admin");
    }
}
