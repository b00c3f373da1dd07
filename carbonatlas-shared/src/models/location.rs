/// Location model and database operations
///
/// A location is a mutable street-address record, updated in place and
/// queried by exact-match filters on address or state. Geocoding output is
/// transient and is not persisted here.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE locations (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     address VARCHAR(255) NOT NULL,
///     state VARCHAR(2),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Street-address record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    pub id: Uuid,

    /// Street address
    pub address: String,

    /// Optional two-letter state code
    pub state: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocation {
    pub address: String,
    pub state: Option<String>,
}

/// Input for updating an existing location
///
/// Only non-None fields are written. `state` uses `Some(None)` to clear.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLocation {
    pub address: Option<String>,
    pub state: Option<Option<String>>,
}

impl Location {
    /// Creates a new location.
    pub async fn create(pool: &PgPool, data: CreateLocation) -> Result<Self, sqlx::Error> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (address, state)
            VALUES ($1, $2)
            RETURNING id, address, state, created_at, updated_at
            "#,
        )
        .bind(data.address)
        .bind(data.state)
        .fetch_one(pool)
        .await?;

        Ok(location)
    }

    /// Finds a location by ID, `None` if absent.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let location = sqlx::query_as::<_, Location>(
            "SELECT id, address, state, created_at, updated_at FROM locations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(location)
    }

    /// Finds the first location with an exact address match.
    pub async fn find_by_address(pool: &PgPool, address: &str) -> Result<Option<Self>, sqlx::Error> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, address, state, created_at, updated_at
            FROM locations
            WHERE address = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(address)
        .fetch_optional(pool)
        .await?;

        Ok(location)
    }

    /// Lists locations in a state (exact match on the two-letter code).
    pub async fn list_by_state(pool: &PgPool, state: &str) -> Result<Vec<Self>, sqlx::Error> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, address, state, created_at, updated_at
            FROM locations
            WHERE state = $1
            ORDER BY created_at
            "#,
        )
        .bind(state)
        .fetch_all(pool)
        .await?;

        Ok(locations)
    }

    /// Lists all locations, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Self>, sqlx::Error> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, address, state, created_at, updated_at
            FROM locations
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(locations)
    }

    /// Updates an existing location in place. Only non-None fields are
    /// written; `updated_at` is always refreshed.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateLocation,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut query = String::from("UPDATE locations SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.address.is_some() {
            bind_count += 1;
            query.push_str(&format!(", address = ${}", bind_count));
        }
        if data.state.is_some() {
            bind_count += 1;
            query.push_str(&format!(", state = ${}", bind_count));
        }

        query.push_str(" WHERE id = $1 RETURNING id, address, state, created_at, updated_at");

        let mut q = sqlx::query_as::<_, Location>(&query).bind(id);

        if let Some(address) = data.address {
            q = q.bind(address);
        }
        if let Some(state_opt) = data.state {
            q = q.bind(state_opt);
        }

        let location = q.fetch_optional(pool).await?;

        Ok(location)
    }

    /// Deletes a location. Returns true if a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
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
    fn test_create_location_struct() {
        let create = CreateLocation {
            address: "123 testing way".to_string(),
            state: None,
        };
        assert_eq!(create.address, "123 testing way");
        assert!(create.state.is_none());
    }

    #[test]
    fn test_update_location_clear_state() {
        let update = UpdateLocation {
            address: None,
            state: Some(None),
        };
        assert!(update.address.is_none());
        assert_eq!(update.state, Some(None));
    }
}
