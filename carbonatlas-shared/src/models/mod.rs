/// Database models for CarbonAtlas
///
/// This module contains all database models and their CRUD operations.
/// Persistence is thin: each model is a direct pass-through to the storage
/// layer with no business rules beyond the schema's constraints.
///
/// # Models
///
/// - `user`: accounts and password hashes
/// - `role`: name tags attached to users
/// - `project`: clean-energy projects with impact metrics
/// - `location`: mutable street-address records
///
/// # Example
///
/// ```no_run
/// use carbonatlas_shared::models::location::{CreateLocation, Location};
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let location = Location::create(
///     &pool,
///     CreateLocation {
///         address: "456 test drive".to_string(),
///         state: Some("CA".to_string()),
///     },
/// )
/// .await?;
///
/// let in_ca = Location::list_by_state(&pool, "CA").await?;
/// assert!(!in_ca.is_empty());
/// # Ok(())
/// # }
/// ```

pub mod location;
pub mod project;
pub mod role;
pub mod user;
