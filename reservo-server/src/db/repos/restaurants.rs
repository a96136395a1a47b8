//! Restaurant repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::error::map_unique_name;
use crate::db::DbError;
use crate::models::RestaurantName;

/// Restaurant record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Restaurant repository
pub struct RestaurantRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RestaurantRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a new restaurant. Duplicate names conflict.
    pub async fn register(&self, name: RestaurantName) -> Result<Restaurant, DbError> {
        let restaurant: Restaurant = sqlx::query_as(
            r#"
            INSERT INTO restaurants (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_name(e, "restaurant", name.as_str()))?;

        tracing::debug!(restaurant_id = %restaurant.id, name = %restaurant.name, "restaurant registered");
        Ok(restaurant)
    }

    /// All restaurants, ordered by name.
    pub async fn list(&self) -> Result<Vec<Restaurant>, DbError> {
        let restaurants: Vec<Restaurant> = sqlx::query_as(
            r#"
            SELECT id, name, created_at
            FROM restaurants
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(restaurants)
    }
}
