//! Customer repository
//!
//! - register: plain INSERT, uniqueness left to the store
//! - list: ordered by name

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::error::map_unique_name;
use crate::db::DbError;
use crate::models::CustomerName;

/// Customer record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a new customer.
    ///
    /// A duplicate name is reported as [`DbError::Conflict`]; the existing
    /// row is left untouched.
    pub async fn register(&self, name: CustomerName) -> Result<Customer, DbError> {
        let customer: Customer = sqlx::query_as(
            r#"
            INSERT INTO customers (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_name(e, "customer", name.as_str()))?;

        tracing::debug!(customer_id = %customer.id, name = %customer.name, "customer registered");
        Ok(customer)
    }

    /// All customers, ordered by name.
    pub async fn list(&self) -> Result<Vec<Customer>, DbError> {
        let customers: Vec<Customer> = sqlx::query_as(
            r#"
            SELECT id, name, created_at
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }
}
