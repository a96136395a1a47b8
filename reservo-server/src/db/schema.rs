//! Schema bootstrap
//!
//! Drops and recreates every table on startup. There is no migration
//! history: whatever was stored before is gone afterwards.

use sqlx::PgPool;

use super::DbError;

/// Tables in dependency order (referencing tables first).
pub const TABLES: [&str; 3] = ["reservations", "restaurants", "customers"];

/// Drop and recreate all tables and indexes.
///
/// Runs inside one transaction, so a failure leaves the previous schema in
/// place. Must be called before any repository is used.
pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Bootstrapping schema (existing data will be dropped)");

    let mut tx = pool.begin().await?;

    for table in TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query(
        r#"
        CREATE TABLE customers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(55) NOT NULL UNIQUE CHECK (btrim(name) <> ''),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE restaurants (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(55) NOT NULL UNIQUE CHECK (btrim(name) <> ''),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE reservations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date DATE NOT NULL,
            party_count INTEGER NOT NULL CHECK (party_count > 0),
            restaurant_id UUID NOT NULL REFERENCES restaurants(id),
            customer_id UUID NOT NULL REFERENCES customers(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Listing sorts by date; cancel and the joins go through the references
    sqlx::query("CREATE INDEX idx_reservations_date ON reservations(date DESC)")
        .execute(&mut *tx)
        .await?;
    sqlx::query("CREATE INDEX idx_reservations_customer_id ON reservations(customer_id)")
        .execute(&mut *tx)
        .await?;
    sqlx::query("CREATE INDEX idx_reservations_restaurant_id ON reservations(restaurant_id)")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Schema ready");
    Ok(())
}
