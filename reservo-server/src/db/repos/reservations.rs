//! Reservation repository
//!
//! Handles reservations with:
//! - Name-to-id resolution inside the insert (single round trip)
//! - Denormalized listing via JOINs (no N+1)
//! - Owner-scoped deletion

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::error::map_reference;
use crate::db::DbError;
use crate::models::NewReservation;

/// Reservation record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub date: NaiveDate,
    pub party_count: i32,
    pub customer_id: Uuid,
    pub restaurant_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Reservation joined with customer and restaurant names
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ReservationDetail {
    pub id: Uuid,
    pub date: NaiveDate,
    pub party_count: i32,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
    pub created_at: DateTime<Utc>,
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Book a reservation by customer and restaurant name.
    ///
    /// Both names are resolved by subqueries in the insert itself. An unknown
    /// name becomes NULL, which the store rejects, and the whole booking
    /// fails with [`DbError::NotFound`] without creating a row.
    pub async fn book(&self, booking: NewReservation) -> Result<Reservation, DbError> {
        let reservation: Reservation = sqlx::query_as(
            r#"
            INSERT INTO reservations (customer_id, restaurant_id, party_count, date)
            VALUES (
                (SELECT id FROM customers WHERE name = $1),
                (SELECT id FROM restaurants WHERE name = $2),
                $3,
                $4
            )
            RETURNING id, date, party_count, customer_id, restaurant_id, created_at
            "#,
        )
        .bind(booking.customer.as_str())
        .bind(booking.restaurant.as_str())
        .bind(booking.party_count.get())
        .bind(booking.date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            map_reference(
                e,
                "customer or restaurant",
                format!(
                    "'{}' at '{}'",
                    booking.customer.as_str(),
                    booking.restaurant.as_str()
                ),
            )
        })?;

        tracing::debug!(
            reservation_id = %reservation.id,
            customer_id = %reservation.customer_id,
            restaurant_id = %reservation.restaurant_id,
            "reservation booked"
        );
        Ok(reservation)
    }

    /// All reservations with names, most recent date first.
    pub async fn list(&self) -> Result<Vec<ReservationDetail>, DbError> {
        let rows: Vec<ReservationDetail> = sqlx::query_as(
            r#"
            SELECT
                r.id,
                r.date,
                r.party_count,
                r.customer_id,
                c.name AS customer_name,
                r.restaurant_id,
                s.name AS restaurant_name,
                r.created_at
            FROM reservations r
            JOIN customers c ON c.id = r.customer_id
            JOIN restaurants s ON s.id = r.restaurant_id
            ORDER BY r.date DESC, r.created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Reservations of one customer, most recent date first.
    ///
    /// An unknown customer id yields an empty list.
    pub async fn list_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<ReservationDetail>, DbError> {
        let rows: Vec<ReservationDetail> = sqlx::query_as(
            r#"
            SELECT
                r.id,
                r.date,
                r.party_count,
                r.customer_id,
                c.name AS customer_name,
                r.restaurant_id,
                s.name AS restaurant_name,
                r.created_at
            FROM reservations r
            JOIN customers c ON c.id = r.customer_id
            JOIN restaurants s ON s.id = r.restaurant_id
            WHERE r.customer_id = $1
            ORDER BY r.date DESC, r.created_at DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Cancel a reservation owned by `customer_id`.
    ///
    /// Deletes only when both ids match. A wrong id and a foreign owner are
    /// indistinguishable to the caller.
    pub async fn cancel(&self, id: Uuid, customer_id: Uuid) -> Result<(), DbError> {
        tracing::debug!(reservation_id = %id, customer_id = %customer_id, "cancelling reservation");

        let result = sqlx::query(
            r#"
            DELETE FROM reservations
            WHERE id = $1 AND customer_id = $2
            "#,
        )
        .bind(id)
        .bind(customer_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFoundOrUnauthorized {
                resource: "reservation",
            });
        }

        Ok(())
    }
}
