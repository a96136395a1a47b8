//! Reservation endpoints
//!
//! The `{customer}` segment is a customer *name* when booking and a customer
//! *id* everywhere else.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::{Reservation, ReservationDetail, ReservationRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{CustomerId, ReservationPath, ValidJson};
use crate::http::server::AppState;
use crate::models::NewReservation;

/// Book reservation request. Fields are optional so that absence is
/// reported as a validation error rather than a deserialization failure.
#[derive(Deserialize)]
pub struct BookReservationRequest {
    pub restaurant_name: Option<String>,
    pub date: Option<String>,
    pub party_count: Option<i64>,
}

/// Reservation response
#[derive(Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub party_count: i32,
    pub customer_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub restaurant_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    pub created_at: String,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            date: r.date,
            party_count: r.party_count,
            customer_id: r.customer_id,
            customer_name: None,
            restaurant_id: r.restaurant_id,
            restaurant_name: None,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

impl From<ReservationDetail> for ReservationResponse {
    fn from(r: ReservationDetail) -> Self {
        Self {
            id: r.id,
            date: r.date,
            party_count: r.party_count,
            customer_id: r.customer_id,
            customer_name: Some(r.customer_name),
            restaurant_id: r.restaurant_id,
            restaurant_name: Some(r.restaurant_name),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

fn to_responses(rows: Vec<ReservationDetail>) -> Json<Vec<ReservationResponse>> {
    Json(rows.into_iter().map(ReservationResponse::from).collect())
}

/// GET /api/reservations - all reservations, newest date first
async fn list_reservations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let rows = ReservationRepo::new(&state.pool).list().await?;
    Ok(to_responses(rows))
}

/// GET /api/customers/{customer_id}/reservations
async fn list_customer_reservations(
    State(state): State<Arc<AppState>>,
    CustomerId(customer_id): CustomerId,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let rows = ReservationRepo::new(&state.pool)
        .list_for_customer(customer_id)
        .await?;
    Ok(to_responses(rows))
}

/// POST /api/customers/{name}/reservations - book for the named customer
async fn book_reservation(
    State(state): State<Arc<AppState>>,
    Path(customer_name): Path<String>,
    ValidJson(req): ValidJson<BookReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let booking = NewReservation::parse(
        &customer_name,
        req.restaurant_name.as_deref(),
        req.date.as_deref(),
        req.party_count,
    )?;

    let reservation = ReservationRepo::new(&state.pool).book(booking).await?;

    tracing::info!(reservation_id = %reservation.id, "Reservation booked");
    Ok((StatusCode::CREATED, Json(ReservationResponse::from(reservation))))
}

/// DELETE /api/customers/{customer_id}/reservations/{id}
async fn cancel_reservation(
    State(state): State<Arc<AppState>>,
    path: ReservationPath,
) -> Result<StatusCode, ApiError> {
    ReservationRepo::new(&state.pool)
        .cancel(path.id, path.customer_id)
        .await?;

    tracing::info!(reservation_id = %path.id, "Reservation cancelled");
    Ok(StatusCode::NO_CONTENT)
}

/// Reservation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reservations", get(list_reservations))
        .route(
            "/api/customers/{customer}/reservations",
            get(list_customer_reservations).post(book_reservation),
        )
        .route(
            "/api/customers/{customer}/reservations/{id}",
            delete(cancel_reservation),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn booked_response_omits_names() {
        let reservation = Reservation {
            id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            party_count: 4,
            customer_id: Uuid::nil(),
            restaurant_id: Uuid::nil(),
            created_at: Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(ReservationResponse::from(reservation)).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["party_count"], 4);
        assert_eq!(json["created_at"], "2024-04-01T12:00:00+00:00");
        assert!(json.get("customer_name").is_none());
        assert!(json.get("restaurant_name").is_none());
    }

    #[test]
    fn listed_response_carries_names() {
        let detail = ReservationDetail {
            id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            party_count: 2,
            customer_id: Uuid::nil(),
            customer_name: "Sally".into(),
            restaurant_id: Uuid::nil(),
            restaurant_name: "Bobs".into(),
            created_at: Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(ReservationResponse::from(detail)).unwrap();
        assert_eq!(json["customer_name"], "Sally");
        assert_eq!(json["restaurant_name"], "Bobs");
    }
}
