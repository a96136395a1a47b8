//! Customer endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::{Customer, CustomerRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{CustomerName, ValidationError};

/// Register customer request
#[derive(Deserialize)]
pub struct RegisterCustomerRequest {
    pub name: Option<String>,
}

/// Customer response
#[derive(Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// GET /api/customers - list all customers by name
async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = CustomerRepo::new(&state.pool).list().await?;
    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// POST /api/customers - register a customer
async fn register_customer(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<RegisterCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let raw = req.name.ok_or(ValidationError::Missing { field: "name" })?;
    let name = CustomerName::new(&raw)?;
    let customer = CustomerRepo::new(&state.pool).register(name).await?;

    tracing::info!(customer_id = %customer.id, "Customer registered");
    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/customers", get(list_customers).post(register_customer))
}
