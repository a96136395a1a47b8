//! Restaurant endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::{Restaurant, RestaurantRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{RestaurantName, ValidationError};

/// Register restaurant request
#[derive(Deserialize)]
pub struct RegisterRestaurantRequest {
    pub name: Option<String>,
}

/// Restaurant response
#[derive(Serialize)]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// GET /api/restaurants - list all restaurants by name
async fn list_restaurants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    let restaurants = RestaurantRepo::new(&state.pool).list().await?;
    Ok(Json(
        restaurants
            .into_iter()
            .map(RestaurantResponse::from)
            .collect(),
    ))
}

/// POST /api/restaurants - register a restaurant
async fn register_restaurant(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<RegisterRestaurantRequest>,
) -> Result<(StatusCode, Json<RestaurantResponse>), ApiError> {
    let raw = req.name.ok_or(ValidationError::Missing { field: "name" })?;
    let name = RestaurantName::new(&raw)?;
    let restaurant = RestaurantRepo::new(&state.pool).register(name).await?;

    tracing::info!(restaurant_id = %restaurant.id, "Restaurant registered");
    Ok((StatusCode::CREATED, Json(RestaurantResponse::from(restaurant))))
}

/// Restaurant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/restaurants",
        get(list_restaurants).post(register_restaurant),
    )
}
