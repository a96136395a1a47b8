//! Sample data loaded on startup

use futures::future::try_join_all;
use sqlx::PgPool;

use super::repos::{Customer, CustomerRepo, Restaurant, RestaurantRepo};
use super::DbError;
use crate::models::{CustomerName, RestaurantName};

pub const SAMPLE_CUSTOMERS: [&str; 3] = ["Sally", "Nick", "Zack"];

pub const SAMPLE_RESTAURANTS: [&str; 4] = ["Bobs", "Daves", "AcSlater", "BadDaddies"];

/// Rows created by [`seed_sample_data`]
#[derive(Debug, Clone)]
pub struct Seeded {
    pub customers: Vec<Customer>,
    pub restaurants: Vec<Restaurant>,
}

/// Register the sample customers and restaurants concurrently.
///
/// Insertion order is unspecified. The first failure aborts the whole seed;
/// inserts already committed stay in place.
pub async fn seed_sample_data(pool: &PgPool) -> Result<Seeded, DbError> {
    let customers = CustomerRepo::new(pool);
    let restaurants = RestaurantRepo::new(pool);

    let customer_names = SAMPLE_CUSTOMERS
        .iter()
        .map(|name| CustomerName::new(name))
        .collect::<Result<Vec<_>, _>>()?;
    let restaurant_names = SAMPLE_RESTAURANTS
        .iter()
        .map(|name| RestaurantName::new(name))
        .collect::<Result<Vec<_>, _>>()?;

    let (customers, restaurants) = tokio::try_join!(
        try_join_all(customer_names.into_iter().map(|n| customers.register(n))),
        try_join_all(restaurant_names.into_iter().map(|n| restaurants.register(n))),
    )?;

    tracing::info!(
        customers = customers.len(),
        restaurants = restaurants.len(),
        "Seeded sample data"
    );

    Ok(Seeded {
        customers,
        restaurants,
    })
}
