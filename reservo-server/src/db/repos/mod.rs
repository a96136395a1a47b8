//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per operation, no check-then-insert
//! - Constraint violations translated to `DbError` variants
//! - Uses JOINs for list operations (no N+1)

pub mod customers;
pub mod restaurants;
pub mod reservations;

pub use customers::{Customer, CustomerRepo};
pub use restaurants::{Restaurant, RestaurantRepo};
pub use reservations::{Reservation, ReservationDetail, ReservationRepo};
