//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod name;
pub mod reservation;

pub use validation::ValidationError;
pub use name::{CustomerName, RestaurantName, MAX_NAME_LEN};
pub use reservation::{parse_date, NewReservation, PartyCount, DATE_FORMAT, YEAR_RANGE};
