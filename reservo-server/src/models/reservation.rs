//! Reservation input types
//!
//! A booking refers to the customer and restaurant by name; the ids are
//! resolved by the store inside the insert statement.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use super::{CustomerName, RestaurantName, ValidationError};

/// Wire format for reservation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years accepted for a booking. chrono parses signed and far-future years
/// that the `DATE` column cannot store.
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// Number of guests, always > 0 and within `INTEGER` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartyCount(i32);

impl PartyCount {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NotPositive {
                field: "party_count",
                value,
            });
        }

        let value = i32::try_from(value).map_err(|_| ValidationError::InvalidFormat {
            field: "party_count",
            reason: format!("must be at most {}", i32::MAX),
        })?;

        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "date" });
    }

    let date =
        NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| ValidationError::InvalidFormat {
            field: "date",
            reason: format!("expected YYYY-MM-DD ({})", e),
        })?;

    if !YEAR_RANGE.contains(&date.year()) {
        return Err(ValidationError::InvalidFormat {
            field: "date",
            reason: format!(
                "year must be between {} and {}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ),
        });
    }

    Ok(date)
}

/// A fully validated booking request, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub customer: CustomerName,
    pub restaurant: RestaurantName,
    pub party_count: PartyCount,
    pub date: NaiveDate,
}

impl NewReservation {
    /// Validate raw booking input.
    ///
    /// Every field except the customer name (which comes from the URL) may be
    /// absent in a request body; absence is reported before any other check.
    pub fn parse(
        customer: &str,
        restaurant: Option<&str>,
        date: Option<&str>,
        party_count: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let restaurant = restaurant.ok_or(ValidationError::Missing {
            field: "restaurant_name",
        })?;
        let date = date.ok_or(ValidationError::Missing { field: "date" })?;
        let party_count = party_count.ok_or(ValidationError::Missing {
            field: "party_count",
        })?;

        Ok(Self {
            customer: CustomerName::new(customer)?,
            restaurant: RestaurantName::new(restaurant)?,
            party_count: PartyCount::new(party_count)?,
            date: parse_date(date)?,
        })
    }
}
