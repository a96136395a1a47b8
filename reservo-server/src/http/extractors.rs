//! Custom Axum extractors
//!
//! Rejections become `ApiError::Validation` so every malformed request gets
//! the same JSON error body and a 400.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::ApiError;
use crate::models::ValidationError;

fn parse_uuid(field: &'static str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field,
            reason: "invalid UUID format".to_owned(),
        })
    })
}

/// JSON body whose rejection is a validation error
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "body",
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}

/// Customer UUID from `/customers/{customer}/...`
pub struct CustomerId(pub Uuid);

impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "customer_id" }))?;

        Ok(Self(parse_uuid("customer_id", &id)?))
    }
}

/// Both ids from `/customers/{customer}/reservations/{id}`
pub struct ReservationPath {
    pub customer_id: Uuid,
    pub id: Uuid,
}

impl<S> FromRequestParts<S> for ReservationPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((customer_id, id)): Path<(String, String)> =
            Path::from_request_parts(parts, state).await.map_err(|_| {
                ApiError::Validation(ValidationError::Missing {
                    field: "reservation path",
                })
            })?;

        Ok(Self {
            customer_id: parse_uuid("customer_id", &customer_id)?,
            id: parse_uuid("id", &id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_parsing() {
        let id = Uuid::new_v4();
        assert_eq!(parse_uuid("id", &id.to_string()).unwrap(), id);

        let err = parse_uuid("customer_id", "not-a-uuid").unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "customer_id",
                ..
            })
        ));
    }
}
