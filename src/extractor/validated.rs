use axum::{
    async_trait,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::{
    error::{ApiError, InternalServerError, ValidationError},
    schema::JsonValidate,
};

use super::json::ApiJson;

/// An extractor that validates a JSON body against the payload's schema
/// before deserializing it.
///
/// The whole document is checked at once, so a payload with several
/// violations reports all of them in a single response.
pub struct Validated<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + JsonValidate + Debug + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "validated_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(value) = ApiJson::<serde_json::Value>::from_request(req, state).await?;

        if let Err(violations) = T::validate_value(&value) {
            tracing::warn!(?violations, "Validation errors");

            return Err(ValidationError::new(violations).into());
        }

        // The schema already checked presence and types, so this only fails
        // if the schema and the payload type drift apart.
        let payload = serde_json::from_value::<T>(value)
            .map_err(|err| ApiError::from(InternalServerError::from_generic_error(err)))?;

        tracing::trace!(payload=?payload, "Validated");

        Ok(Validated(payload))
    }
}
