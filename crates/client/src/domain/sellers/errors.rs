//! Sellers service errors.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::{domain::products::errors::FieldErrors, rest::RestError};

#[derive(Debug, Deserialize)]
struct ErrorsBody {
    errors: FieldErrors,
}

/// Errors that can occur in the sellers service.
#[derive(Debug, Error)]
pub enum SellersError {
    /// No seller profile exists with the given id.
    #[error("seller not found")]
    NotFound,

    /// The backend rejected the submitted fields.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// Transport or unexpected response error.
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for SellersError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Status { status, body } => {
                if status == StatusCode::NOT_FOUND {
                    return Self::NotFound;
                }

                match serde_json::from_str::<ErrorsBody>(&body) {
                    Ok(parsed) => Self::Validation(parsed.errors),
                    Err(_) => Self::Rest(RestError::Status { status, body }),
                }
            }
            other => Self::Rest(other),
        }
    }
}
