//! Products service errors.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::rest::RestError;

/// Field-keyed validation messages, as returned by the backend
/// (`{"errors": {"name": ["can't be blank"]}}`). Callers render them inline
/// next to the offending field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Deserialize)]
struct ErrorsBody {
    errors: FieldErrors,
}

/// Errors that can occur in the products service.
#[derive(Debug, Error)]
pub enum ProductsError {
    /// No product exists with the given id.
    #[error("product not found")]
    NotFound,

    /// The backend rejected the submitted fields.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// Transport or unexpected response error.
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for ProductsError {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_maps_to_not_found() {
        let error = ProductsError::from(RestError::Status {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        });

        assert!(matches!(error, ProductsError::NotFound));
    }

    #[test]
    fn errors_body_maps_to_field_errors() {
        let error = ProductsError::from(RestError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: r#"{"errors": {"name": ["can't be blank"]}}"#.to_string(),
        });

        match error {
            ProductsError::Validation(fields) => {
                assert_eq!(
                    fields.get("name").map(Vec::as_slice),
                    Some(["can't be blank".to_string()].as_slice())
                );
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn opaque_failure_stays_a_rest_error() {
        let error = ProductsError::from(RestError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        });

        assert!(matches!(error, ProductsError::Rest(_)));
    }
}
