pub mod conversion;
pub mod currency;
pub mod product;
pub mod product_price;
pub mod relations;

use crate::{domain::requests::rules::field_errors, service::conversion::ConversionError};
use shared::errors::{RepositoryError, ServiceError};
use validator::Validate;

pub(crate) fn validate_request<T: Validate>(req: &T) -> Result<(), ServiceError> {
    req.validate()
        .map_err(|errors| ServiceError::Validation(field_errors(&errors)))
}

impl From<ConversionError> for ServiceError {
    fn from(err: ConversionError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

/// Lifts a repository not-found into the service taxonomy and keeps every
/// other failure as is.
pub(crate) fn from_repository(err: RepositoryError) -> ServiceError {
    match err {
        err @ RepositoryError::EntityNotFound { .. } => ServiceError::NotFound(err.to_string()),
        other => ServiceError::Repo(other),
    }
}
