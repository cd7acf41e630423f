use crate::error::{ApiError, NotFoundError};

/// Fallback handler for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound(NotFoundError::route())
}
