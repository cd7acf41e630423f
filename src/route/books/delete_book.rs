use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, extractor::path::ApiPath, state::ApiState};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteBookPath {
    pub isbn: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct DeleteBookResponse {
    pub message: String,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Deletes the book with the given isbn.
///
/// Responds with the same confirmation whether or not a row existed.
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Isbn of the book to delete")
    ),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteBookResponse)
    )
)]
pub async fn delete_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<DeleteBookPath>,
) -> Result<DeleteBookResponse, ApiError> {
    let deleted = state.store().delete(&path.isbn).await?;

    tracing::debug!(isbn = %path.isbn, deleted, "Delete processed");

    Ok(DeleteBookResponse {
        message: "Book deleted".to_string(),
    })
}
