use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiErrorResponse, NotFoundError},
    extractor::{path::ApiPath, validated::Validated},
    state::ApiState,
};

use super::Book;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateBookPath {
    pub isbn: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct UpdateBookResponse {
    pub book: Book,
}

impl IntoResponse for UpdateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Replaces every field of the book with the given isbn.
///
/// The payload is validated before the row is looked up, so an invalid
/// payload is a 400 even when the isbn does not exist.
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Isbn of the book to replace")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "The updated book", body = UpdateBookResponse),
        (status = 400, description = "Payload failed schema validation", body = ApiErrorResponse),
        (status = 404, description = "No book with this isbn", body = ApiErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<UpdateBookPath>,
    Validated(book): Validated<Book>,
) -> Result<UpdateBookResponse, ApiError> {
    let book = state
        .store()
        .update(&path.isbn, &book)
        .await?
        .ok_or_else(|| NotFoundError::book(&path.isbn))?;

    Ok(UpdateBookResponse { book })
}
