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
    extractor::path::ApiPath,
    state::ApiState,
};

use super::Book;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetBookPath {
    pub isbn: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct GetBookResponse {
    pub book: Book,
}

impl IntoResponse for GetBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Returns the book with the given isbn.
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Isbn of the book")
    ),
    responses(
        (status = 200, description = "The requested book", body = GetBookResponse),
        (status = 404, description = "No book with this isbn", body = ApiErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<GetBookPath>,
) -> Result<GetBookResponse, ApiError> {
    let book = state
        .store()
        .find(&path.isbn)
        .await?
        .ok_or_else(|| NotFoundError::book(&path.isbn))?;

    Ok(GetBookResponse { book })
}
