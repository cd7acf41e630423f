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
    error::{ApiError, ApiErrorResponse},
    extractor::validated::Validated,
    state::ApiState,
};

use super::Book;

#[derive(Debug, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct CreateBookResponse {
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

/// Creates a book from a full, schema-validated payload.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "The created book", body = CreateBookResponse),
        (status = 400, description = "Payload failed schema validation", body = ApiErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<ApiState>,
    Validated(book): Validated<Book>,
) -> Result<CreateBookResponse, ApiError> {
    let book = state.store().insert(&book).await?;

    Ok(CreateBookResponse { book })
}
