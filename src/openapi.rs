use utoipa::OpenApi;

use crate::{
    error::{ApiErrorBody, ApiErrorResponse, ErrorMessage},
    route::{books, health},
};

/// OpenAPI document for the bookstore API, generated from the handler
/// annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        description = "CRUD API for book records"
    ),
    paths(
        health::health_check,
        books::list_books::list_books,
        books::get_book::get_book,
        books::create_book::create_book,
        books::update_book::update_book,
        books::delete_book::delete_book,
    ),
    components(schemas(
        books::Book,
        books::list_books::ListBooksResponse,
        books::get_book::GetBookResponse,
        books::create_book::CreateBookResponse,
        books::update_book::UpdateBookResponse,
        books::delete_book::DeleteBookResponse,
        health::HealthResponse,
        ApiErrorResponse,
        ApiErrorBody,
        ErrorMessage,
    ))
)]
pub struct ApiDoc;
