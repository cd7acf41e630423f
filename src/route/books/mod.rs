use std::sync::LazyLock;

use jsonschema::JSONSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema::{self, JsonValidate};

pub mod app;
pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

/// A book record, keyed by isbn.
///
/// Every field is required on create and update; the schema derived from
/// this type is what incoming payloads are validated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema, sqlx::FromRow)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl JsonValidate for Book {
    fn compiled_schema() -> &'static JSONSchema {
        static SCHEMA: LazyLock<JSONSchema> = LazyLock::new(schema::compile::<Book>);

        &SCHEMA
    }
}
