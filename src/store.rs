use sqlx::PgPool;

use crate::route::books::Book;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence accessor for the `books` table.
///
/// One SQL statement per operation; atomicity relies on the database's
/// per-statement guarantees.
#[derive(Debug, Clone)]
pub struct BookStore {
    pool: PgPool,
}

impl BookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every book, ordered by isbn.
    pub async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            ORDER BY isbn
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Returns the book with the given isbn, if any.
    pub async fn find(&self, isbn: &str) -> Result<Option<Book>, StoreError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Inserts a new book and returns the stored row.
    pub async fn insert(&self, book: &Book) -> Result<Book, StoreError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING isbn, amazon_url, author, language, pages, publisher, title, year
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.amazon_url)
        .bind(&book.author)
        .bind(&book.language)
        .bind(book.pages)
        .bind(&book.publisher)
        .bind(&book.title)
        .bind(book.year)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    /// Replaces every field of the book with the given isbn.
    ///
    /// The row stays keyed by the path isbn; an isbn in the payload is
    /// ignored. Returns `None` if no row matches.
    pub async fn update(&self, isbn: &str, book: &Book) -> Result<Option<Book>, StoreError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET amazon_url = $2,
                author = $3,
                language = $4,
                pages = $5,
                publisher = $6,
                title = $7,
                year = $8
            WHERE isbn = $1
            RETURNING isbn, amazon_url, author, language, pages, publisher, title, year
            "#,
        )
        .bind(isbn)
        .bind(&book.amazon_url)
        .bind(&book.author)
        .bind(&book.language)
        .bind(book.pages)
        .bind(&book.publisher)
        .bind(&book.title)
        .bind(book.year)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Deletes the book with the given isbn. Returns whether a row existed.
    pub async fn delete(&self, isbn: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
