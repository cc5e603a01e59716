//! Books repository for database operations.
//!
//! Book writes own the `book_authors` / `book_genres` junction rows: they are
//! only ever inserted or deleted here, inside the same transaction as the book
//! row itself. Reads resolve junction rows to full author/genre models before
//! returning, so callers never see bare foreign keys.

use std::collections::HashMap;

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookAuthor, BookGenre, CreateBook, UpdateBook},
        genre::Genre,
    },
};

/// Duplicate requested ids would violate the junction tables' composite
/// primary keys, so each id is inserted at most once.
fn unique_ids(ids: &[i32]) -> Vec<i32> {
    let mut unique = ids.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Get book by ID with its authors and genres resolved
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        let mut book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, description, publisher, cover_image_url,
                   page_count, publication_date
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        book.book_authors = self.get_book_authors(id).await?;
        book.book_genres = self.get_book_genres(id).await?;

        Ok(book)
    }

    /// Get all books with their authors and genres resolved
    pub async fn get_all(&self) -> AppResult<Vec<Book>> {
        let mut books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, description, publisher, cover_image_url,
                   page_count, publication_date
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        // Two join queries for the whole list instead of one pair per book
        let mut authors_by_book: HashMap<i32, Vec<BookAuthor>> = HashMap::new();
        for ba in self.get_all_book_authors().await? {
            authors_by_book.entry(ba.book_id).or_default().push(ba);
        }

        let mut genres_by_book: HashMap<i32, Vec<BookGenre>> = HashMap::new();
        for bg in self.get_all_book_genres().await? {
            genres_by_book.entry(bg.book_id).or_default().push(bg);
        }

        for book in &mut books {
            book.book_authors = authors_by_book.remove(&book.id).unwrap_or_default();
            book.book_genres = genres_by_book.remove(&book.id).unwrap_or_default();
        }

        Ok(books)
    }

    /// Load all authors for a book via the book_authors junction table
    async fn get_book_authors(&self, book_id: i32) -> AppResult<Vec<BookAuthor>> {
        let rows = sqlx::query(
            r#"
            SELECT ba.book_id, ba.author_id, a.id, a.first_name, a.last_name, a.biography
            FROM book_authors ba
            JOIN authors a ON a.id = ba.author_id
            WHERE ba.book_id = $1
            ORDER BY a.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| BookAuthor {
                book_id: r.get("book_id"),
                author_id: r.get("author_id"),
                author: Author {
                    id: r.get("id"),
                    first_name: r.get("first_name"),
                    last_name: r.get("last_name"),
                    biography: r.get("biography"),
                },
            })
            .collect())
    }

    /// Load all genres for a book via the book_genres junction table
    async fn get_book_genres(&self, book_id: i32) -> AppResult<Vec<BookGenre>> {
        let rows = sqlx::query(
            r#"
            SELECT bg.book_id, bg.genre_id, g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = $1
            ORDER BY g.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| BookGenre {
                book_id: r.get("book_id"),
                genre_id: r.get("genre_id"),
                genre: Genre {
                    id: r.get("id"),
                    name: r.get("name"),
                },
            })
            .collect())
    }

    async fn get_all_book_authors(&self) -> AppResult<Vec<BookAuthor>> {
        let rows = sqlx::query(
            r#"
            SELECT ba.book_id, ba.author_id, a.id, a.first_name, a.last_name, a.biography
            FROM book_authors ba
            JOIN authors a ON a.id = ba.author_id
            ORDER BY ba.book_id, a.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| BookAuthor {
                book_id: r.get("book_id"),
                author_id: r.get("author_id"),
                author: Author {
                    id: r.get("id"),
                    first_name: r.get("first_name"),
                    last_name: r.get("last_name"),
                    biography: r.get("biography"),
                },
            })
            .collect())
    }

    async fn get_all_book_genres(&self) -> AppResult<Vec<BookGenre>> {
        let rows = sqlx::query(
            r#"
            SELECT bg.book_id, bg.genre_id, g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            ORDER BY bg.book_id, g.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| BookGenre {
                book_id: r.get("book_id"),
                genre_id: r.get("genre_id"),
                genre: Genre {
                    id: r.get("id"),
                    name: r.get("name"),
                },
            })
            .collect())
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    /// Create a book together with its association rows in one transaction
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, description, publisher, cover_image_url,
                               page_count, publication_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.description)
        .bind(&book.publisher)
        .bind(&book.cover_image_url)
        .bind(book.page_count)
        .bind(book.publication_date)
        .fetch_one(&mut *tx)
        .await?;

        for author_id in unique_ids(&book.author_ids) {
            sqlx::query("INSERT INTO book_authors (book_id, author_id) VALUES ($1, $2)")
                .bind(id)
                .bind(author_id)
                .execute(&mut *tx)
                .await?;
        }

        for genre_id in unique_ids(&book.genre_ids) {
            sqlx::query("INSERT INTO book_genres (book_id, genre_id) VALUES ($1, $2)")
                .bind(id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.get_by_id(id).await
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Update a book's scalar fields and replace its entire association set.
    ///
    /// The previous book_authors/book_genres rows are deleted and rebuilt from
    /// the requested id lists. Field update, deletes and inserts share one
    /// transaction; dropping the transaction on any error rolls everything back.
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = $1,
                description = $2,
                publisher = $3,
                cover_image_url = $4,
                page_count = $5,
                publication_date = $6
            WHERE id = $7
            "#,
        )
        .bind(&book.title)
        .bind(&book.description)
        .bind(&book.publisher)
        .bind(&book.cover_image_url)
        .bind(book.page_count)
        .bind(book.publication_date)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for author_id in unique_ids(&book.author_ids) {
            sqlx::query("INSERT INTO book_authors (book_id, author_id) VALUES ($1, $2)")
                .bind(id)
                .bind(author_id)
                .execute(&mut *tx)
                .await?;
        }

        for genre_id in unique_ids(&book.genre_ids) {
            sqlx::query("INSERT INTO book_genres (book_id, genre_id) VALUES ($1, $2)")
                .bind(id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Delete a book and all of its association rows in one transaction
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        tx.commit().await?;

        Ok(())
    }
}
