//! Book model, association records and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{
    author::{Author, AuthorDto},
    genre::{Genre, GenreDto},
};

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub cover_image_url: Option<String>,
    pub page_count: i32,
    pub publication_date: NaiveDate,
    // Relations (loaded separately)
    #[sqlx(skip)]
    #[serde(default)]
    pub book_authors: Vec<BookAuthor>,
    #[sqlx(skip)]
    #[serde(default)]
    pub book_genres: Vec<BookGenre>,
}

/// Junction row linking a book to an author, resolved to the full author
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookAuthor {
    pub book_id: i32,
    pub author_id: i32,
    pub author: Author,
}

/// Junction row linking a book to a genre, resolved to the full genre
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookGenre {
    pub book_id: i32,
    pub genre_id: i32,
    pub genre: Genre,
}

/// Outward book representation with flattened author and genre lists
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub cover_image_url: Option<String>,
    pub page_count: i32,
    pub publication_date: NaiveDate,
    pub authors: Vec<AuthorDto>,
    pub genres: Vec<GenreDto>,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            description: book.description,
            publisher: book.publisher,
            cover_image_url: book.cover_image_url,
            page_count: book.page_count,
            publication_date: book.publication_date,
            authors: book
                .book_authors
                .into_iter()
                .map(|ba| ba.author.into())
                .collect(),
            genres: book
                .book_genres
                .into_iter()
                .map(|bg| bg.genre.into())
                .collect(),
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub page_count: i32,
    pub publication_date: NaiveDate,
    #[serde(default)]
    pub author_ids: Vec<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

/// Update book request (full overwrite of all scalar fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub page_count: i32,
    pub publication_date: NaiveDate,
    #[serde(default)]
    pub author_ids: Vec<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}
