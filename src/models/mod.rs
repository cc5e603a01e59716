//! Data models for the catalog server

pub mod author;
pub mod book;
pub mod genre;
pub mod response;

// Re-export commonly used types
pub use author::{Author, AuthorDetailDto, AuthorDto};
pub use book::{Book, BookAuthor, BookDto, BookGenre};
pub use genre::{Genre, GenreDto};
pub use response::ApiResponse;
