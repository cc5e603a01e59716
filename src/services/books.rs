//! Book write coordination and association validation

use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDto, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<BookDto>> {
        let books = self.repository.books.get_all().await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    /// Get a book by ID
    pub async fn get(&self, id: i32) -> AppResult<BookDto> {
        let book = self.repository.books.get_by_id(id).await?;
        Ok(book.into())
    }

    /// Create a book with its author/genre associations.
    /// Every referenced id must exist; book row and association rows are
    /// persisted in one transaction.
    pub async fn create(&self, book: CreateBook) -> AppResult<BookDto> {
        self.validate_associations(&book.author_ids, &book.genre_ids)
            .await?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!("Book created with id {}", created.id);

        Ok(created.into())
    }

    /// Update a book, replacing its entire association set with the requested
    /// one. Associations not re-requested do not survive the update.
    pub async fn update(&self, id: i32, book: UpdateBook) -> AppResult<()> {
        // 404 before 400: a missing book wins over missing associations
        self.repository.books.get_by_id(id).await.map_err(|e| {
            tracing::warn!("Book update failed, id {} not found", id);
            e
        })?;

        self.validate_associations(&book.author_ids, &book.genre_ids)
            .await?;

        self.repository.books.update(id, &book).await?;
        tracing::info!("Book updated with id {}", id);

        Ok(())
    }

    /// Delete a book and all of its association rows
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Book deleted with id {}", id);

        Ok(())
    }

    /// Verify that every requested author and genre id exists.
    ///
    /// Authors are checked first and a missing-author failure is returned
    /// without checking genres, so it masks a simultaneous genre failure.
    /// Kept that way deliberately: changing it would change the observable
    /// 400 body.
    async fn validate_associations(&self, author_ids: &[i32], genre_ids: &[i32]) -> AppResult<()> {
        let found = self.repository.authors.get_by_ids(author_ids).await?;
        let missing = missing_ids(author_ids, found.iter().map(|a| a.id));
        if !missing.is_empty() {
            let message = format!(
                "The following author IDs do not exist: {}",
                join_ids(&missing)
            );
            tracing::warn!("Book association validation failed: {}", message);
            return Err(AppError::Validation(message));
        }

        let found = self.repository.genres.get_by_ids(genre_ids).await?;
        let missing = missing_ids(genre_ids, found.iter().map(|g| g.id));
        if !missing.is_empty() {
            let message = format!(
                "The following genre IDs do not exist: {}",
                join_ids(&missing)
            );
            tracing::warn!("Book association validation failed: {}", message);
            return Err(AppError::Validation(message));
        }

        Ok(())
    }
}

/// Requested ids minus found ids, deduplicated and sorted for stable messages
fn missing_ids(requested: &[i32], found: impl Iterator<Item = i32>) -> Vec<i32> {
    let found: HashSet<i32> = found.collect();
    let mut missing: Vec<i32> = requested
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect();
    missing.sort_unstable();
    missing.dedup();
    missing
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
