//! Author CRUD service

use crate::{
    error::AppResult,
    models::author::{AuthorDetailDto, AuthorDto, CreateAuthor, UpdateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorService {
    repository: Repository,
}

impl AuthorService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<AuthorDto>> {
        let authors = self.repository.authors.get_all().await?;
        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }

    /// Get an author by ID, including the books linked to them
    pub async fn get(&self, id: i32) -> AppResult<AuthorDetailDto> {
        let author = self.repository.authors.get_by_id(id).await?;
        let books = self.repository.authors.get_books(id).await?;
        Ok(AuthorDetailDto::from_parts(author, books))
    }

    /// Create a new author
    pub async fn create(&self, author: CreateAuthor) -> AppResult<AuthorDto> {
        let created = self.repository.authors.create(&author).await?;
        tracing::info!("Author created with id {}", created.id);
        Ok(created.into())
    }

    /// Update an existing author
    pub async fn update(&self, id: i32, author: UpdateAuthor) -> AppResult<()> {
        self.repository.authors.update(id, &author).await?;
        tracing::info!("Author updated with id {}", id);
        Ok(())
    }

    /// Delete an author; only its own association rows are removed with it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await?;
        tracing::info!("Author deleted with id {}", id);
        Ok(())
    }
}
