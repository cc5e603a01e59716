//! Genre CRUD service

use crate::{
    error::AppResult,
    models::genre::{CreateGenre, GenreDto, UpdateGenre},
    repository::Repository,
};

#[derive(Clone)]
pub struct GenreService {
    repository: Repository,
}

impl GenreService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all genres
    pub async fn list(&self) -> AppResult<Vec<GenreDto>> {
        let genres = self.repository.genres.get_all().await?;
        Ok(genres.into_iter().map(GenreDto::from).collect())
    }

    /// Get a genre by ID
    pub async fn get(&self, id: i32) -> AppResult<GenreDto> {
        let genre = self.repository.genres.get_by_id(id).await?;
        Ok(genre.into())
    }

    /// Create a new genre
    pub async fn create(&self, genre: CreateGenre) -> AppResult<GenreDto> {
        let created = self.repository.genres.create(&genre).await?;
        tracing::info!("Genre created with id {}", created.id);
        Ok(created.into())
    }

    /// Update an existing genre
    pub async fn update(&self, id: i32, genre: UpdateGenre) -> AppResult<()> {
        self.repository.genres.update(id, &genre).await?;
        tracing::info!("Genre updated with id {}", id);
        Ok(())
    }

    /// Delete a genre; only its own association rows are removed with it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.genres.delete(id).await?;
        tracing::info!("Genre deleted with id {}", id);
        Ok(())
    }
}
