use crate::database::connection::DbPool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ProgressImageError {
    #[error("Progress image with ID {id} not found")]
    NotFound { id: Uuid },
    #[error("Missing required fields: image URL, caption and date are required")]
    MissingRequiredFields,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A photo in the construction progress gallery. Deletion is soft: inactive
/// rows stay in the table but disappear from every listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProgressImage {
    pub id: Uuid,
    pub image_url: String,
    pub caption: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateProgressImage {
    pub image_url: String,
    pub caption: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UpdateProgressImage {
    pub image_url: Option<String>,
    pub caption: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

impl ProgressImage {
    pub async fn create(
        pool: &DbPool,
        image: CreateProgressImage,
    ) -> Result<Self, ProgressImageError> {
        if image.image_url.trim().is_empty() || image.caption.trim().is_empty() {
            return Err(ProgressImageError::MissingRequiredFields);
        }

        let now = Utc::now();

        let image = sqlx::query_as::<_, ProgressImage>(
            "INSERT INTO progress_images (id, image_url, caption, description, date, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(image.image_url)
        .bind(image.caption)
        .bind(image.description)
        .bind(image.date)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(image)
    }

    pub async fn find_active(pool: &DbPool) -> Result<Vec<Self>, ProgressImageError> {
        let images = sqlx::query_as::<_, ProgressImage>(
            "SELECT * FROM progress_images WHERE is_active = TRUE ORDER BY date DESC",
        )
        .fetch_all(pool)
        .await?;

        Ok(images)
    }

    pub async fn update(
        pool: &DbPool,
        id: Uuid,
        update_data: UpdateProgressImage,
    ) -> Result<Self, ProgressImageError> {
        if update_data.caption.trim().is_empty() {
            return Err(ProgressImageError::MissingRequiredFields);
        }

        let updated_image = sqlx::query_as::<_, ProgressImage>(
            "UPDATE progress_images
             SET image_url = COALESCE($2, image_url), caption = $3, description = $4,
                 date = $5, updated_at = $6
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(update_data.image_url)
        .bind(update_data.caption)
        .bind(update_data.description)
        .bind(update_data.date)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await?
        .ok_or(ProgressImageError::NotFound { id })?;

        Ok(updated_image)
    }

    pub async fn soft_delete(pool: &DbPool, id: Uuid) -> Result<(), ProgressImageError> {
        let result = sqlx::query(
            "UPDATE progress_images SET is_active = FALSE, updated_at = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ProgressImageError::NotFound { id });
        }

        Ok(())
    }
}
