use crate::database::connection::DbPool;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub email: String,
    pub password: String,
}

impl Admin {
    pub async fn create(pool: &DbPool, admin: CreateAdmin) -> Result<Self, AdminError> {
        let now = Utc::now();
        let password_hash = hash(admin.password.as_bytes(), DEFAULT_COST)?;

        let admin = sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (id, email, password_hash, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(admin.email)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(admin)
    }

    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Self>, AdminError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(admin)
    }

    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        verify(password, &self.password_hash)
    }

    pub async fn authenticate(
        pool: &DbPool,
        email: &str,
        password: &str,
    ) -> Result<Option<Self>, AdminError> {
        if let Some(admin) = Self::find_by_email(pool, email).await? {
            if admin.verify_password(password).unwrap_or(false) {
                return Ok(Some(admin));
            }
        }
        Ok(None)
    }
}
