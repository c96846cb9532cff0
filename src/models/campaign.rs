use crate::database::connection::DbPool;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("No active campaign content found")]
    NoActiveContent,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The single active campaign row. Every public read and every counter
/// mutation targets the row with `is_active = TRUE`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub goal: Decimal,
    pub current_amount: Decimal,
    pub donor_count: i32,
    pub logo_url: Option<String>,
    pub banner_image_url: Option<String>,
    pub qr_code_url: Option<String>,
    pub before_renovation_image_url: Option<String>,
    pub after_renovation_image_url: Option<String>,
    pub proposal_pdf_url: Option<String>,
    pub before_renovation_desc: Option<String>,
    pub after_renovation_desc: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
    pub whatsapp_url: Option<String>,
    pub email_contact: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateCampaignContent {
    pub title: String,
    pub description: String,
    pub goal: Decimal,
}

#[derive(Debug, Clone)]
pub struct UpdateCampaignContent {
    pub title: String,
    pub description: String,
    pub goal: Decimal,
    pub current_amount: Decimal,
    pub donor_count: i32,
    pub before_renovation_desc: Option<String>,
    pub after_renovation_desc: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
    pub whatsapp_url: Option<String>,
    pub email_contact: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub tiktok_url: Option<String>,
}

impl CampaignContent {
    pub async fn create(
        pool: &DbPool,
        content: CreateCampaignContent,
    ) -> Result<Self, CampaignError> {
        let now = Utc::now();

        let content = sqlx::query_as::<_, CampaignContent>(
            "INSERT INTO campaign_content (id, title, description, goal, current_amount, donor_count, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, 0, 0, TRUE, $5, $6)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(content.title)
        .bind(content.description)
        .bind(content.goal)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(content)
    }

    pub async fn find_active(pool: &DbPool) -> Result<Option<Self>, CampaignError> {
        let content = sqlx::query_as::<_, CampaignContent>(
            "SELECT * FROM campaign_content WHERE is_active = TRUE",
        )
        .fetch_optional(pool)
        .await?;

        Ok(content)
    }

    pub async fn update(
        pool: &DbPool,
        update_data: UpdateCampaignContent,
    ) -> Result<Self, CampaignError> {
        let now = Utc::now();

        let updated_content = sqlx::query_as::<_, CampaignContent>(
            "UPDATE campaign_content
             SET title = $1, description = $2, goal = $3, current_amount = $4, donor_count = $5,
                 before_renovation_desc = $6, after_renovation_desc = $7,
                 bank_name = $8, account_number = $9, account_name = $10,
                 whatsapp_url = $11, email_contact = $12, instagram_url = $13,
                 twitter_url = $14, tiktok_url = $15, updated_at = $16
             WHERE is_active = TRUE
             RETURNING *",
        )
        .bind(update_data.title)
        .bind(update_data.description)
        .bind(update_data.goal)
        .bind(update_data.current_amount)
        .bind(update_data.donor_count)
        .bind(update_data.before_renovation_desc)
        .bind(update_data.after_renovation_desc)
        .bind(update_data.bank_name)
        .bind(update_data.account_number)
        .bind(update_data.account_name)
        .bind(update_data.whatsapp_url)
        .bind(update_data.email_contact)
        .bind(update_data.instagram_url)
        .bind(update_data.twitter_url)
        .bind(update_data.tiktok_url)
        .bind(now)
        .fetch_optional(pool)
        .await?
        .ok_or(CampaignError::NoActiveContent)?;

        Ok(updated_content)
    }

    /// Adds a donation amount to the running total in a single statement, so
    /// concurrent donations cannot lose updates.
    pub async fn record_donation(pool: &DbPool, amount: Decimal) -> Result<(), CampaignError> {
        let result = sqlx::query(
            "UPDATE campaign_content
             SET current_amount = current_amount + $1, updated_at = $2
             WHERE is_active = TRUE",
        )
        .bind(amount)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CampaignError::NoActiveContent);
        }

        Ok(())
    }

    /// Applies a signed delta to the donor counter, floored at zero. Runs on
    /// the caller's connection so review transitions can include it in their
    /// transaction.
    pub async fn adjust_donor_count(
        conn: &mut sqlx::PgConnection,
        delta: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE campaign_content
             SET donor_count = GREATEST(donor_count + $1, 0), updated_at = $2
             WHERE is_active = TRUE",
        )
        .bind(delta)
        .bind(Utc::now())
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Points one of the media URL columns at a freshly stored asset.
    /// `column` must come from `UploadKind::content_column`.
    pub async fn set_asset_url(
        pool: &DbPool,
        column: &str,
        url: &str,
    ) -> Result<Self, CampaignError> {
        let query = format!(
            "UPDATE campaign_content SET {column} = $1, updated_at = $2
             WHERE is_active = TRUE
             RETURNING *"
        );

        let updated_content = sqlx::query_as::<_, CampaignContent>(&query)
            .bind(url)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?
            .ok_or(CampaignError::NoActiveContent)?;

        Ok(updated_content)
    }
}
