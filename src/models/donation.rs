use crate::database::connection::DbPool;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DonationError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One row per submitted donation intent. Rows are immutable after insert;
/// confirmations reference them loosely by a free-form id string.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub amount: Decimal,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub message: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateDonation {
    pub amount: Decimal,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub message: Option<String>,
    pub is_anonymous: bool,
}

impl CreateDonation {
    /// Anonymous donations never persist the donor identity fields.
    pub fn new(
        amount: Decimal,
        donor_name: Option<String>,
        donor_email: Option<String>,
        message: Option<String>,
        is_anonymous: bool,
    ) -> Self {
        let (donor_name, donor_email) = if is_anonymous {
            (None, None)
        } else {
            (donor_name, donor_email)
        };

        Self {
            amount,
            donor_name,
            donor_email,
            message,
            is_anonymous,
        }
    }
}

impl Donation {
    pub async fn create(pool: &DbPool, donation: CreateDonation) -> Result<Self, DonationError> {
        if donation.amount <= Decimal::ZERO {
            return Err(DonationError::InvalidAmount);
        }

        let donation = sqlx::query_as::<_, Donation>(
            "INSERT INTO donations (id, amount, donor_name, donor_email, message, is_anonymous, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(donation.amount)
        .bind(donation.donor_name)
        .bind(donation.donor_email)
        .bind(donation.message)
        .bind(donation.is_anonymous)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(donation)
    }

    pub async fn find_recent_named(pool: &DbPool, limit: i64) -> Result<Vec<Self>, DonationError> {
        let donations = sqlx::query_as::<_, Donation>(
            "SELECT * FROM donations
             WHERE is_anonymous = FALSE AND donor_name IS NOT NULL
             ORDER BY created_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(donations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_donation_drops_identity_fields() {
        let donation = CreateDonation::new(
            Decimal::new(500_000, 0),
            Some("Aisyah".to_string()),
            Some("aisyah@mail.com".to_string()),
            Some("For the new prayer hall".to_string()),
            true,
        );

        assert!(donation.donor_name.is_none());
        assert!(donation.donor_email.is_none());
        assert_eq!(donation.message.as_deref(), Some("For the new prayer hall"));
        assert!(donation.is_anonymous);
    }

    #[test]
    fn named_donation_keeps_identity_fields() {
        let donation = CreateDonation::new(
            Decimal::new(250_000, 0),
            Some("Budi".to_string()),
            None,
            None,
            false,
        );

        assert_eq!(donation.donor_name.as_deref(), Some("Budi"));
        assert!(!donation.is_anonymous);
    }
}
