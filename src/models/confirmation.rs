use crate::database::connection::DbPool;
use crate::models::campaign::CampaignContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ConfirmationError {
    #[error("Confirmation with ID {id} not found")]
    NotFound { id: Uuid },
    #[error("Donation ID and donor name are required")]
    MissingRequiredFields,
    #[error("Invalid action")]
    InvalidAction,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Reviewer decision on a confirmation. `Cancel` returns a reviewed
/// confirmation to the pending state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Verify,
    Reject,
    Cancel,
}

impl FromStr for ReviewAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verify" => Ok(ReviewAction::Verify),
            "reject" => Ok(ReviewAction::Reject),
            "cancel" => Ok(ReviewAction::Cancel),
            _ => Err(()),
        }
    }
}

impl ReviewAction {
    /// The `(is_verified, is_rejected)` pair this action writes. The two
    /// flags are never both true.
    pub fn flags(&self) -> (bool, bool) {
        match self {
            ReviewAction::Verify => (true, false),
            ReviewAction::Reject => (false, true),
            ReviewAction::Cancel => (false, false),
        }
    }
}

/// Donor-counter delta for a transition: the counter moves only when the
/// verified flag actually crosses.
pub fn donor_count_delta(was_verified: bool, is_verified: bool) -> i32 {
    match (was_verified, is_verified) {
        (false, true) => 1,
        (true, false) => -1,
        _ => 0,
    }
}

/// A donor-submitted claim of payment ("recap"), reviewed by an admin.
/// `donation_id` is a free-form reference: a real donation id or a synthetic
/// id for manual claims.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DonationConfirmation {
    pub id: Uuid,
    pub donation_id: String,
    pub donor_name: String,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub transfer_proof: Option<String>,
    pub notes: Option<String>,
    pub is_verified: bool,
    pub is_rejected: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub verified_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateConfirmation {
    pub donation_id: String,
    pub donor_name: String,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub transfer_proof: Option<String>,
    pub notes: Option<String>,
}

impl CreateConfirmation {
    pub fn validate(&self) -> Result<(), ConfirmationError> {
        if self.donation_id.trim().is_empty() || self.donor_name.trim().is_empty() {
            return Err(ConfirmationError::MissingRequiredFields);
        }
        Ok(())
    }
}

/// One verified confirmation surfaced on the public prayer wall.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Prayer {
    pub id: Uuid,
    pub donor_name: String,
    pub notes: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_prayers: i64,
    pub limit: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = (total + limit - 1) / limit;

        Self {
            current_page: page,
            total_pages,
            total_prayers: total,
            limit,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrayerPage {
    pub prayers: Vec<Prayer>,
    pub pagination: PaginationMeta,
}

impl DonationConfirmation {
    pub async fn create(
        pool: &DbPool,
        confirmation: CreateConfirmation,
    ) -> Result<Self, ConfirmationError> {
        confirmation.validate()?;

        let confirmation = sqlx::query_as::<_, DonationConfirmation>(
            "INSERT INTO donation_recaps (id, donation_id, donor_name, donor_email, donor_phone, transfer_proof, notes, is_verified, is_rejected, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, FALSE, $8)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(confirmation.donation_id)
        .bind(confirmation.donor_name)
        .bind(confirmation.donor_email)
        .bind(confirmation.donor_phone)
        .bind(confirmation.transfer_proof)
        .bind(confirmation.notes)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(confirmation)
    }

    pub async fn find_all(pool: &DbPool) -> Result<Vec<Self>, ConfirmationError> {
        let confirmations = sqlx::query_as::<_, DonationConfirmation>(
            "SELECT * FROM donation_recaps ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await?;

        Ok(confirmations)
    }

    pub async fn count_pending(pool: &DbPool) -> Result<i64, ConfirmationError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM donation_recaps
             WHERE is_verified = FALSE AND is_rejected = FALSE",
        )
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Applies a review transition and, when the verified flag crosses,
    /// adjusts the campaign donor counter in the same transaction. The row is
    /// locked for the read so the delta is derived from the exact state being
    /// overwritten.
    pub async fn review(
        pool: &DbPool,
        id: Uuid,
        action: ReviewAction,
        reviewer: &str,
    ) -> Result<Self, ConfirmationError> {
        let (is_verified, is_rejected) = action.flags();

        let mut tx = pool.begin().await?;

        let previous = sqlx::query_as::<_, DonationConfirmation>(
            "SELECT * FROM donation_recaps WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(ConfirmationError::NotFound { id })?;

        let (verified_at, verified_by) = if is_verified || is_rejected {
            (Some(Utc::now()), Some(reviewer.to_string()))
        } else {
            (None, None)
        };

        let updated = sqlx::query_as::<_, DonationConfirmation>(
            "UPDATE donation_recaps
             SET is_verified = $2, is_rejected = $3, verified_at = $4, verified_by = $5
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(is_verified)
        .bind(is_rejected)
        .bind(verified_at)
        .bind(verified_by)
        .fetch_one(&mut *tx)
        .await?;

        let delta = donor_count_delta(previous.is_verified, is_verified);
        if delta != 0 {
            CampaignContent::adjust_donor_count(&mut *tx, delta).await?;
        }

        tx.commit().await?;

        Ok(updated)
    }

    pub async fn find_prayers(
        pool: &DbPool,
        page: i64,
        limit: i64,
    ) -> Result<PrayerPage, ConfirmationError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM donation_recaps
             WHERE is_verified = TRUE AND notes IS NOT NULL AND notes <> ''",
        )
        .fetch_one(pool)
        .await?;

        let prayers = sqlx::query_as::<_, Prayer>(
            "SELECT id, donor_name, notes, verified_at FROM donation_recaps
             WHERE is_verified = TRUE AND notes IS NOT NULL AND notes <> ''
             ORDER BY verified_at DESC
             OFFSET $1 LIMIT $2",
        )
        .bind((page - 1) * limit)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(PrayerPage {
            prayers,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_flags_are_mutually_exclusive() {
        for action in [ReviewAction::Verify, ReviewAction::Reject, ReviewAction::Cancel] {
            let (is_verified, is_rejected) = action.flags();
            assert!(!(is_verified && is_rejected));
        }
    }

    #[test]
    fn parses_known_actions_only() {
        assert_eq!("verify".parse(), Ok(ReviewAction::Verify));
        assert_eq!("reject".parse(), Ok(ReviewAction::Reject));
        assert_eq!("cancel".parse(), Ok(ReviewAction::Cancel));
        assert!("approve".parse::<ReviewAction>().is_err());
        assert!("".parse::<ReviewAction>().is_err());
    }

    #[test]
    fn counter_moves_only_when_verified_flag_crosses() {
        assert_eq!(donor_count_delta(false, true), 1);
        assert_eq!(donor_count_delta(true, false), -1);
        assert_eq!(donor_count_delta(false, false), 0);
        assert_eq!(donor_count_delta(true, true), 0);
    }

    #[test]
    fn verify_reject_cancel_sequence_nets_zero() {
        let mut verified = false;
        let mut count = 0i32;

        for action in [ReviewAction::Verify, ReviewAction::Reject, ReviewAction::Cancel] {
            let (is_verified, _) = action.flags();
            count = (count + donor_count_delta(verified, is_verified)).max(0);
            verified = is_verified;
        }

        assert_eq!(count, 0);
    }

    #[test]
    fn reject_without_prior_verify_leaves_counter_unchanged() {
        // reject straight from pending: prior is_verified was already false
        let (is_verified, _) = ReviewAction::Reject.flags();
        assert_eq!(donor_count_delta(false, is_verified), 0);
    }

    #[test]
    fn rejects_blank_required_fields() {
        let confirmation = CreateConfirmation {
            donation_id: "  ".to_string(),
            donor_name: "Budi".to_string(),
            donor_email: None,
            donor_phone: None,
            transfer_proof: None,
            notes: None,
        };
        assert!(confirmation.validate().is_err());

        let confirmation = CreateConfirmation {
            donation_id: "manual-1".to_string(),
            donor_name: "".to_string(),
            donor_email: None,
            donor_phone: None,
            transfer_proof: None,
            notes: None,
        };
        assert!(confirmation.validate().is_err());
    }

    #[test]
    fn pagination_for_five_prayers_with_limit_three() {
        let meta = PaginationMeta::new(2, 3, 5);

        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
        assert_eq!(meta.total_prayers, 5);
    }

    #[test]
    fn pagination_first_page() {
        let meta = PaginationMeta::new(1, 6, 13);

        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn pagination_with_no_results() {
        let meta = PaginationMeta::new(1, 6, 0);

        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }
}
