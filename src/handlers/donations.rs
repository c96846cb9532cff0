use crate::{
    database::connection::DbPool,
    models::campaign::CampaignContent,
    models::donation::{CreateDonation, Donation, DonationError},
    requests::donation::SubmitDonationRequest,
    utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, Result, web};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

const RECENT_DONATIONS_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDonationResponse {
    pub donation_id: Uuid,
}

pub async fn submit(
    pool: web::Data<DbPool>,
    request: web::Json<SubmitDonationRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    info!("Recording donation of {}", request.amount);

    let create_donation = CreateDonation::new(
        request.amount,
        request.donor_name,
        request.donor_email,
        request.message,
        request.is_anonymous,
    );

    match Donation::create(&pool, create_donation).await {
        Ok(donation) => {
            info!("Successfully created donation with ID: {}", donation.id);

            // Ledger row exists at this point; a failed total increment is
            // logged and left for reconciliation rather than failing the
            // donor's submission.
            if let Err(e) = CampaignContent::record_donation(&pool, donation.amount).await {
                error!(
                    "Failed to update campaign total for donation {}: {}",
                    donation.id, e
                );
            }

            Ok(HttpResponse::Created().json(ApiResponse::success(SubmitDonationResponse {
                donation_id: donation.id,
            })))
        }
        Err(DonationError::InvalidAmount) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Invalid amount"))),
        Err(DonationError::Database(e)) => {
            error!("Database error creating donation: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to create donation",
            )))
        }
    }
}

pub async fn recent(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    info!("Getting recent named donations");

    match Donation::find_recent_named(&pool, RECENT_DONATIONS_LIMIT).await {
        Ok(donations) => Ok(HttpResponse::Ok().json(ApiResponse::success(donations))),
        Err(DonationError::Database(e)) => {
            error!("Database error getting recent donations: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to retrieve donations",
            )))
        }
        Err(e) => {
            error!("Error getting recent donations: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}
