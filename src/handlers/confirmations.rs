use crate::{
    database::connection::DbPool,
    middleware::auth::AuthenticatedAdmin,
    models::confirmation::{ConfirmationError, CreateConfirmation, DonationConfirmation, ReviewAction},
    requests::confirmation::ReviewConfirmationRequest,
    services::storage::{MediaStorage, MediaStorageError, UploadKind},
    utils::helpers::ApiResponse,
    utils::multipart::{MultipartForm, MultipartFormError},
};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result, web};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitConfirmationResponse {
    pub recap_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PendingCountResponse {
    pub count: i64,
}

/// Public multipart submission: text fields plus an optional transfer-proof
/// image. The proof is stored before the row is created, so a storage
/// failure leaves no partial record.
pub async fn submit(
    pool: web::Data<DbPool>,
    storage: web::Data<MediaStorage>,
    payload: Multipart,
) -> Result<HttpResponse> {
    let form = match MultipartForm::read(payload, UploadKind::TransferProof.max_bytes()).await {
        Ok(form) => form,
        Err(MultipartFormError::TooLarge { .. }) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(
                "Transfer proof must be 1MB or smaller",
            )));
        }
        Err(e) => {
            error!("Error reading confirmation form: {}", e);
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Invalid form submission")));
        }
    };

    let (Some(donation_id), Some(donor_name)) = (form.text("donationId"), form.text("donorName"))
    else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Donation ID and donor name are required",
        )));
    };

    info!("Creating donation confirmation for: {}", donor_name);

    let transfer_proof = match form.file("transferProof") {
        Some(file) => {
            let stored = storage
                .store(
                    UploadKind::TransferProof,
                    file.file_name.as_deref(),
                    file.content_type.as_deref(),
                    &file.bytes,
                )
                .await;

            match stored {
                Ok(url) => Some(url),
                Err(MediaStorageError::Io(e)) => {
                    error!("Transfer proof upload error: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error("Failed to upload transfer proof"),
                    ));
                }
                Err(e) => {
                    return Ok(
                        HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string()))
                    );
                }
            }
        }
        None => None,
    };

    let create_confirmation = CreateConfirmation {
        donation_id: donation_id.to_string(),
        donor_name: donor_name.to_string(),
        donor_email: form.text("donorEmail").map(str::to_string),
        donor_phone: form.text("donorPhone").map(str::to_string),
        transfer_proof,
        notes: form.text("notes").map(str::to_string),
    };

    match DonationConfirmation::create(&pool, create_confirmation).await {
        Ok(confirmation) => {
            info!(
                "Successfully created confirmation with ID: {}",
                confirmation.id
            );
            Ok(
                HttpResponse::Created().json(ApiResponse::success(SubmitConfirmationResponse {
                    recap_id: confirmation.id,
                })),
            )
        }
        Err(ConfirmationError::MissingRequiredFields) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::<()>::error("Donation ID and donor name are required"),
        )),
        Err(ConfirmationError::Database(e)) => {
            error!("Database error creating confirmation: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to create confirmation",
            )))
        }
        Err(e) => {
            error!("Error creating confirmation: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}

pub async fn admin_index(
    pool: web::Data<DbPool>,
    admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    info!("Listing confirmations for reviewer: {}", admin.email);

    match DonationConfirmation::find_all(&pool).await {
        Ok(confirmations) => Ok(HttpResponse::Ok().json(ApiResponse::success(confirmations))),
        Err(ConfirmationError::Database(e)) => {
            error!("Database error listing confirmations: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to retrieve confirmations",
            )))
        }
        Err(e) => {
            error!("Error listing confirmations: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}

pub async fn review(
    pool: web::Data<DbPool>,
    request: web::Json<ReviewConfirmationRequest>,
    admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    info!(
        "Reviewing confirmation {} ({}) by: {}",
        request.id, request.action, admin.email
    );

    let Ok(action) = request.action.parse::<ReviewAction>() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid action")));
    };

    match DonationConfirmation::review(&pool, request.id, action, &admin.email).await {
        Ok(confirmation) => {
            info!("Successfully reviewed confirmation: {}", confirmation.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(confirmation)))
        }
        Err(ConfirmationError::NotFound { id }) => Ok(HttpResponse::NotFound().json(
            ApiResponse::<()>::error(format!("Confirmation {} not found", id)),
        )),
        Err(ConfirmationError::Database(e)) => {
            error!("Database error reviewing confirmation: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to update confirmation",
            )))
        }
        Err(e) => {
            error!("Error reviewing confirmation: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}

pub async fn pending_count(
    pool: web::Data<DbPool>,
    _admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    match DonationConfirmation::count_pending(&pool).await {
        Ok(count) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(PendingCountResponse { count })))
        }
        Err(ConfirmationError::Database(e)) => {
            error!("Database error counting pending confirmations: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to count confirmations",
            )))
        }
        Err(e) => {
            error!("Error counting pending confirmations: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}
