use crate::{
    database::connection::DbPool,
    middleware::auth::AuthenticatedAdmin,
    models::campaign::{CampaignContent, CampaignError},
    services::storage::{MediaStorage, MediaStorageError, UploadKind},
    utils::helpers::ApiResponse,
    utils::multipart::{MultipartForm, MultipartFormError},
};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result, web};
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Admin media upload: a `file` part plus a `type` part naming the asset
/// slot. Everything except progress photos also repoints the matching
/// campaign content URL column.
pub async fn upload(
    pool: web::Data<DbPool>,
    storage: web::Data<MediaStorage>,
    payload: Multipart,
    admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    // Read under the largest per-kind cap; the exact cap is enforced once
    // the `type` field is known.
    let form = match MultipartForm::read(payload, UploadKind::Proposal.max_bytes()).await {
        Ok(form) => form,
        Err(MultipartFormError::TooLarge { max, .. }) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(format!(
                "File too large. Maximum size: {}MB",
                max / (1024 * 1024)
            ))));
        }
        Err(e) => {
            error!("Error reading upload form: {}", e);
            return Ok(
                HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid form submission"))
            );
        }
    };

    let Some(kind) = form.text("type").and_then(|t| t.parse::<UploadKind>().ok()) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid upload type")));
    };

    let Some(file) = form.file("file") else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("No file uploaded")));
    };

    info!(
        "Uploading {} asset ({} bytes), reviewer: {}",
        kind.tag(),
        file.bytes.len(),
        admin.email
    );

    let url = match storage
        .store(
            kind,
            file.file_name.as_deref(),
            file.content_type.as_deref(),
            &file.bytes,
        )
        .await
    {
        Ok(url) => url,
        Err(MediaStorageError::Io(e)) => {
            error!("File storage error: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to store file")));
        }
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
        }
    };

    if let Some(column) = kind.content_column() {
        match CampaignContent::set_asset_url(&pool, column, &url).await {
            Ok(content) => {
                info!("Updated campaign asset {} on content {}", column, content.id);
            }
            Err(CampaignError::NoActiveContent) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(
                    "Campaign content not found",
                )));
            }
            Err(CampaignError::Database(e)) => {
                error!("Database error updating campaign asset: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                    "Failed to update campaign content",
                )));
            }
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(UploadResponse { url })))
}
