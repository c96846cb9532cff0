use crate::{
    database::connection::DbPool,
    middleware::auth::AuthenticatedAdmin,
    models::campaign::{CampaignContent, CampaignError},
    requests::campaign::UpdateCampaignRequest,
    utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, Result, web};
use tracing::{error, info};

pub async fn get_content(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    match CampaignContent::find_active(&pool).await {
        Ok(Some(content)) => Ok(HttpResponse::Ok().json(ApiResponse::success(content))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(
            "Campaign content not found",
        ))),
        Err(CampaignError::Database(e)) => {
            error!("Database error getting campaign content: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to retrieve campaign content",
            )))
        }
        Err(e) => {
            error!("Error getting campaign content: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}

pub async fn update_content(
    pool: web::Data<DbPool>,
    request: web::Json<UpdateCampaignRequest>,
    admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    info!("Updating campaign content, reviewer: {}", admin.email);

    match CampaignContent::update(&pool, request.into_inner().normalized()).await {
        Ok(content) => {
            info!("Successfully updated campaign content: {}", content.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(content)))
        }
        Err(CampaignError::NoActiveContent) => Ok(HttpResponse::NotFound().json(
            ApiResponse::<()>::error("Campaign content not found"),
        )),
        Err(CampaignError::Database(e)) => {
            error!("Database error updating campaign content: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to update campaign content",
            )))
        }
    }
}
