use crate::{
    database::connection::DbPool,
    middleware::auth::AuthenticatedAdmin,
    models::progress_image::{
        CreateProgressImage, ProgressImage, ProgressImageError, UpdateProgressImage,
    },
    requests::progress_image::{CreateProgressImageRequest, UpdateProgressImageRequest},
    utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, Result, web};
use tracing::{error, info};
use uuid::Uuid;

pub async fn public_index(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    match ProgressImage::find_active(&pool).await {
        Ok(images) => Ok(HttpResponse::Ok().json(ApiResponse::success(images))),
        Err(ProgressImageError::Database(e)) => {
            error!("Database error getting progress images: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to retrieve progress images",
            )))
        }
        Err(e) => {
            error!("Error getting progress images: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}

pub async fn admin_index(
    pool: web::Data<DbPool>,
    _admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    public_index(pool).await
}

pub async fn create(
    pool: web::Data<DbPool>,
    request: web::Json<CreateProgressImageRequest>,
    admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    info!("Creating progress image, reviewer: {}", admin.email);

    let create_image = CreateProgressImage {
        image_url: request.image_url,
        caption: request.caption,
        description: request.description.filter(|d| !d.is_empty()),
        date: request.date,
    };

    match ProgressImage::create(&pool, create_image).await {
        Ok(image) => {
            info!("Successfully created progress image with ID: {}", image.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(image)))
        }
        Err(ProgressImageError::MissingRequiredFields) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::<()>::error("Image URL, caption and date are required"),
        )),
        Err(ProgressImageError::Database(e)) => {
            error!("Database error creating progress image: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to create progress image",
            )))
        }
        Err(e) => {
            error!("Error creating progress image: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}

pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateProgressImageRequest>,
    admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    let image_id = path.into_inner();
    let request = request.into_inner();
    info!(
        "Updating progress image {}, reviewer: {}",
        image_id, admin.email
    );

    let update_data = UpdateProgressImage {
        image_url: request.image_url.filter(|url| !url.is_empty()),
        caption: request.caption,
        description: request.description.filter(|d| !d.is_empty()),
        date: request.date,
    };

    match ProgressImage::update(&pool, image_id, update_data).await {
        Ok(image) => {
            info!("Successfully updated progress image: {}", image.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(image)))
        }
        Err(ProgressImageError::NotFound { id }) => Ok(HttpResponse::NotFound().json(
            ApiResponse::<()>::error(format!("Progress image {} not found", id)),
        )),
        Err(ProgressImageError::MissingRequiredFields) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::<()>::error("Caption and date are required"),
        )),
        Err(ProgressImageError::Database(e)) => {
            error!("Database error updating progress image: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to update progress image",
            )))
        }
    }
}

pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    admin: AuthenticatedAdmin,
) -> Result<HttpResponse> {
    let image_id = path.into_inner();
    info!(
        "Deleting progress image {}, reviewer: {}",
        image_id, admin.email
    );

    match ProgressImage::soft_delete(&pool, image_id).await {
        Ok(()) => {
            info!("Successfully deleted progress image: {}", image_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success(())))
        }
        Err(ProgressImageError::NotFound { id }) => Ok(HttpResponse::NotFound().json(
            ApiResponse::<()>::error(format!("Progress image {} not found", id)),
        )),
        Err(ProgressImageError::Database(e)) => {
            error!("Database error deleting progress image: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to delete progress image",
            )))
        }
        Err(e) => {
            error!("Error deleting progress image: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}
