use crate::{
    database::connection::DbPool,
    models::confirmation::{ConfirmationError, DonationConfirmation},
    requests::confirmation::PrayerQuery,
    utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, Result, web};
use tracing::error;

const DEFAULT_PAGE_SIZE: i64 = 6;

pub async fn index(
    pool: web::Data<DbPool>,
    query: web::Query<PrayerQuery>,
) -> Result<HttpResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

    match DonationConfirmation::find_prayers(&pool, page, limit).await {
        Ok(prayer_page) => Ok(HttpResponse::Ok().json(ApiResponse::success(prayer_page))),
        Err(ConfirmationError::Database(e)) => {
            error!("Database error fetching prayers: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to retrieve prayers",
            )))
        }
        Err(e) => {
            error!("Error fetching prayers: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())))
        }
    }
}
