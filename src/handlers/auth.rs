use crate::{
    database::connection::DbPool,
    models::auth::{AdminInfo, AuthResponse, LoginRequest},
    services::auth::AuthService,
    utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, Result, web};
use tracing::error;

pub async fn login(
    pool: web::Data<DbPool>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let auth_service = AuthService::new();

    let admin = auth_service
        .authenticate_admin(&pool, &request.email, &request.password)
        .await
        .map_err(|e| {
            error!("Authentication error: {}", e);
            actix_web::error::ErrorInternalServerError("Authentication error")
        })?
        .ok_or_else(|| {
            error!("Invalid credentials for admin: {}", request.email);
            actix_web::error::ErrorUnauthorized("Invalid credentials")
        })?;

    let token = auth_service.generate_token(&admin).map_err(|e| {
        error!("Failed to generate token: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to generate token")
    })?;

    let response = AuthResponse {
        token,
        admin: AdminInfo {
            id: admin.id,
            email: admin.email,
        },
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
