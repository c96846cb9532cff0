use crate::services::auth::AuthService;
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Verified reviewer identity for admin-only endpoints. Extraction fails
/// with 401 before the handler body runs, so unauthorized requests never
/// touch storage.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub email: String,
}

impl FromRequest for AuthenticatedAdmin {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_admin(req))
    }
}

fn extract_admin(req: &HttpRequest) -> Result<AuthenticatedAdmin, Error> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ErrorUnauthorized("Missing authorization header"))?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ErrorUnauthorized("Invalid authorization header"))?;

    let claims = AuthService::new()
        .verify_token(token)
        .map_err(|_| ErrorUnauthorized("Invalid or expired token"))?;

    Ok(AuthenticatedAdmin {
        admin_id: claims.sub,
        email: claims.email,
    })
}
