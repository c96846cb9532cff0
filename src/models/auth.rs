use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub admin: AdminInfo,
}

#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64, // expiration time
    pub iat: i64, // issued at
}

impl Claims {
    pub fn new(admin_id: Uuid, email: String) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: admin_id,
            email,
            exp: now + (24 * 60 * 60), // 24 hours
            iat: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_expire_a_day_after_issue() {
        let claims = Claims::new(Uuid::new_v4(), "admin@mail.com".to_string());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }
}
