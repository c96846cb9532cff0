use crate::config::SETTINGS;
use crate::database::connection::DbPool;
use crate::models::admin::{Admin, AdminError};
use crate::models::auth::Claims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Admin(#[from] AdminError),
}

pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new() -> Self {
        let secret = SETTINGS.jwt_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    pub fn generate_token(&self, admin: &Admin) -> Result<String, AuthError> {
        let claims = Claims::new(admin.id, admin.email.clone());
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }

    pub async fn authenticate_admin(
        &self,
        pool: &DbPool,
        email: &str,
        password: &str,
    ) -> Result<Option<Admin>, AuthError> {
        let admin = Admin::authenticate(pool, email, password).await?;
        Ok(admin)
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
