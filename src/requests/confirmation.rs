use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ReviewConfirmationRequest {
    pub id: Uuid,
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct PrayerQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
