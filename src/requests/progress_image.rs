use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgressImageRequest {
    pub image_url: String,
    pub caption: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressImageRequest {
    pub image_url: Option<String>,
    pub caption: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}
