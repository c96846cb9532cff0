use crate::models::campaign::UpdateCampaignContent;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Full-field admin edit of the active campaign row. Optional text fields
/// arrive as empty strings from cleared form inputs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    pub title: String,
    pub description: String,
    pub goal: Decimal,
    pub current_amount: Decimal,
    pub donor_count: i32,
    pub before_renovation_desc: Option<String>,
    pub after_renovation_desc: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
    pub whatsapp_url: Option<String>,
    pub email_contact: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub tiktok_url: Option<String>,
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl UpdateCampaignRequest {
    /// Empty strings in optional fields become NULLs before the write.
    pub fn normalized(self) -> UpdateCampaignContent {
        UpdateCampaignContent {
            title: self.title,
            description: self.description,
            goal: self.goal,
            current_amount: self.current_amount,
            donor_count: self.donor_count,
            before_renovation_desc: none_if_empty(self.before_renovation_desc),
            after_renovation_desc: none_if_empty(self.after_renovation_desc),
            bank_name: none_if_empty(self.bank_name),
            account_number: none_if_empty(self.account_number),
            account_name: none_if_empty(self.account_name),
            whatsapp_url: none_if_empty(self.whatsapp_url),
            email_contact: none_if_empty(self.email_contact),
            instagram_url: none_if_empty(self.instagram_url),
            twitter_url: none_if_empty(self.twitter_url),
            tiktok_url: none_if_empty(self.tiktok_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optional_fields_become_null() {
        let request = UpdateCampaignRequest {
            title: "Build Our Community Mosque".to_string(),
            description: "Renovation fundraiser".to_string(),
            goal: Decimal::new(500_000, 0),
            current_amount: Decimal::ZERO,
            donor_count: 0,
            before_renovation_desc: Some("".to_string()),
            after_renovation_desc: None,
            bank_name: Some("Bank Syariah".to_string()),
            account_number: Some("".to_string()),
            account_name: None,
            whatsapp_url: Some("".to_string()),
            email_contact: Some("info@masjid.or.id".to_string()),
            instagram_url: None,
            twitter_url: None,
            tiktok_url: None,
        };

        let normalized = request.normalized();

        assert!(normalized.before_renovation_desc.is_none());
        assert!(normalized.account_number.is_none());
        assert!(normalized.whatsapp_url.is_none());
        assert_eq!(normalized.bank_name.as_deref(), Some("Bank Syariah"));
        assert_eq!(normalized.email_contact.as_deref(), Some("info@masjid.or.id"));
    }
}
