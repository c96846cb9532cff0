use crate::config::SETTINGS;
use crate::database::connection::DbPool;
use crate::models::admin::{Admin, CreateAdmin};
use crate::models::campaign::{CampaignContent, CreateCampaignContent};
use rust_decimal::Decimal;
use tracing::info;

/// Creates the initial admin account and the default active campaign row
/// when the database is empty. Safe to run on every startup.
pub async fn run(pool: &DbPool) -> anyhow::Result<()> {
    if Admin::find_by_email(pool, &SETTINGS.admin_email).await?.is_none() {
        let admin = Admin::create(
            pool,
            CreateAdmin {
                email: SETTINGS.admin_email.clone(),
                password: SETTINGS.admin_password.clone(),
            },
        )
        .await?;
        info!("Admin user created: {}", admin.email);
    }

    if CampaignContent::find_active(pool).await?.is_none() {
        let content = CampaignContent::create(
            pool,
            CreateCampaignContent {
                title: "Help Build Our Community Mosque".to_string(),
                description: "Join us in building a beautiful mosque that will serve as a center \
                              for worship, community gatherings, and Islamic education for \
                              generations to come."
                    .to_string(),
                goal: Decimal::new(500_000, 0),
            },
        )
        .await?;
        info!("Default campaign content created: {}", content.id);
    }

    Ok(())
}
