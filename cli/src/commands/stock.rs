use lifeline_common::config::Config;
use lifeline_common::models::blood::BloodGroup;
use lifeline_core::services::Services;

use crate::commands::{Credentials, login};

pub async fn stock(
    services: &Services,
    credentials: Credentials,
    group: BloodGroup,
    units: u32,
    cfg: &Config,
) -> anyhow::Result<()> {
    let session = services
        .auth
        .login(&credentials.email, &credentials.password)
        .await?;

    let updated = services.dashboard.update_stock(&session, group, units).await;
    services.auth.logout(session);

    login::print_bank(&updated?, cfg);
    Ok(())
}
