use colored::*;

use lifeline_common::config::Config;
use lifeline_common::session::Session;
use lifeline_core::services::Services;

use crate::commands::{AdminAction, Credentials};
use crate::mprint;
use crate::terminal::{colors, format, print};

pub async fn admin(
    services: &Services,
    credentials: Credentials,
    action: AdminAction,
    cfg: &Config,
) -> anyhow::Result<()> {
    let session = services
        .auth
        .login(&credentials.email, &credentials.password)
        .await?;

    let result = match action {
        AdminAction::Stats => stats(services, &session, cfg).await,
        AdminAction::Photos => photos(services, &session, cfg).await,
        AdminAction::AddPhoto { url, caption } => services
            .admin
            .add_photo(&session, &url, &caption)
            .await
            .map(|_| ()),
        AdminAction::DeletePhoto { id } => services.admin.delete_photo(&session, &id).await,
    };
    services.auth.logout(session);
    result
}

pub async fn stats(services: &Services, session: &Session, cfg: &Config) -> anyhow::Result<()> {
    let stats = services.admin.stats(session).await?;
    print::header("overview", cfg.quiet);
    print::aligned_lines(vec![
        ("Donors", stats.donors.to_string()),
        ("Hospitals", stats.hospitals.to_string()),
        ("Blood banks", stats.blood_banks.to_string()),
        ("Requests", stats.requests.to_string()),
    ]);

    let roster = services.admin.donors(session).await?;
    if roster.is_empty() || cfg.quiet > 1 {
        return Ok(());
    }
    mprint!();
    print::header("donors", cfg.quiet);
    for (idx, entry) in roster.iter().enumerate() {
        let line = format!(
            "{} {} {} last donation {}",
            entry.donor.full_name.color(colors::PRIMARY),
            format::recorded_group(&entry.donor.blood_group),
            entry.donor.phone.color(colors::MUTED),
            entry.last_donation
        );
        print::tree_head(idx, &line);
    }
    Ok(())
}

async fn photos(services: &Services, session: &Session, cfg: &Config) -> anyhow::Result<()> {
    let photos = services.admin.photos(session).await?;
    if photos.is_empty() {
        lifeline_common::hint!("No camp photos yet; add one with `lifeline admin add-photo --url <URL>`");
        return Ok(());
    }
    print::header("camp photos", cfg.quiet);
    for (idx, photo) in photos.iter().enumerate() {
        print::tree_head(idx, &photo.id);
        if cfg.quiet < 2 {
            print::as_tree_one_level(vec![
                ("Caption".to_string(), photo.caption.normal()),
                ("Url".to_string(), photo.url.color(colors::MUTED)),
                ("Added".to_string(), format::date(photo.created_at).normal()),
            ]);
        }
    }
    Ok(())
}
