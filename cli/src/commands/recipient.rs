use lifeline_common::config::Config;
use lifeline_core::services::Services;
use lifeline_core::services::auth::RecipientForm;

use crate::commands::RecipientArgs;
use crate::terminal::{format, print};

pub async fn recipient(services: &Services, args: RecipientArgs, cfg: &Config) -> anyhow::Result<()> {
    let session = services
        .auth
        .recipient_access(RecipientForm {
            full_name: args.name,
            phone: args.phone,
            email: args.email,
            blood_group: args.group,
        })
        .await?;

    let view = services.dashboard.recipient(&session).await;
    services.auth.logout(session);
    let view = view?;

    let Some(group) = view.blood_group else {
        lifeline_common::hint!("Pass --group to see donors of your blood group");
        return Ok(());
    };

    if view.donors.is_empty() {
        print::header(&format!("no {group} donors"), cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header(&format!("{group} donors"), cfg.quiet);
    for (idx, donor) in view.donors.iter().enumerate() {
        print::tree_head(idx, &donor.full_name);
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::donor_to_details(donor));
        }
    }
    Ok(())
}
