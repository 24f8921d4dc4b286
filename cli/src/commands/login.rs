use colored::*;

use lifeline_common::config::Config;
use lifeline_common::session::{Role, Session};
use lifeline_core::services::Services;
use lifeline_core::services::dashboard::BankDashboard;

use crate::commands::{Credentials, admin};
use crate::mprint;
use crate::terminal::{format, print};

pub async fn login(services: &Services, credentials: Credentials, cfg: &Config) -> anyhow::Result<()> {
    let session = services
        .auth
        .login(&credentials.email, &credentials.password)
        .await?;

    let shown = show_dashboard(services, &session, cfg).await;
    services.auth.logout(session);
    shown
}

async fn show_dashboard(services: &Services, session: &Session, cfg: &Config) -> anyhow::Result<()> {
    print::header(&format!("welcome, {}", session.display_name), cfg.quiet);
    match session.role {
        Role::Admin => admin::stats(services, session, cfg).await,
        Role::Donor => donor_dashboard(services, session, cfg).await,
        Role::Hospital => {
            let hospital = services.dashboard.hospital(session).await?;
            print::tree_head(0, &hospital.hospital_name);
            print::as_tree_one_level(format::hospital_to_details(&hospital));
            lifeline_common::hint!("Use `lifeline search` to request blood for a patient");
            Ok(())
        }
        Role::BloodBank => {
            let view = services.dashboard.blood_bank(session).await?;
            print_bank(&view, cfg);
            Ok(())
        }
        Role::Recipient => Ok(()),
    }
}

async fn donor_dashboard(services: &Services, session: &Session, cfg: &Config) -> anyhow::Result<()> {
    let view = services.dashboard.donor(session).await?;
    print::tree_head(0, &view.donor.full_name);
    print::as_tree_one_level(format::donor_to_details(&view.donor));
    mprint!();

    let status: ColoredString = if view.eligible {
        "Eligible to donate".green().bold()
    } else {
        "Not yet eligible".yellow().bold()
    };
    let next: String = match view.eligible_from {
        Some(instant) if !view.eligible => format::date(instant),
        Some(_) | None => "now".to_string(),
    };
    if cfg.quiet < 2 {
        print::aligned_lines(vec![("Status", status), ("Next donation", next.normal())]);
    }
    Ok(())
}

pub fn print_bank(view: &BankDashboard, cfg: &Config) {
    print::tree_head(0, &view.bank.blood_bank_name);
    if cfg.quiet < 2 {
        print::as_tree_one_level(format::bank_to_details(&view.bank));
    }
    mprint!();
    print::header("stock", cfg.quiet);
    let lines: Vec<(&str, ColoredString)> = view
        .stock
        .iter()
        .map(|stock| (stock.group.label(), format::stock_bar(stock)))
        .collect();
    print::aligned_lines(lines);
}
