#![cfg(test)]
use chrono::Duration;

use lifeline_common::config::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
use lifeline_common::error::AuthError;
use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::donor::Donor;
use lifeline_common::models::facility::BloodBank;
use lifeline_common::ports::repository::{BloodBankRepository, DonorRepository};
use lifeline_common::session::{Role, Session};
use lifeline_core::inventory::StockLevel;
use lifeline_core::services::admin::NEVER_DONATED;
use lifeline_core::services::auth::RecipientForm;

use crate::fixtures::{donor_form, now, world};

#[tokio::test]
async fn donor_dashboard_reports_next_eligible_date() {
    let w = world();
    let mut form = donor_form("ravi@example.com");
    form.last_donation_date = Some("2025-05-01".into());
    w.services.registration.register_donor(form).await.unwrap();

    let session = w.services.auth.login("ravi@example.com", "donate123").await.unwrap();
    let view = w.services.dashboard.donor(&session).await.unwrap();

    assert!(!view.eligible);
    let next = view.eligible_from.unwrap();
    assert!(next > now());
    assert_eq!(next.format("%Y-%m-%d").to_string(), "2025-07-29");
}

#[tokio::test]
async fn donor_dashboard_survives_a_date_at_the_calendar_edge() {
    let w = world();
    let id = w
        .store
        .insert_donor(Donor::new(BloodGroup::APositive).with_last_donation("+262142-12-31"))
        .await
        .unwrap();
    let mut session = Session::admin("edge@example.com", now());
    session.role = Role::Donor;
    session.profile_id = Some(id);

    let view = w.services.dashboard.donor(&session).await.unwrap();
    assert!(view.eligible);
    assert_eq!(view.eligible_from, None);
}

#[tokio::test]
async fn dashboards_reject_other_roles() {
    let w = world();
    let admin = Session::admin(DEFAULT_ADMIN_EMAIL, now());

    let err = w.services.dashboard.donor(&admin).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<AuthError>(),
        Some(&AuthError::WrongRole {
            expected: "donor",
            actual: "admin"
        })
    );
    assert!(w.services.dashboard.blood_bank(&admin).await.is_err());

    let mut donor = admin.clone();
    donor.role = Role::Donor;
    assert!(w.services.admin.stats(&donor).await.is_err());
}

#[tokio::test]
async fn bank_updates_its_stock() {
    let w = world();
    let id = w
        .store
        .insert_bank(BloodBank::new("Tenali Red Cross").with_location("Guntur", "Tenali"))
        .await
        .unwrap();
    let session = Session {
        role: Role::BloodBank,
        profile_id: Some(id.clone()),
        display_name: "Tenali Red Cross".into(),
        email: "bank@example.com".into(),
        blood_group: None,
        started_at: now(),
    };

    let view = w
        .services
        .dashboard
        .update_stock(&session, BloodGroup::ONegative, 45)
        .await
        .unwrap();
    let o_neg = view.stock.iter().find(|s| s.group == BloodGroup::ONegative).unwrap();
    assert_eq!(o_neg.units, 45);
    assert_eq!(o_neg.percentage, 90);
    assert_eq!(o_neg.level, StockLevel::WellStocked);
    assert_eq!(view.stock.len(), 8);

    let stored = w.store.bank(&id).await.unwrap().unwrap();
    assert_eq!(stored.units_of(BloodGroup::ONegative), 45);

    let summary = w.services.browse.inventory().await.unwrap();
    assert_eq!(summary.total_units(), 45);
    assert_eq!(summary.critical().count(), 7);
}

#[tokio::test]
async fn recipient_sees_every_donor_of_the_group() {
    let w = world();
    let recent = (now() - Duration::days(3)).format("%Y-%m-%d").to_string();
    for donor in [
        Donor::new(BloodGroup::ONegative).with_last_donation(recent),
        Donor::new(BloodGroup::ONegative),
        Donor::new(BloodGroup::OPositive),
    ] {
        w.store.insert_donor(donor).await.unwrap();
    }

    let with_group = w
        .services
        .auth
        .recipient_access(RecipientForm {
            full_name: "Lakshmi".into(),
            phone: "9000000000".into(),
            email: "lakshmi@example.com".into(),
            blood_group: Some(BloodGroup::ONegative),
        })
        .await
        .unwrap();
    let view = w.services.dashboard.recipient(&with_group).await.unwrap();
    assert_eq!(view.donors.len(), 2);

    let mut without_group = with_group.clone();
    without_group.blood_group = None;
    let view = w.services.dashboard.recipient(&without_group).await.unwrap();
    assert!(view.donors.is_empty());
}

#[tokio::test]
async fn admin_sees_counts_and_roster() {
    let w = world();
    w.services
        .registration
        .register_donor(donor_form("ravi@example.com"))
        .await
        .unwrap();
    w.services
        .auth
        .recipient_access(RecipientForm {
            full_name: "Lakshmi".into(),
            phone: "9000000000".into(),
            email: "lakshmi@example.com".into(),
            blood_group: None,
        })
        .await
        .unwrap();

    let admin = w
        .services
        .auth
        .login(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
        .await
        .unwrap();
    let stats = w.services.admin.stats(&admin).await.unwrap();
    assert_eq!((stats.donors, stats.hospitals, stats.blood_banks, stats.requests), (1, 0, 0, 1));

    let roster = w.services.admin.donors(&admin).await.unwrap();
    assert_eq!(roster[0].last_donation, NEVER_DONATED);
}
