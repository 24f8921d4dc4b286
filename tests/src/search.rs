#![cfg(test)]
use std::sync::Arc;

use lifeline_common::config::Config;
use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::donor::Donor;
use lifeline_common::models::facility::BloodBank;
use lifeline_common::ports::repository::{BloodBankRepository, DonorRepository};
use lifeline_core::adapters::clock::FixedClock;
use lifeline_core::adapters::json_store::JsonStore;
use lifeline_core::services::Services;
use lifeline_core::services::search::BloodRequest;

use crate::fixtures::{RecordingNotifier, now, world};

async fn seed_donors(store: &impl DonorRepository, donors: Vec<Donor>) {
    for donor in donors {
        store.insert_donor(donor).await.unwrap();
    }
}

#[tokio::test]
async fn search_returns_only_eligible_donors_of_the_group() {
    let w = world();
    seed_donors(
        w.store.as_ref(),
        vec![
            Donor::new(BloodGroup::APositive).with_name("old gift").with_last_donation("2020-01-01"),
            Donor::new(BloodGroup::APositive).with_name("never gave"),
            Donor::new(BloodGroup::ONegative).with_name("other group"),
            Donor::new(BloodGroup::APositive).with_name("too recent").with_last_donation("2025-05-02"),
        ],
    )
    .await;

    let request = BloodRequest {
        blood_group: Some("A+".into()),
        ..BloodRequest::default()
    };
    let outcome = w.services.search.search(&request, false).await.unwrap();

    let names: Vec<&str> = outcome.donors.iter().map(|d| d.full_name.as_str()).collect();
    assert_eq!(names, ["old gift", "never gave"]);
    assert_eq!(outcome.notified, 0);
}

#[tokio::test]
async fn search_without_group_finds_no_donors() {
    let w = world();
    seed_donors(w.store.as_ref(), vec![Donor::new(BloodGroup::APositive)]).await;

    let outcome = w
        .services
        .search
        .search(&BloodRequest::default(), true)
        .await
        .unwrap();
    assert!(outcome.donors.is_empty());
    assert!(w.notifier.notified.lock().unwrap().is_empty());
}

#[tokio::test]
async fn search_narrows_by_location_and_lists_bank_stock() {
    let w = world();
    seed_donors(
        w.store.as_ref(),
        vec![
            Donor::new(BloodGroup::BPositive).with_name("tenali").with_location("Guntur", "Tenali"),
            Donor::new(BloodGroup::BPositive).with_name("guntur").with_location("Guntur", "Guntur"),
            Donor::new(BloodGroup::BPositive).with_name("krishna").with_location("Krishna", "Machilipatnam"),
        ],
    )
    .await;
    w.store
        .insert_bank(BloodBank::new("Tenali Blood Centre").with_location("Guntur", "Tenali").with_stock(BloodGroup::BPositive, 7))
        .await
        .unwrap();
    w.store
        .insert_bank(BloodBank::new("Guntur Blood Centre").with_location("Guntur", "Guntur"))
        .await
        .unwrap();

    let request = BloodRequest {
        blood_group: Some("B+".into()),
        district: Some("Guntur".into()),
        nearest_town: Some("Tenali".into()),
        ..BloodRequest::default()
    };
    let outcome = w.services.search.search(&request, true).await.unwrap();

    assert_eq!(outcome.donors.len(), 1);
    assert_eq!(outcome.donors[0].full_name, "tenali");
    assert_eq!(outcome.banks.len(), 1);
    assert_eq!(outcome.banks[0].requested_units, Some(7));
    assert_eq!(outcome.notified, 1);
    assert_eq!(*w.notifier.notified.lock().unwrap(), vec![outcome.donors[0].id.clone()]);
}

#[tokio::test]
async fn search_by_district_lists_every_bank_in_it() {
    let w = world();
    for town in ["Tenali", "Guntur"] {
        w.store
            .insert_bank(BloodBank::new(format!("{town} bank")).with_location("Guntur", town))
            .await
            .unwrap();
    }
    w.store
        .insert_bank(BloodBank::new("Elsewhere").with_location("Krishna", "Machilipatnam"))
        .await
        .unwrap();

    let request = BloodRequest {
        district: Some("Guntur".into()),
        ..BloodRequest::default()
    };
    let outcome = w.services.search.search(&request, false).await.unwrap();
    assert_eq!(outcome.banks.len(), 2);
    assert!(outcome.banks.iter().all(|b| b.requested_units.is_none()));
}

#[tokio::test]
async fn search_with_unknown_label_finds_no_donors() {
    let w = world();
    seed_donors(w.store.as_ref(), vec![Donor::new(BloodGroup::APositive)]).await;
    w.store
        .insert_bank(BloodBank::new("Any bank").with_stock(BloodGroup::APositive, 3))
        .await
        .unwrap();

    for label in ["", "a+", "C+"] {
        let request = BloodRequest {
            blood_group: Some(label.into()),
            ..BloodRequest::default()
        };
        let outcome = w.services.search.search(&request, false).await.unwrap();
        assert!(outcome.donors.is_empty(), "label {label:?}");
        assert_eq!(outcome.banks.len(), 1);
        assert_eq!(outcome.banks[0].requested_units, None);
    }
}

#[tokio::test]
async fn search_skips_stored_donors_with_unreadable_groups() {
    let dir = std::env::temp_dir().join(format!("lifeline-search-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("store.json");
    std::fs::write(
        &path,
        br#"{"donors_list":[
            {"id":"valid","fullName":"Valid","bloodGroup":"A+"},
            {"id":"blank","fullName":"Blank","bloodGroup":""},
            {"id":"lower","fullName":"Lower","bloodGroup":"a+"}
        ]}"#,
    )
    .unwrap();

    let store = JsonStore::open(&path).await.unwrap();
    let services = Services::new(
        Arc::new(store),
        Arc::new(FixedClock(now())),
        Arc::new(RecordingNotifier::default()),
        &Config::default(),
    );
    let request = BloodRequest {
        blood_group: Some("A+".into()),
        ..BloodRequest::default()
    };
    let outcome = services.search.search(&request, false).await.unwrap();

    let ids: Vec<&str> = outcome.donors.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["valid"]);

    let _ = std::fs::remove_dir_all(&dir);
}
