use lifeline_common::config::Config;
use lifeline_core::services::Services;
use lifeline_core::services::registration::{BloodBankForm, DonorForm, HospitalForm, Registered};

use crate::commands::RegisterKind;
use crate::terminal::print;

pub async fn register(services: &Services, kind: RegisterKind, cfg: &Config) -> anyhow::Result<()> {
    let registration = &services.registration;
    let registered = match kind {
        RegisterKind::Donor(args) => {
            print::header("donor registration", cfg.quiet);
            registration
                .register_donor(DonorForm {
                    full_name: args.name,
                    blood_group: args.group,
                    last_donation_date: args.last_donation,
                    phone: args.phone,
                    email: args.email,
                    password: args.password,
                    district: args.district,
                    nearest_town: args.town,
                    village: args.village,
                    distance_from_town: args.distance,
                })
                .await?
        }
        RegisterKind::Hospital(args) => {
            print::header("hospital registration", cfg.quiet);
            registration
                .register_hospital(HospitalForm {
                    hospital_name: args.name,
                    email: args.email,
                    password: args.password,
                    contact_number: args.contact,
                    hfr_id: args.hfr_id,
                    district: args.district,
                    town: args.town,
                })
                .await?
        }
        RegisterKind::Bank(args) => {
            print::header("blood bank registration", cfg.quiet);
            registration
                .register_bank(BloodBankForm {
                    blood_bank_name: args.name,
                    category: args.category,
                    email: args.email,
                    password: args.password,
                    contact_number: args.contact,
                    address: args.address,
                    district: args.district,
                    town: args.town,
                    testing_facilities: args.testing,
                    processing_facilities: args.processing,
                    storage_capacity: args.storage,
                })
                .await?
        }
    };

    registration_ends(&registered, cfg);
    Ok(())
}

fn registration_ends(registered: &Registered, cfg: &Config) {
    if cfg.quiet < 2 {
        print::aligned_lines(vec![
            ("Profile id", registered.profile_id.as_str()),
            ("Login id", registered.login_id.as_str()),
        ]);
    }
    if cfg.store_path.is_none() {
        lifeline_common::hint!("No --store given; this account is gone when the program exits");
    }
}
