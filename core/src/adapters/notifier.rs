use async_trait::async_trait;
use tracing::{info, warn};

use lifeline_common::models::donor::Donor;
use lifeline_common::ports::notifier::Notifier;

/// Writes each notification to the log instead of a push service.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, donor: &Donor) -> anyhow::Result<bool> {
        if donor.phone.is_empty() && donor.email.is_empty() {
            warn!("Donor '{}' has no phone or email on record", donor.id);
            return Ok(false);
        }
        info!(
            "Notified donor '{}' ({}) that {} blood is needed",
            donor.id, donor.full_name, donor.blood_group
        );
        Ok(true)
    }
}
