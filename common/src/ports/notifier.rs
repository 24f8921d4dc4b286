use crate::models::donor::Donor;

/// Defines the contract for alerting a donor that their group is needed.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one notification.
    ///
    /// # Returns
    /// * `Ok(true)` - the notification was handed off.
    /// * `Ok(false)` - the donor has no reachable contact.
    async fn notify(&self, donor: &Donor) -> anyhow::Result<bool>;
}
