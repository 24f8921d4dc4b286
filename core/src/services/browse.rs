//! Public views that need no session: the bank directory and the
//! inventory summary across every registered bank.

use std::sync::Arc;

use anyhow::Context;

use lifeline_common::ports::repository::DocumentStore;

use crate::directory::Directory;
use crate::inventory::InventorySummary;

pub struct BrowseService {
    store: Arc<dyn DocumentStore>,
    stock_target_units: u32,
}

impl BrowseService {
    pub fn new(store: Arc<dyn DocumentStore>, stock_target_units: u32) -> Self {
        Self {
            store,
            stock_target_units,
        }
    }

    /// Seed banks merged with every registered bank.
    pub async fn directory(&self) -> anyhow::Result<Directory> {
        let banks = self
            .store
            .all_banks()
            .await
            .context("Failed to fetch blood banks")?;
        Ok(Directory::new(&banks))
    }

    pub async fn inventory(&self) -> anyhow::Result<InventorySummary> {
        let banks = self
            .store
            .all_banks()
            .await
            .context("Failed to fetch blood banks")?;
        Ok(InventorySummary::from_banks(&banks, self.stock_target_units))
    }
}
