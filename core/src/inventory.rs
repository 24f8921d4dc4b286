//! # Inventory Aggregation
//!
//! Sums the per-group stock of many blood banks and grades each group
//! against a target level.

use std::collections::BTreeMap;
use std::fmt;

use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::facility::BloodBank;

const CRITICAL_BELOW_PERCENT: u8 = 20;
const WELL_STOCKED_ABOVE_PERCENT: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    CriticalLow,
    Stable,
    WellStocked,
}

impl StockLevel {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage < CRITICAL_BELOW_PERCENT {
            StockLevel::CriticalLow
        } else if percentage > WELL_STOCKED_ABOVE_PERCENT {
            StockLevel::WellStocked
        } else {
            StockLevel::Stable
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StockLevel::CriticalLow => "CRITICAL LOW",
            StockLevel::Stable => "Stable",
            StockLevel::WellStocked => "Well Stocked",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStock {
    pub group: BloodGroup,
    pub units: u64,
    /// Share of the target level, capped at 100.
    pub percentage: u8,
    pub level: StockLevel,
}

impl GroupStock {
    pub fn new(group: BloodGroup, units: u64, target_units: u32) -> Self {
        let percentage = fill_percentage(units, target_units);
        Self {
            group,
            units,
            percentage,
            level: StockLevel::from_percentage(percentage),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    /// One entry per group, in [`BloodGroup::ALL`] order.
    pub groups: Vec<GroupStock>,
    pub bank_count: usize,
}

impl InventorySummary {
    pub fn from_banks(banks: &[BloodBank], target_units: u32) -> Self {
        let totals = aggregate(banks);
        let groups = totals
            .into_iter()
            .map(|(group, units)| GroupStock::new(group, units, target_units))
            .collect();
        Self {
            groups,
            bank_count: banks.len(),
        }
    }

    pub fn total_units(&self) -> u64 {
        self.groups.iter().map(|g| g.units).sum()
    }

    pub fn critical(&self) -> impl Iterator<Item = &GroupStock> {
        self.groups
            .iter()
            .filter(|g| g.level == StockLevel::CriticalLow)
    }
}

/// Per-group unit totals across `banks`. Every group is present; groups no
/// bank lists total zero.
pub fn aggregate<'a, I>(banks: I) -> BTreeMap<BloodGroup, u64>
where
    I: IntoIterator<Item = &'a BloodBank>,
{
    let mut totals: BTreeMap<BloodGroup, u64> =
        BloodGroup::ALL.into_iter().map(|g| (g, 0)).collect();
    for bank in banks {
        for (group, units) in &bank.inventory {
            *totals.entry(*group).or_insert(0) += u64::from(*units);
        }
    }
    totals
}

fn fill_percentage(units: u64, target_units: u32) -> u8 {
    if target_units == 0 {
        return if units > 0 { 100 } else { 0 };
    }
    let percent = units.saturating_mul(100) / u64::from(target_units);
    percent.min(100) as u8
}
