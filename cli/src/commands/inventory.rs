use colored::*;

use lifeline_common::config::Config;
use lifeline_core::services::Services;

use crate::terminal::{format, print, spinner};

pub async fn inventory(services: &Services, cfg: &Config) -> anyhow::Result<()> {
    let summary = spinner::run("Collecting stock from blood banks...", services.browse.inventory()).await?;

    print::header("blood inventory", cfg.quiet);
    let lines: Vec<(&str, ColoredString)> = summary
        .groups
        .iter()
        .map(|stock| (stock.group.label(), format::stock_bar(stock)))
        .collect();
    print::aligned_lines(lines);

    for stock in summary.critical() {
        tracing::warn!("{} is critically low ({} units)", stock.group, stock.units);
    }
    lifeline_common::success!(
        "{} units across {} blood banks",
        summary.total_units(),
        summary.bank_count
    );
    Ok(())
}
