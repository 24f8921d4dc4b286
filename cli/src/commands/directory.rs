use lifeline_common::config::Config;
use lifeline_core::services::Services;

use crate::terminal::format;
use crate::terminal::print;

pub async fn directory(services: &Services, term: Option<String>, location: &str, cfg: &Config) -> anyhow::Result<()> {
    let directory = services.browse.directory().await?;

    if !directory.locations().contains(&location) {
        lifeline_common::hint!("Known locations: {}", directory.locations().join(", "));
    }

    let found = directory.search(term.as_deref().unwrap_or(""), location);
    if found.is_empty() {
        print::header("no blood banks found", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header("blood bank directory", cfg.quiet);
    for (idx, entry) in found.iter().enumerate() {
        print::tree_head(idx, &entry.name);
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::directory_to_details(entry));
        }
    }
    lifeline_common::success!("{} of {} blood banks shown", found.len(), directory.entries().len());
    Ok(())
}
