use colored::*;

use lifeline_common::config::Config;
use lifeline_core::services::Services;

use crate::terminal::{colors, print};

pub async fn camps(services: &Services, cfg: &Config) -> anyhow::Result<()> {
    let photos = services.gallery.camp_photos().await;

    print::header("donation camps", cfg.quiet);
    for (idx, photo) in photos.iter().enumerate() {
        let caption = if photo.caption.is_empty() { "Untitled" } else { photo.caption.as_str() };
        print::tree_head(idx, caption);
        if cfg.quiet < 2 {
            print::as_tree_one_level(vec![("Url".to_string(), photo.url.color(colors::MUTED))]);
        }
    }
    if photos.iter().all(|p| p.placeholder) {
        lifeline_common::hint!("No camp photos uploaded yet; showing samples");
    }
    Ok(())
}
