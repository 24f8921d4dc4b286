use anyhow::bail;

use lifeline_common::config::Config;
use lifeline_common::location;

use crate::terminal::print;

pub fn districts(district: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let Some(district) = district else {
        print::header("districts", cfg.quiet);
        for (idx, name) in location::district_names().enumerate() {
            print::tree_head(idx, name);
        }
        return Ok(());
    };

    let Some(towns) = location::towns_of(district) else {
        bail!("Unknown district '{district}'; run `lifeline districts` for the list");
    };
    print::header(&format!("towns of {district}"), cfg.quiet);
    for (idx, town) in towns.iter().enumerate() {
        print::tree_head(idx, town);
    }
    Ok(())
}
