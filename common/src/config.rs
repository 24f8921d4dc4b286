use std::path::PathBuf;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@lifeline.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_STOCK_TARGET_UNITS: u32 = 50;

#[derive(Debug, Clone)]
pub struct Config {
    /// Suppresses the banner printed before every command.
    pub no_banner: bool,

    /// Output verbosity reduction. `1` drops headers, `2` drops record details.
    pub quiet: u8,

    /// JSON file backing the document store.
    ///
    /// `None` keeps everything in memory for the lifetime of the process.
    pub store_path: Option<PathBuf>,

    /// Credentials that open the admin dashboard without a stored account.
    pub admin_email: String,
    pub admin_password: String,

    /// Unit count per blood group treated as a full stock (100%).
    pub stock_target_units: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            store_path: None,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            stock_target_units: DEFAULT_STOCK_TARGET_UNITS,
        }
    }
}
