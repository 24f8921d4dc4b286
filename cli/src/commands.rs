pub mod admin;
pub mod camps;
pub mod directory;
pub mod districts;
pub mod inventory;
pub mod login;
pub mod recipient;
pub mod register;
pub mod search;
pub mod stock;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use lifeline_common::config::Config;
use lifeline_common::models::blood::BloodGroup;
use lifeline_core::directory::ALL_LOCATIONS;
use lifeline_core::services::search::Urgency;

#[derive(Parser)]
#[command(name = "lifeline")]
#[command(about = "Connects blood donors, hospitals and blood banks.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file backing the store; omit to keep everything in memory
    #[arg(long, global = true, env = "LIFELINE_STORE")]
    pub store: Option<PathBuf>,

    /// Reduce output, repeat for less
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find eligible donors and nearby blood banks for a patient
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Browse the blood bank directory
    #[command(alias = "dir")]
    Directory {
        /// Matches bank names and addresses, ignoring case
        term: Option<String>,
        #[arg(short, long, default_value = ALL_LOCATIONS)]
        location: String,
    },
    /// Show blood stock across every registered bank
    #[command(alias = "inv")]
    Inventory,
    /// List districts, or the towns of one district
    #[command(alias = "d")]
    Districts { district: Option<String> },
    /// Show the donation camp gallery
    #[command(alias = "c")]
    Camps,
    /// Create a donor, hospital or blood bank account
    #[command(alias = "r", subcommand)]
    Register(RegisterKind),
    /// Sign in and show your dashboard
    #[command(alias = "l")]
    Login(Credentials),
    /// Open the recipient dashboard
    Recipient(RecipientArgs),
    /// Update one blood group in your blood bank's stock
    Stock {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(short, long)]
        group: BloodGroup,
        #[arg(short, long)]
        units: u32,
    },
    /// Administration
    #[command(alias = "a")]
    Admin {
        #[command(flatten)]
        credentials: Credentials,
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Args)]
pub struct Credentials {
    #[arg(long, env = "LIFELINE_EMAIL")]
    pub email: String,
    #[arg(long, env = "LIFELINE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Exact label such as A+ or O-; anything else matches no donor
    #[arg(short, long)]
    pub group: Option<String>,
    #[arg(short, long)]
    pub district: Option<String>,
    #[arg(short, long)]
    pub town: Option<String>,
    #[arg(short, long)]
    pub patient: Option<String>,
    #[arg(short, long, default_value = "normal")]
    pub urgency: Urgency,
    /// Notify every matched donor
    #[arg(short, long)]
    pub notify: bool,
}

#[derive(Args)]
pub struct RecipientArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    #[arg(short, long)]
    pub group: Option<BloodGroup>,
}

#[derive(Subcommand)]
pub enum RegisterKind {
    Donor(DonorArgs),
    Hospital(HospitalArgs),
    Bank(BankArgs),
}

#[derive(Args)]
pub struct DonorArgs {
    #[arg(long)]
    pub name: String,
    #[arg(short, long)]
    pub group: BloodGroup,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub district: String,
    #[arg(long)]
    pub town: String,
    #[arg(long)]
    pub village: Option<String>,
    /// Kilometres from the nearest town
    #[arg(long)]
    pub distance: Option<f64>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub last_donation: Option<String>,
}

#[derive(Args)]
pub struct HospitalArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub contact: String,
    /// Health Facility Registry id
    #[arg(long)]
    pub hfr_id: String,
    #[arg(long)]
    pub district: String,
    #[arg(long)]
    pub town: String,
}

#[derive(Args)]
pub struct BankArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = lifeline_common::models::facility::DEFAULT_BANK_CATEGORY)]
    pub category: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub contact: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub district: String,
    #[arg(long)]
    pub town: String,
    #[arg(long)]
    pub testing: Option<String>,
    #[arg(long)]
    pub processing: Option<String>,
    #[arg(long)]
    pub storage: Option<String>,
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// Counts and the donor roster
    Stats,
    /// The latest camp photos
    Photos,
    /// Add a camp photo
    AddPhoto {
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        caption: String,
    },
    /// Delete a camp photo by id
    DeletePhoto { id: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            store_path: self.store.clone(),
            ..Config::default()
        }
    }
}
