// Runtime configuration. Every value can come from a flag, the environment or a `.env`
// file loaded before parsing.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// JSON file holding this device's time entries, users and session
    #[arg(
        long,
        global = true,
        env = "FIELD_TIMESHEETS_STORE",
        default_value = "field-timesheets.json"
    )]
    pub store_path: PathBuf,

    /// How often a clock in or clock out is re-decided after losing a write race
    #[arg(
        long,
        global = true,
        env = "FIELD_TIMESHEETS_CONFLICT_RETRIES",
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub conflict_retries: u32,
}
